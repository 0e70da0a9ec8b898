//! Client-side pagination over the filtered collection.

use std::ops::Range;

use super::error::PaginationError;

/// Default number of rows shown per page
pub const DEFAULT_PAGE_SIZE: usize = 8;

/// Number of pages needed for `total_items` rows: `ceil(total_items / page_size)`.
///
/// An empty collection has zero pages.
pub fn total_pages(total_items: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    total_items.div_ceil(page_size)
}

/// Offsets `[(page - 1) * page_size, page * page_size)` clipped to `total_items`.
///
/// Page 0 and pages past the end yield an empty range.
pub fn page_bounds(page: usize, page_size: usize, total_items: usize) -> Range<usize> {
    if page == 0 {
        return 0..0;
    }
    let start = (page - 1).saturating_mul(page_size).min(total_items);
    let end = page.saturating_mul(page_size).min(total_items);
    start..end
}

/// One page of rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page<'a, T> {
    /// 1-based page number
    pub number: usize,
    /// Offset of the first row within the whole collection
    pub offset: usize,
    /// Rows on this page (at most one page size)
    pub items: &'a [T],
}

impl<T> Page<'_, T> {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Current page selection with a fixed page size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paginator {
    page_size: usize,
    current_page: usize,
}

impl Default for Paginator {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            current_page: 1,
        }
    }
}

impl Paginator {
    /// Create a paginator positioned on the first page
    ///
    /// # Errors
    ///
    /// Returns `PaginationError::PageSizeZero` if `page_size` is 0
    pub fn new(page_size: usize) -> Result<Self, PaginationError> {
        if page_size == 0 {
            return Err(PaginationError::PageSizeZero);
        }
        Ok(Self {
            page_size,
            current_page: 1,
        })
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// 1-based current page
    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn total_pages(&self, total_items: usize) -> usize {
        total_pages(total_items, self.page_size)
    }

    /// Replace the current page.
    ///
    /// Pages past the end are accepted and simply show no rows.
    ///
    /// # Errors
    ///
    /// Returns `PaginationError::PageOutOfRange` for page 0
    pub fn go_to(&mut self, page: usize) -> Result<(), PaginationError> {
        if page == 0 {
            return Err(PaginationError::PageOutOfRange { requested: page });
        }
        self.current_page = page;
        Ok(())
    }

    /// Move to the following page if there is one; returns whether it moved
    pub fn next(&mut self, total_items: usize) -> bool {
        if self.current_page < self.total_pages(total_items) {
            self.current_page += 1;
            true
        } else {
            false
        }
    }

    /// Move to the preceding page if there is one; returns whether it moved
    pub fn previous(&mut self) -> bool {
        if self.current_page > 1 {
            self.current_page -= 1;
            true
        } else {
            false
        }
    }

    /// Pull the current page back onto the last page after the collection shrank.
    pub fn clamp(&mut self, total_items: usize) {
        let last = self.total_pages(total_items).max(1);
        if self.current_page > last {
            self.current_page = last;
        }
    }

    /// The slice of `items` shown on the current page
    pub fn page<'a, T>(&self, items: &'a [T]) -> Page<'a, T> {
        let bounds = page_bounds(self.current_page, self.page_size, items.len());
        Page {
            number: self.current_page,
            offset: bounds.start,
            items: &items[bounds],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages_is_ceiling_division() {
        // テスト項目: 総ページ数は ceil(N / S) になる
        // then (期待する結果):
        assert_eq!(total_pages(0, 8), 0);
        assert_eq!(total_pages(1, 8), 1);
        assert_eq!(total_pages(8, 8), 1);
        assert_eq!(total_pages(9, 8), 2);
        assert_eq!(total_pages(16, 8), 2);
        assert_eq!(total_pages(17, 8), 3);
        assert_eq!(total_pages(10, 3), 4);
    }

    #[test]
    fn test_total_pages_matches_ceil_for_many_sizes() {
        // テスト項目: さまざまな N と S について ceil(N / S) と一致する
        for size in 1..=10usize {
            for n in 0..=50usize {
                let expected = (n as f64 / size as f64).ceil() as usize;
                assert_eq!(total_pages(n, size), expected, "n={n} size={size}");
            }
        }
    }

    #[test]
    fn test_second_page_of_ten_rooms() {
        // テスト項目: S=8, N=10, P=2 のとき 8..10 の 2 件が表示される
        // given (前提条件):
        let items: Vec<usize> = (0..10).collect();
        let mut paginator = Paginator::new(8).unwrap();

        // when (操作):
        paginator.go_to(2).unwrap();
        let page = paginator.page(&items);

        // then (期待する結果):
        assert_eq!(page.number, 2);
        assert_eq!(page.offset, 8);
        assert_eq!(page.items, &[8, 9]);
    }

    #[test]
    fn test_page_past_the_end_is_empty() {
        // テスト項目: 範囲外のページを指定すると空のページになる（クランプしない）
        // given (前提条件):
        let items: Vec<usize> = (0..10).collect();
        let mut paginator = Paginator::default();

        // when (操作):
        paginator.go_to(5).unwrap();
        let page = paginator.page(&items);

        // then (期待する結果):
        assert_eq!(paginator.current_page(), 5);
        assert!(page.is_empty());
    }

    #[test]
    fn test_go_to_page_zero_fails() {
        // テスト項目: ページ 0 は指定できない
        // given (前提条件):
        let mut paginator = Paginator::default();

        // when (操作):
        let result = paginator.go_to(0);

        // then (期待する結果):
        assert_eq!(
            result,
            Err(PaginationError::PageOutOfRange { requested: 0 })
        );
        assert_eq!(paginator.current_page(), 1);
    }

    #[test]
    fn test_new_with_zero_page_size_fails() {
        // テスト項目: ページサイズ 0 のページャは作成できない
        // then (期待する結果):
        assert_eq!(Paginator::new(0), Err(PaginationError::PageSizeZero));
    }

    #[test]
    fn test_next_and_previous_stay_in_bounds() {
        // テスト項目: 次/前ページ移動は範囲内に留まる
        // given (前提条件):
        let mut paginator = Paginator::new(8).unwrap();

        // when / then:
        assert!(!paginator.previous());
        assert!(paginator.next(10));
        assert_eq!(paginator.current_page(), 2);
        assert!(!paginator.next(10));
        assert!(paginator.previous());
        assert_eq!(paginator.current_page(), 1);
    }

    #[test]
    fn test_clamp_moves_to_last_valid_page() {
        // テスト項目: コレクションが縮んだ場合、最後の有効ページに戻る
        // given (前提条件):
        let mut paginator = Paginator::new(8).unwrap();
        paginator.go_to(3).unwrap();

        // when (操作):
        paginator.clamp(10);

        // then (期待する結果):
        assert_eq!(paginator.current_page(), 2);
    }

    #[test]
    fn test_clamp_on_empty_collection_returns_to_first_page() {
        // テスト項目: 空のコレクションではページ 1 に戻る
        // given (前提条件):
        let mut paginator = Paginator::new(8).unwrap();
        paginator.go_to(4).unwrap();

        // when (操作):
        paginator.clamp(0);

        // then (期待する結果):
        assert_eq!(paginator.current_page(), 1);
        let empty: [u8; 0] = [];
        assert!(paginator.page(&empty).is_empty());
    }
}
