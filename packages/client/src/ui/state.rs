//! Component state of the existing-rooms listing.

use crate::domain::{
    Paginator, Room, RoomCollection, RoomFilter, Timestamp, compute_filtered_collection,
};

use super::view::{RoomRow, RoomsView};

/// A transient message; `id` lets its timer clear exactly this message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlashMessage {
    pub id: u64,
    pub text: String,
}

/// Everything the listing shows, derived state included.
///
/// `filtered` is only ever written by [`RoomsState::recompute`].
#[derive(Debug, Clone)]
pub struct RoomsState {
    rooms: RoomCollection,
    filter: RoomFilter,
    filtered: Vec<Room>,
    paginator: Paginator,
    loading: bool,
    load_error: Option<String>,
    success: Option<FlashMessage>,
    error: Option<FlashMessage>,
    next_flash_id: u64,
}

impl RoomsState {
    pub fn new(paginator: Paginator) -> Self {
        Self {
            rooms: RoomCollection::default(),
            filter: RoomFilter::none(),
            filtered: Vec::new(),
            paginator,
            loading: false,
            load_error: None,
            success: None,
            error: None,
            next_flash_id: 0,
        }
    }

    pub fn rooms(&self) -> &RoomCollection {
        &self.rooms
    }

    pub fn filter(&self) -> &RoomFilter {
        &self.filter
    }

    pub fn filtered(&self) -> &[Room] {
        &self.filtered
    }

    pub fn paginator(&self) -> &Paginator {
        &self.paginator
    }

    pub fn paginator_mut(&mut self) -> &mut Paginator {
        &mut self.paginator
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn start_loading(&mut self) {
        self.loading = true;
    }

    /// Replace the whole collection after a successful load
    pub fn finish_loading(&mut self, rooms: Vec<Room>, loaded_at: Timestamp) {
        self.rooms = RoomCollection::loaded(rooms, loaded_at);
        self.loading = false;
        self.load_error = None;
        self.recompute();
    }

    /// Record a failed load; the previous collection stays visible
    pub fn fail_loading(&mut self, message: String) {
        self.loading = false;
        self.load_error = Some(message);
    }

    pub fn load_error(&self) -> Option<&str> {
        self.load_error.as_deref()
    }

    pub fn set_filter(&mut self, filter: RoomFilter) {
        self.filter = filter;
        self.recompute();
    }

    fn recompute(&mut self) {
        self.filtered = compute_filtered_collection(self.rooms.rooms(), &self.filter);
        self.paginator.clamp(self.filtered.len());
    }

    /// Show a success message and return its id
    pub fn flash_success(&mut self, text: String) -> u64 {
        let id = self.take_flash_id();
        self.success = Some(FlashMessage { id, text });
        id
    }

    /// Show an error message and return its id
    pub fn flash_error(&mut self, text: String) -> u64 {
        let id = self.take_flash_id();
        self.error = Some(FlashMessage { id, text });
        id
    }

    fn take_flash_id(&mut self) -> u64 {
        let id = self.next_flash_id;
        self.next_flash_id += 1;
        id
    }

    /// Clear the message with `id`; a newer message is left alone
    pub fn clear_flash(&mut self, id: u64) {
        if self.success.as_ref().is_some_and(|m| m.id == id) {
            self.success = None;
        }
        if self.error.as_ref().is_some_and(|m| m.id == id) {
            self.error = None;
        }
    }

    pub fn success(&self) -> Option<&FlashMessage> {
        self.success.as_ref()
    }

    pub fn error(&self) -> Option<&FlashMessage> {
        self.error.as_ref()
    }

    /// Snapshot of what should be displayed
    pub fn view(&self) -> RoomsView {
        let page = self.paginator.page(&self.filtered);
        let rows = page
            .items
            .iter()
            .enumerate()
            .map(|(index, room)| RoomRow::new(index + 1, room))
            .collect();

        RoomsView {
            loading: self.loading,
            success: self.success.as_ref().map(|m| m.text.clone()),
            error: self.error.as_ref().map(|m| m.text.clone()),
            load_error: self.load_error.clone(),
            filter: self.filter.clone(),
            rows,
            current_page: page.number,
            total_pages: self.paginator.total_pages(self.filtered.len()),
            total_rooms: self.filtered.len(),
            loaded_at: self.rooms.loaded_at(),
        }
    }
}
