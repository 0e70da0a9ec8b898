//! View model of the listing and its plain-text rendering.

use std::fmt::Write;

use lakeside_shared::time::timestamp_to_jst_rfc3339;

use crate::domain::{Room, RoomFilter, RoomId, RoomType, Timestamp};

/// Text shown in place of the table while a load is pending
pub const LOADING_TEXT: &str = "Loading rooms...";

/// Text of the single row shown when the current page has no rooms
pub const EMPTY_STATE_TEXT: &str = "No Rooms Found";

/// One table row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomRow {
    /// 1-based position on the current page
    pub serial: usize,
    pub id: RoomId,
    pub room_type: String,
    /// Price formatted for display, e.g. `$120.5`
    pub price: String,
}

impl RoomRow {
    pub fn new(serial: usize, room: &Room) -> Self {
        Self {
            serial,
            id: room.id,
            room_type: room.room_type.as_str().to_string(),
            price: format!("${}", room.price),
        }
    }
}

/// Snapshot of the listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomsView {
    pub loading: bool,
    pub success: Option<String>,
    pub error: Option<String>,
    pub load_error: Option<String>,
    pub filter: RoomFilter,
    pub rows: Vec<RoomRow>,
    pub current_page: usize,
    pub total_pages: usize,
    /// Number of rooms after filtering
    pub total_rooms: usize,
    pub loaded_at: Option<Timestamp>,
}

impl RoomsView {
    /// Whether the table falls back to the empty-state row
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

const HEADERS: [&str; 4] = ["S.No", "Room Type", "Room Price", "Actions"];

fn actions(id: RoomId) -> String {
    format!("view {id} | edit {id} | delete {id}")
}

/// Render the listing as a text table
pub fn render_listing(view: &RoomsView) -> String {
    if view.loading {
        return format!("{}\n", LOADING_TEXT);
    }

    let mut out = String::new();
    if let Some(success) = &view.success {
        let _ = writeln!(out, "[ok] {success}");
    }
    if let Some(error) = &view.error {
        let _ = writeln!(out, "[error] {error}");
    }
    if let Some(error) = &view.load_error {
        let _ = writeln!(out, "[error] {error}");
    }
    let _ = writeln!(out, "Existing Rooms ({})", view.filter);

    let cells: Vec<[String; 4]> = view
        .rows
        .iter()
        .map(|row| {
            [
                row.serial.to_string(),
                row.room_type.clone(),
                row.price.clone(),
                actions(row.id),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(str::len);
    for row in &cells {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }
    let table_width = widths.iter().sum::<usize>() + 3 * (widths.len() - 1);

    let header = HEADERS
        .iter()
        .zip(&widths)
        .map(|(h, &w)| format!("{h:<w$}"))
        .collect::<Vec<_>>()
        .join(" | ");
    let _ = writeln!(out, "{header}");
    let _ = writeln!(out, "{}", "-".repeat(table_width));

    if cells.is_empty() {
        let _ = writeln!(out, "{:^width$}", EMPTY_STATE_TEXT, width = table_width);
    } else {
        for row in &cells {
            let line = row
                .iter()
                .zip(&widths)
                .map(|(c, &w)| format!("{c:<w$}"))
                .collect::<Vec<_>>()
                .join(" | ");
            let _ = writeln!(out, "{}", line.trim_end());
        }
    }

    // no pages, no current page
    let page = if view.total_pages == 0 {
        0
    } else {
        view.current_page
    };
    let _ = write!(
        out,
        "Page {} of {} ({} rooms)",
        page, view.total_pages, view.total_rooms
    );
    if let Some(loaded_at) = view.loaded_at {
        let _ = write!(
            out,
            ", loaded at {}",
            timestamp_to_jst_rfc3339(loaded_at.value())
        );
    }
    out.push('\n');
    out
}

/// Render the detail of a single room
pub fn render_room_detail(room: &Room) -> String {
    format!(
        "Room {}\n  type:   {}\n  price:  ${}\n  booked: {}\n  photo:  {}\n",
        room.id,
        room.room_type,
        room.price,
        if room.booked { "yes" } else { "no" },
        if room.has_photo() { "yes" } else { "none" },
    )
}

/// Render the filter choices
pub fn render_room_types(types: &[RoomType]) -> String {
    if types.is_empty() {
        return "No room types available\n".to_string();
    }
    let mut out = String::from("Room types:\n");
    for room_type in types {
        let _ = writeln!(out, "  {room_type}");
    }
    out
}
