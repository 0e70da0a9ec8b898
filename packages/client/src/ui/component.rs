//! The existing-rooms component.
//!
//! Owns the listing state and wires the use cases to it. Every task the
//! component spawns is bound to its lifetime token: `unmount` (or dropping
//! the component) cancels the token, in-flight list requests are abandoned
//! and no state is written afterwards.

use std::{sync::Arc, time::Duration};

use lakeside_shared::time::now_millis;
use tokio::{
    sync::{Mutex, MutexGuard},
    task::JoinHandle,
};
use tokio_util::sync::{CancellationToken, DropGuard};
use tracing::{debug, warn};

use crate::{
    domain::{
        PaginationError, Paginator, Room, RoomFilter, RoomId, RoomRepository, RoomType, Timestamp,
        available_room_types,
    },
    usecase::{DeleteRoomUseCase, FetchRoomsError, FetchRoomsUseCase},
};

use super::{state::RoomsState, view::RoomsView};

/// How long success and error messages stay visible
pub const FLASH_MESSAGE_TTL: Duration = Duration::from_millis(1500);

struct Inner {
    state: Mutex<RoomsState>,
    fetch_rooms: FetchRoomsUseCase,
    delete_room: DeleteRoomUseCase,
    lifetime: CancellationToken,
}

impl Inner {
    /// Lock the state unless the component is unmounted.
    ///
    /// Cancellation is checked while holding the guard, so an `unmount` that
    /// happens while waiting for the lock still wins.
    async fn lock_mounted(&self) -> Option<MutexGuard<'_, RoomsState>> {
        let state = self.state.lock().await;
        if self.lifetime.is_cancelled() {
            return None;
        }
        Some(state)
    }

    async fn fetch(&self) {
        let Some(mut state) = self.lock_mounted().await else {
            return;
        };
        state.start_loading();
        drop(state);

        let result = self.fetch_rooms.execute(&self.lifetime).await;

        let Some(mut state) = self.lock_mounted().await else {
            return;
        };
        match result {
            Ok(rooms) => state.finish_loading(rooms, Timestamp::new(now_millis())),
            Err(FetchRoomsError::Cancelled) => {}
            Err(e) => {
                warn!(error = %e, "failed to load rooms");
                state.fail_loading(e.to_string());
            }
        }
    }

    fn schedule_clear(self: &Arc<Self>, flash_id: u64) {
        let inner = Arc::clone(self);
        tokio::spawn(async move {
            tokio::select! {
                _ = inner.lifetime.cancelled() => {}
                _ = tokio::time::sleep(FLASH_MESSAGE_TTL) => {
                    if let Some(mut state) = inner.lock_mounted().await {
                        state.clear_flash(flash_id);
                    }
                }
            }
        });
    }
}

/// Listing of existing rooms with filtering, pagination and deletion
pub struct ExistingRooms {
    inner: Arc<Inner>,
    _teardown: DropGuard,
}

impl ExistingRooms {
    /// Create the component; nothing is requested until [`mount`](Self::mount)
    pub fn new(repository: Arc<dyn RoomRepository>, paginator: Paginator) -> Self {
        let lifetime = CancellationToken::new();
        let inner = Inner {
            state: Mutex::new(RoomsState::new(paginator)),
            fetch_rooms: FetchRoomsUseCase::new(Arc::clone(&repository)),
            delete_room: DeleteRoomUseCase::new(repository),
            lifetime: lifetime.clone(),
        };
        Self {
            inner: Arc::new(inner),
            _teardown: lifetime.drop_guard(),
        }
    }

    /// Issue the initial load in the background.
    ///
    /// Must be called from within a tokio runtime.
    pub fn mount(&self) -> JoinHandle<()> {
        debug!("existing rooms mounted");
        let inner = Arc::clone(&self.inner);
        tokio::spawn(async move { inner.fetch().await })
    }

    /// Cancel the in-flight load and stop all pending timers
    pub fn unmount(&self) {
        debug!("existing rooms unmounted");
        self.inner.lifetime.cancel();
    }

    pub fn is_mounted(&self) -> bool {
        !self.inner.lifetime.is_cancelled()
    }

    /// Load the room list again
    pub async fn refresh(&self) {
        self.inner.fetch().await;
    }

    /// Delete a room, show the outcome for [`FLASH_MESSAGE_TTL`] and reload on success
    pub async fn delete_room(&self, id: RoomId) {
        let result = self.inner.delete_room.execute(id).await;

        let deleted = result.is_ok();
        let flash_id = {
            let Some(mut state) = self.inner.lock_mounted().await else {
                return;
            };
            match result {
                Ok(message) => state.flash_success(message),
                Err(e) => state.flash_error(e.to_string()),
            }
        };
        self.inner.schedule_clear(flash_id);

        if deleted {
            self.refresh().await;
        }
    }

    /// Apply filter criteria; the filtered collection is recomputed
    pub async fn set_filter(&self, filter: RoomFilter) {
        self.inner.state.lock().await.set_filter(filter);
    }

    pub async fn clear_filter(&self) {
        self.set_filter(RoomFilter::none()).await;
    }

    /// Replace the current page number
    pub async fn go_to_page(&self, page: usize) -> Result<(), PaginationError> {
        self.inner.state.lock().await.paginator_mut().go_to(page)
    }

    /// Returns whether the page changed
    pub async fn next_page(&self) -> bool {
        let mut state = self.inner.state.lock().await;
        let total = state.filtered().len();
        state.paginator_mut().next(total)
    }

    /// Returns whether the page changed
    pub async fn previous_page(&self) -> bool {
        self.inner.state.lock().await.paginator_mut().previous()
    }

    /// Look up a loaded room by ID
    pub async fn room(&self, id: RoomId) -> Option<Room> {
        self.inner.state.lock().await.rooms().get(id).cloned()
    }

    /// Filter choices derived from the loaded rooms
    pub async fn room_types(&self) -> Vec<RoomType> {
        available_room_types(self.inner.state.lock().await.rooms().rooms())
    }

    /// Snapshot of what should be displayed
    pub async fn view(&self) -> RoomsView {
        self.inner.state.lock().await.view()
    }
}
