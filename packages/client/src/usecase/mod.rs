//! UseCase 層
//!
//! ビジネスロジックを実装するレイヤー。
//! UI 層から呼び出され、Domain 層の Repository を操作します。

pub mod delete_room;
pub mod error;
pub mod fetch_rooms;

pub use delete_room::{DeleteRoomUseCase, deleted_message};
pub use error::{DeleteRoomError, FetchRoomsError};
pub use fetch_rooms::FetchRoomsUseCase;
