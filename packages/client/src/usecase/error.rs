//! UseCase 層のエラー定義

use thiserror::Error;

use crate::domain::{RepositoryError, RoomId};

/// ルーム一覧取得のエラー
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FetchRoomsError {
    /// The request was cancelled before it completed; never shown to the user
    #[error("room list request was cancelled")]
    Cancelled,

    #[error("{0}")]
    Repository(#[from] RepositoryError),
}

/// ルーム削除のエラー
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DeleteRoomError {
    #[error("Error deleting room {id}: {source}")]
    Repository {
        id: RoomId,
        #[source]
        source: RepositoryError,
    },
}
