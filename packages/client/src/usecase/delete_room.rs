//! UseCase: ルームの削除
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - DeleteRoomUseCase::execute() メソッド
//! - 成功時のメッセージ、失敗時のエラーメッセージの組み立て
//!
//! ### どのような状況を想定しているか
//! - 正常系：削除成功
//! - 異常系：バックエンドがエラーペイロードを返す、通信に失敗する

use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::{RoomId, RoomRepository};

use super::error::DeleteRoomError;

/// Message shown after a room was deleted
pub fn deleted_message(id: RoomId) -> String {
    format!("Room No {id} was deleted.")
}

/// ルーム削除のユースケース
///
/// Each call issues its own request; concurrent deletes are neither
/// deduplicated nor queued.
pub struct DeleteRoomUseCase {
    /// Repository（データアクセス層の抽象化）
    repository: Arc<dyn RoomRepository>,
}

impl DeleteRoomUseCase {
    /// 新しい DeleteRoomUseCase を作成
    pub fn new(repository: Arc<dyn RoomRepository>) -> Self {
        Self { repository }
    }

    /// 削除を実行
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - 利用者に表示する成功メッセージ
    /// * `Err(DeleteRoomError)` - 削除失敗
    pub async fn execute(&self, id: RoomId) -> Result<String, DeleteRoomError> {
        match self.repository.delete_room(id).await {
            Ok(()) => {
                info!(room_id = %id, "room deleted");
                Ok(deleted_message(id))
            }
            Err(source) => {
                warn!(room_id = %id, error = %source, "failed to delete room");
                Err(DeleteRoomError::Repository { id, source })
            }
        }
    }
}
