//! UseCase: ルーム一覧の取得
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - FetchRoomsUseCase::execute() メソッド
//! - Repository からの一覧取得と、キャンセルトークンとの競合
//!
//! ### どのような状況を想定しているか
//! - 正常系：一覧をそのままの順序で返す
//! - 異常系：Repository のエラーがそのまま伝搬する
//! - エッジケース：応答前にキャンセルされた場合は Cancelled になる

use std::sync::Arc;

use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::domain::{Room, RoomRepository};

use super::error::FetchRoomsError;

/// ルーム一覧取得のユースケース
pub struct FetchRoomsUseCase {
    /// Repository（データアクセス層の抽象化）
    repository: Arc<dyn RoomRepository>,
}

impl FetchRoomsUseCase {
    /// 新しい FetchRoomsUseCase を作成
    pub fn new(repository: Arc<dyn RoomRepository>) -> Self {
        Self { repository }
    }

    /// 一覧取得を実行
    ///
    /// The request is raced against `cancel`; whichever finishes first wins.
    ///
    /// # Returns
    ///
    /// * `Ok(Vec<Room>)` - 取得したルーム（バックエンドの順序）
    /// * `Err(FetchRoomsError::Cancelled)` - 応答前にキャンセルされた
    /// * `Err(FetchRoomsError::Repository)` - 取得失敗
    pub async fn execute(&self, cancel: &CancellationToken) -> Result<Vec<Room>, FetchRoomsError> {
        if cancel.is_cancelled() {
            return Err(FetchRoomsError::Cancelled);
        }

        tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                debug!("room list request cancelled");
                Err(FetchRoomsError::Cancelled)
            }
            result = self.repository.list_rooms() => Ok(result?),
        }
    }
}
