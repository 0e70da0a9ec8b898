//! HTTP repository integration tests.
//!
//! Tests for HttpRoomRepository against a fake room API.

mod fixtures;

use std::time::Duration;

use fixtures::{FakeBackend, room_json, sample_rooms};
use lakeside_client::{
    domain::{RepositoryError, RoomId, RoomRepository},
    infrastructure::repository::HttpRoomRepository,
};
use rust_decimal::Decimal;

fn repository(base_url: String, token: Option<&str>) -> HttpRoomRepository {
    HttpRoomRepository::new(base_url, token.map(str::to_string), Duration::from_secs(5))
        .expect("Failed to build repository")
}

#[tokio::test]
async fn test_list_rooms_decodes_backend_payload() {
    // テスト項目: 一覧エンドポイントの JSON がバックエンドの順序のままルームに変換される
    // given (前提条件):
    let backend = FakeBackend::start(vec![
        room_json(3, "Suite", 300.0),
        room_json(1, "Single", 80.5),
    ])
    .await;
    let repository = repository(backend.base_url(), None);

    // when (操作):
    let rooms = repository.list_rooms().await.expect("Failed to list rooms");

    // then (期待する結果):
    assert_eq!(rooms.len(), 2);
    assert_eq!(rooms[0].id.value(), 3);
    assert_eq!(rooms[0].room_type.as_str(), "Suite");
    assert_eq!(rooms[1].price.amount(), Decimal::new(805, 1));
}

#[tokio::test]
async fn test_list_rooms_skips_invalid_records() {
    // テスト項目: 不正なレコードが混ざっていても、正常なレコードはすべて読み込まれる
    // given (前提条件):
    let mut rooms = sample_rooms(9);
    rooms.insert(4, room_json(10, "   ", 120.0));
    rooms.push(room_json(11, "Penthouse", -1.0));
    rooms.push(room_json(12, &"Grand ".repeat(30), 900.0));
    let backend = FakeBackend::start(rooms).await;
    let repository = repository(backend.base_url(), None);

    // when (操作):
    let rooms = repository.list_rooms().await.expect("Failed to list rooms");

    // then (期待する結果):
    let ids: Vec<i64> = rooms.iter().map(|room| room.id.value()).collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 12]);
}

#[tokio::test]
async fn test_requests_carry_bearer_token() {
    // テスト項目: トークン設定時は Authorization ヘッダーが付与される
    // given (前提条件):
    let backend = FakeBackend::start(sample_rooms(1)).await;

    // when (操作):
    repository(backend.base_url(), Some("secret-token"))
        .list_rooms()
        .await
        .unwrap();
    repository(backend.base_url(), None)
        .list_rooms()
        .await
        .unwrap();

    // then (期待する結果):
    assert_eq!(
        backend.authorizations(),
        vec![Some("Bearer secret-token".to_string()), None]
    );
}

#[tokio::test]
async fn test_list_rooms_server_error_uses_body_as_message() {
    // テスト項目: 500 応答の本文がエラーメッセージになる
    // given (前提条件):
    let backend = FakeBackend::start(sample_rooms(3)).await;
    backend.fail_listing(true);
    let repository = repository(backend.base_url(), None);

    // when (操作):
    let result = repository.list_rooms().await;

    // then (期待する結果):
    assert_eq!(
        result,
        Err(RepositoryError::Status {
            status: 500,
            message: "Database unavailable".to_string()
        })
    );
}

#[tokio::test]
async fn test_delete_room_success() {
    // テスト項目: 削除成功（空の本文）で Ok が返り、バックエンドから削除される
    // given (前提条件):
    let backend = FakeBackend::start(sample_rooms(3)).await;
    let repository = repository(backend.base_url(), None);

    // when (操作):
    let result = repository.delete_room(RoomId::new(2).unwrap()).await;

    // then (期待する結果):
    assert_eq!(result, Ok(()));
    assert_eq!(backend.room_ids(), vec![1, 3]);
}

#[tokio::test]
async fn test_delete_room_with_error_payload_is_rejected() {
    // テスト項目: 成功ステータスでも本文にエラーがあれば Rejected になる
    // given (前提条件):
    let mut booked = room_json(4, "Suite", 250.0);
    booked["isBooked"] = serde_json::Value::Bool(true);
    let backend = FakeBackend::start(vec![booked]).await;
    let repository = repository(backend.base_url(), None);

    // when (操作):
    let result = repository.delete_room(RoomId::new(4).unwrap()).await;

    // then (期待する結果):
    assert_eq!(
        result,
        Err(RepositoryError::Rejected("Room 4 is booked".to_string()))
    );
    assert_eq!(backend.room_ids(), vec![4]);
}

#[tokio::test]
async fn test_delete_unknown_room_reports_status_and_message() {
    // テスト項目: 存在しないルームの削除は 404 とペイロードのメッセージを返す
    // given (前提条件):
    let backend = FakeBackend::start(sample_rooms(1)).await;
    let repository = repository(backend.base_url(), None);

    // when (操作):
    let result = repository.delete_room(RoomId::new(42).unwrap()).await;

    // then (期待する結果):
    assert_eq!(
        result,
        Err(RepositoryError::Status {
            status: 404,
            message: "Room 42 not found".to_string()
        })
    );
}

#[tokio::test]
async fn test_unreachable_backend_is_transport_error() {
    // テスト項目: 接続できない場合は Transport エラーになる
    // given (前提条件): 一度バインドして解放したポートを使う
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    let repository = repository(format!("http://{addr}"), None);

    // when (操作):
    let result = repository.list_rooms().await;

    // then (期待する結果):
    assert!(matches!(result, Err(RepositoryError::Transport(_))));
}
