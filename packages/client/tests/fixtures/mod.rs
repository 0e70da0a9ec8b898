//! Test fixtures: an in-process fake of the hotel room API.

#![allow(dead_code)]

use std::{
    net::SocketAddr,
    sync::{
        Arc, Mutex,
        atomic::{AtomicBool, Ordering},
    },
};

use axum::{
    Json, Router,
    extract::{Path, State},
    http::{HeaderMap, StatusCode, header::AUTHORIZATION},
    response::{IntoResponse, Response},
    routing::{delete, get},
};
use serde_json::{Value, json};
use tokio::{net::TcpListener, task::JoinHandle};

#[derive(Default)]
struct BackendState {
    rooms: Mutex<Vec<Value>>,
    authorizations: Mutex<Vec<Option<String>>>,
    fail_listing: AtomicBool,
}

/// Fake backend serving `/room/all-rooms` and `/room/delete/room/{id}`
pub struct FakeBackend {
    addr: SocketAddr,
    state: Arc<BackendState>,
    handle: JoinHandle<()>,
}

impl FakeBackend {
    /// Start the backend on an ephemeral port with the given rooms
    pub async fn start(rooms: Vec<Value>) -> Self {
        let state = Arc::new(BackendState {
            rooms: Mutex::new(rooms),
            ..Default::default()
        });
        let app = Router::new()
            .route("/room/all-rooms", get(list_rooms))
            .route("/room/delete/room/{id}", delete(delete_room))
            .with_state(Arc::clone(&state));

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind fake backend");
        let addr = listener.local_addr().expect("Failed to read local address");
        let handle = tokio::spawn(async move {
            axum::serve(listener, app)
                .await
                .expect("Fake backend stopped unexpectedly");
        });

        Self {
            addr,
            state,
            handle,
        }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Make the list endpoint answer 500
    pub fn fail_listing(&self, fail: bool) {
        self.state.fail_listing.store(fail, Ordering::SeqCst);
    }

    /// Authorization headers received so far, in order
    pub fn authorizations(&self) -> Vec<Option<String>> {
        self.state.authorizations.lock().unwrap().clone()
    }

    pub fn room_ids(&self) -> Vec<i64> {
        self.state
            .rooms
            .lock()
            .unwrap()
            .iter()
            .filter_map(|room| room["id"].as_i64())
            .collect()
    }
}

impl Drop for FakeBackend {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// A room in the backend's JSON shape
pub fn room_json(id: i64, room_type: &str, price: f64) -> Value {
    json!({
        "id": id,
        "roomType": room_type,
        "price": price,
        "isBooked": false,
        "photo": null,
    })
}

/// `count` rooms alternating between two types
pub fn sample_rooms(count: i64) -> Vec<Value> {
    (1..=count)
        .map(|id| {
            let room_type = if id % 2 == 0 { "Deluxe Suite" } else { "Single" };
            room_json(id, room_type, 100.0 + id as f64)
        })
        .collect()
}

async fn list_rooms(State(state): State<Arc<BackendState>>, headers: HeaderMap) -> Response {
    let authorization = headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    state.authorizations.lock().unwrap().push(authorization);

    if state.fail_listing.load(Ordering::SeqCst) {
        return (StatusCode::INTERNAL_SERVER_ERROR, "Database unavailable").into_response();
    }
    let rooms = state.rooms.lock().unwrap().clone();
    Json(rooms).into_response()
}

async fn delete_room(State(state): State<Arc<BackendState>>, Path(id): Path<i64>) -> Response {
    let mut rooms = state.rooms.lock().unwrap();
    let Some(index) = rooms.iter().position(|room| room["id"].as_i64() == Some(id)) else {
        return (
            StatusCode::NOT_FOUND,
            Json(json!({ "message": format!("Room {id} not found") })),
        )
            .into_response();
    };

    if rooms[index]["isBooked"].as_bool() == Some(true) {
        // Success status with an error payload
        return Json(json!({ "message": format!("Room {id} is booked") })).into_response();
    }

    rooms.remove(index);
    StatusCode::NO_CONTENT.into_response()
}
