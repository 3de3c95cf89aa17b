mod common;

use std::sync::{Arc, Mutex};

use axum::{Json, Router, extract::{Multipart, State}, routing::put};
use serde_json::{Value, json};

use bus_booking_client::entities::profile::{Attachment, ProfileUpdate};
use bus_booking_client::{BookingClient, Config};

#[derive(Debug, Clone)]
struct ReceivedPart {
    name: String,
    content_type: Option<String>,
    file_name: Option<String>,
    bytes: Vec<u8>,
}

type Received = Arc<Mutex<Vec<ReceivedPart>>>;

async fn update_profile(State(received): State<Received>, mut multipart: Multipart) -> Json<Value> {
    while let Some(field) = multipart.next_field().await.unwrap() {
        let name = field.name().unwrap_or_default().to_string();
        let content_type = field.content_type().map(str::to_string);
        let file_name = field.file_name().map(str::to_string);
        let bytes = field.bytes().await.unwrap().to_vec();
        received.lock().unwrap().push(ReceivedPart {
            name,
            content_type,
            file_name,
            bytes,
        });
    }

    Json(json!({
        "success": true,
        "data": { "id": "op-1", "name": "Phuong Trang" },
        "message": "Profile updated"
    }))
}

async fn spawn_profile_backend() -> (BookingClient, Received) {
    let received: Received = Arc::new(Mutex::new(Vec::new()));
    let app = Router::new()
        .route("/api/admin/profiles", put(update_profile))
        .with_state(received.clone());
    let base_url = common::serve(app).await;
    let client = BookingClient::new(Config::new(base_url).with_token(common::TEST_TOKEN)).unwrap();
    (client, received)
}

fn update() -> ProfileUpdate {
    ProfileUpdate {
        name: Some("Phuong Trang".to_string()),
        phone: Some("1900 6067".to_string()),
        ..Default::default()
    }
}

#[tokio::test]
async fn test_update_me_with_file_sends_two_parts() {
    let (client, received) = spawn_profile_backend().await;
    let file = Attachment {
        file_name: "logo.png".to_string(),
        content_type: "image/png".to_string(),
        bytes: vec![0x89, b'P', b'N', b'G'],
    };

    let envelope = client.profile().update_me(&update(), Some(file)).await.unwrap();
    assert_eq!(envelope.message.as_deref(), Some("Profile updated"));
    assert_eq!(envelope.data.unwrap().name, "Phuong Trang");

    let parts = received.lock().unwrap().clone();
    assert_eq!(parts.len(), 2);

    assert_eq!(parts[0].name, "operator");
    assert_eq!(parts[0].content_type.as_deref(), Some("application/json"));
    let profile: Value = serde_json::from_slice(&parts[0].bytes).unwrap();
    assert_eq!(profile, json!({ "name": "Phuong Trang", "phone": "1900 6067" }));

    assert_eq!(parts[1].name, "file");
    assert_eq!(parts[1].file_name.as_deref(), Some("logo.png"));
    assert_eq!(parts[1].bytes, vec![0x89, b'P', b'N', b'G']);
}

#[tokio::test]
async fn test_update_me_without_file_sends_profile_only() {
    let (client, received) = spawn_profile_backend().await;

    client.profile().update_me(&update(), None).await.unwrap();

    let parts = received.lock().unwrap().clone();
    assert_eq!(parts.len(), 1);
    assert_eq!(parts[0].name, "operator");
}
