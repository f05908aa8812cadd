use axum::Json;
use common::types::Message;

/// GET /heart - liveness probe
pub async fn heart() -> Json<Message> {
    Json(Message::new("Conectado..."))
}
