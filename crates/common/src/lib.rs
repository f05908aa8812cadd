pub mod types;
pub mod utils;

#[cfg(test)]
mod tests {
    use crate::types::{ErrorBody, Message};

    #[test]
    fn message_serializes_under_message_key() {
        let m = Message::new("Conectado...");
        let v = serde_json::to_value(&m).unwrap();
        assert_eq!(v, serde_json::json!({"message": "Conectado..."}));
    }

    #[test]
    fn error_body_uses_message_error_key() {
        let e = ErrorBody::new("Não foi possível obter o id.");
        let v = serde_json::to_value(&e).unwrap();
        assert_eq!(v["message_error"], "Não foi possível obter o id.");
        assert!(v.get("message").is_none());
    }
}
