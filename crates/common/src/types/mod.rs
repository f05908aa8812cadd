use serde::{Deserialize, Serialize};

/// Plain acknowledgement body, e.g. `{"message": "Conectado..."}`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub message: String,
}

impl Message {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}

/// Error body returned with every 400 response.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ErrorBody {
    pub message_error: String,
}

impl ErrorBody {
    pub fn new(message_error: impl Into<String>) -> Self {
        Self { message_error: message_error.into() }
    }
}
