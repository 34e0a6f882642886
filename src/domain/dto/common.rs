use serde::Serialize;

/// 단순 메시지 응답
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}

/// 삭제 완료 응답
#[derive(Debug, Clone, Serialize)]
pub struct DeletedResponse {
    pub message: String,
    pub id: i64,
}
