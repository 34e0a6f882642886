//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! `thiserror`와 `actix_web::ResponseError`를 사용하여 모든 계층의 에러를
//! 하나의 [`AppError`] 타입으로 통합하고, 핸들러에서 `?` 연산자만으로
//! 일관된 JSON 에러 응답이 만들어지도록 합니다.
//!
//! ## 상태 코드 매핑
//!
//! | 에러 | HTTP 상태 |
//! |------|-----------|
//! | `ValidationError`, `MissingFields` | 400 Bad Request |
//! | `AuthenticationError`, `TokenExpired` | 401 Unauthorized |
//! | `NotFound` | 404 Not Found |
//! | `DatabaseError`, `ExternalServiceError`, `InternalError` | 500 Internal Server Error |
//!
//! 500 계열 에러의 상세 내용은 로그에만 남기고 클라이언트에는 일반 메시지만 전달합니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::core::errors::{AppError, AppResult};
//!
//! async fn find_company(id: i64) -> AppResult<Company> {
//!     repo.find_by_id(id)
//!         .await?
//!         .ok_or_else(|| AppError::NotFound(format!("Company with id {} does not exist", id)))
//! }
//! ```

use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use serde_json::json;
use thiserror::Error;

/// 애플리케이션 전역 에러 타입
#[derive(Error, Debug)]
pub enum AppError {
    /// 데이터베이스 관련 에러 (500 Internal Server Error)
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 입력값 검증 에러 (400 Bad Request)
    #[error("{0}")]
    ValidationError(String),

    /// 필수 필드 누락 (400 Bad Request)
    #[error("Missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<String>),

    /// 리소스 찾을 수 없음 에러 (404 Not Found)
    #[error("{0}")]
    NotFound(String),

    /// 인증 실패 에러 (401 Unauthorized)
    #[error("{0}")]
    AuthenticationError(String),

    /// 만료된 토큰 (401 Unauthorized, `code: TOKEN_EXPIRED`)
    #[error("{0}")]
    TokenExpired(String),

    /// 외부 서비스 에러 (메일 서버 등, 500 Internal Server Error)
    #[error("External service error: {0}")]
    ExternalServiceError(String),

    /// 내부 서버 에러 (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 클라이언트에 노출하지 않아야 하는 서버 측 에러인지 확인
    pub fn is_server_error(&self) -> bool {
        matches!(
            self,
            AppError::DatabaseError(_) | AppError::ExternalServiceError(_) | AppError::InternalError(_)
        )
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) | AppError::MissingFields(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::AuthenticationError(_) | AppError::TokenExpired(_) => StatusCode::UNAUTHORIZED,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 서버 측 에러는 원인을 로그로 남기고 일반 메시지로 응답합니다.
    fn error_response(&self) -> HttpResponse {
        let body = match self {
            AppError::MissingFields(fields) => json!({
                "error": "Missing required fields",
                "fields": fields,
            }),
            AppError::TokenExpired(message) => json!({
                "error": message,
                "code": "TOKEN_EXPIRED",
            }),
            e if e.is_server_error() => {
                log::error!("요청 처리 중 서버 에러 발생: {}", e);
                json!({ "error": "Internal server error" })
            }
            e => json!({ "error": e.to_string() }),
        };

        HttpResponse::build(self.status_code()).json(body)
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        AppError::DatabaseError(e.to_string())
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(e: validator::ValidationErrors) -> Self {
        let mut messages: Vec<String> = e
            .field_errors()
            .into_iter()
            .flat_map(|(field, errors)| {
                errors.iter().map(move |error| {
                    error
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("Invalid {}", field))
                })
            })
            .collect();
        messages.sort();

        AppError::ValidationError(messages.join(", "))
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }
}
