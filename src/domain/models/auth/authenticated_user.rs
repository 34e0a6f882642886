use std::future::{ready, Ready};

use actix_web::{FromRequest, HttpMessage, HttpRequest};
use serde::Serialize;

use crate::core::errors::AppError;

/// 액세스 토큰 검증을 통과한 요청의 사용자 정보
///
/// 인증 미들웨어가 요청 확장 영역에 넣어두고, 핸들러는 추출자로 꺼내 씁니다.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuthenticatedUser {
    /// 사용자 고유 ID
    pub user_id: i64,
    /// 토큰에 담긴 이메일
    pub email: Option<String>,
}

/// ActixWeb FromRequest trait 구현
impl FromRequest for AuthenticatedUser {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        match req.extensions().get::<AuthenticatedUser>() {
            Some(user) => ready(Ok(user.clone())),
            None => ready(Err(AppError::AuthenticationError(
                "Authentication required".to_string(),
            ))),
        }
    }
}
