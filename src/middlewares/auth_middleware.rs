//! JWT 인증 미들웨어
//!
//! ActixWeb 요청 파이프라인에서 액세스 토큰을 검증하고 사용자 정보를 요청 확장 영역에 넣습니다.
//!
//! | 상황 | 응답 |
//! |------|------|
//! | 헤더 없음 / Bearer 아님 | 401 `{"error":"Authentication required"}` |
//! | 서명 불일치, 형식 오류, 삭제된 사용자 | 401 `{"error":"Invalid token"}` |
//! | 만료 | 401 `{"error":"Token expired","code":"TOKEN_EXPIRED"}` |

use std::future::{ready, Ready};
use std::rc::Rc;

use actix_web::{
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    Error, Result,
};

use crate::middlewares::auth_inner::AuthMiddlewareService;

/// 필수 인증 미들웨어
pub struct AuthMiddleware;

/// ActixWeb Transform trait 구현
impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = AuthMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthMiddlewareService {
            service: Rc::new(service),
        }))
    }
}
