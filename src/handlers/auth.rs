//! Authentication HTTP Handlers
//!
//! 이메일/비밀번호 기반 인증 흐름의 HTTP 엔드포인트입니다.
//!
//! # Endpoints
//!
//! | 메서드 | 경로 | 인증 |
//! |--------|------|------|
//! | POST | `/api/auth/register` | - |
//! | POST | `/api/auth/login` | - |
//! | GET | `/api/auth/verify-email/{token}` | - |
//! | POST | `/api/auth/forgot-password` | - |
//! | POST | `/api/auth/reset-password` | - |
//! | POST | `/api/auth/refresh-token` | - |
//! | POST | `/api/auth/logout` | Bearer |
//! | GET | `/api/auth/me` | Bearer |
use actix_web::{get, post, web, HttpResponse};

use crate::core::context::AppContext;
use crate::core::errors::AppError;
use crate::domain::dto::tokens::RefreshTokenRequest;
use crate::domain::dto::users::{
    ForgotPasswordRequest, LoginRequest, RegisterRequest, ResetPasswordRequest,
};
use crate::domain::models::auth::AuthenticatedUser;
use crate::middlewares::AuthMiddleware;

/// 회원 가입 핸들러
///
/// # Endpoint
/// `POST /api/auth/register`
///
/// 성공 시 `201 {"message": ..., "userId": ...}`
#[post("/register")]
pub async fn register(
    ctx: web::Data<AppContext>,
    payload: web::Json<RegisterRequest>,
) -> Result<HttpResponse, AppError> {
    let input = payload.into_inner().into_input()?;

    log::info!("회원 가입 요청: {}", input.email);

    let response = ctx.auth.register(input).await?;
    Ok(HttpResponse::Created().json(response))
}

/// 로그인 핸들러
///
/// # Endpoint
/// `POST /api/auth/login`
#[post("/login")]
pub async fn login(
    ctx: web::Data<AppContext>,
    payload: web::Json<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    let (email, password) = payload.into_inner().into_credentials()?;

    let response = ctx.auth.login(&email, &password).await?;
    Ok(HttpResponse::Ok().json(response))
}

/// 이메일 인증 링크 처리
///
/// # Endpoint
/// `GET /api/auth/verify-email/{token}`
#[get("/verify-email/{token}")]
pub async fn verify_email(
    ctx: web::Data<AppContext>,
    token: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let response = ctx.auth.verify_email(&token).await?;
    Ok(HttpResponse::Ok().json(response))
}

/// # Endpoint
/// `POST /api/auth/forgot-password`
#[post("/forgot-password")]
pub async fn forgot_password(
    ctx: web::Data<AppContext>,
    payload: web::Json<ForgotPasswordRequest>,
) -> Result<HttpResponse, AppError> {
    let email = payload.into_inner().into_email()?;

    let response = ctx.auth.forgot_password(&email).await?;
    Ok(HttpResponse::Ok().json(response))
}

/// # Endpoint
/// `POST /api/auth/reset-password`
#[post("/reset-password")]
pub async fn reset_password(
    ctx: web::Data<AppContext>,
    payload: web::Json<ResetPasswordRequest>,
) -> Result<HttpResponse, AppError> {
    let (token, new_password) = payload.into_inner().into_parts()?;

    let response = ctx.auth.reset_password(&token, new_password).await?;
    Ok(HttpResponse::Ok().json(response))
}

/// 토큰 갱신 핸들러
///
/// 사용한 리프레시 토큰은 즉시 폐기되고 새 토큰 쌍이 발급됩니다.
///
/// # Endpoint
/// `POST /api/auth/refresh-token`
#[post("/refresh-token")]
pub async fn refresh_token(
    ctx: web::Data<AppContext>,
    payload: web::Json<RefreshTokenRequest>,
) -> Result<HttpResponse, AppError> {
    let tokens = ctx.auth.refresh(payload.into_inner().refresh_token).await?;
    Ok(HttpResponse::Ok().json(tokens))
}

/// # Endpoint
/// `POST /api/auth/logout`
#[post("/logout", wrap = "AuthMiddleware")]
pub async fn logout(
    ctx: web::Data<AppContext>,
    user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let response = ctx.auth.logout(user.user_id).await?;
    Ok(HttpResponse::Ok().json(response))
}

/// 현재 로그인한 사용자 정보
///
/// # Endpoint
/// `GET /api/auth/me`
#[get("/me", wrap = "AuthMiddleware")]
pub async fn me(
    ctx: web::Data<AppContext>,
    user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let response = ctx.auth.me(user.user_id).await?;
    Ok(HttpResponse::Ok().json(response))
}
