//! # 인증 서비스 구현
//!
//! 가입부터 로그아웃까지 사용자 인증의 전체 흐름을 조율합니다.
//!
//! ## 사용자 상태 전이
//!
//! ```text
//! register ──▶ [unverified] ──verify_email──▶ [verified] ──login──▶ 토큰 발급
//!                   │                                          │
//!                   └── login 시도: 401 "Please verify ..."     │
//!                                                              ▼
//!           refresh: 저장된 해시와 일치할 때만 교체 (이전 토큰은 즉시 무효)
//!           logout / reset_password: 저장된 리프레시 토큰 해시 제거
//! ```
//!
//! ## 보안 설계
//!
//! - **bcrypt 해싱**: cost는 `BCRYPT_COST` 설정값 사용, 블로킹 스레드풀에서 수행
//! - **토큰 해시 저장**: 리프레시/재설정 토큰은 SHA-256 다이제스트만 저장
//! - **열거 방지**: 비밀번호 찾기는 가입 여부와 무관하게 같은 응답
//! - **최선 노력 메일**: 메일 실패는 로그만 남기고 가입/재설정 요청은 성공 처리

use std::sync::Arc;

use actix_web::web;
use chrono::{Duration, Utc};
use log::{error, info, warn};

use crate::config::{MailConfig, PasswordResetConfig};
use crate::core::errors::{AppError, AppResult, ErrorContext};
use crate::domain::dto::common::MessageResponse;
use crate::domain::dto::users::{LoginResponse, RegisterInput, RegisterResponse, UserResponse};
use crate::domain::entities::users::NewUser;
use crate::domain::models::auth::AuthenticatedUser;
use crate::domain::models::token::TokenPair;
use crate::repositories::{UserRepository, DUPLICATE_EMAIL};
use crate::services::auth::token_service::TokenService;
use crate::services::mail::{password_reset_mail, verification_mail, Mailer, OutgoingMail};
use crate::utils::token_utils::{generate_random_token, hash_token};

pub struct AuthService {
    users: Arc<dyn UserRepository>,
    tokens: Arc<TokenService>,
    mailer: Arc<dyn Mailer>,
    mail_config: MailConfig,
    password_reset: PasswordResetConfig,
    bcrypt_cost: u32,
}

impl AuthService {
    pub fn new(
        users: Arc<dyn UserRepository>,
        tokens: Arc<TokenService>,
        mailer: Arc<dyn Mailer>,
        mail_config: MailConfig,
        password_reset: PasswordResetConfig,
        bcrypt_cost: u32,
    ) -> Self {
        Self {
            users,
            tokens,
            mailer,
            mail_config,
            password_reset,
            bcrypt_cost,
        }
    }

    /// 회원 가입
    ///
    /// 인증 메일 발송은 최선 노력이며, 실패해도 가입은 성공합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ValidationError` - 이미 등록된 이메일
    pub async fn register(&self, input: RegisterInput) -> AppResult<RegisterResponse> {
        // 해싱 전에 중복 확인, 동시 가입은 리포지토리의 트랜잭션이 막음
        if self.users.find_by_email(&input.email).await?.is_some() {
            return Err(AppError::ValidationError(DUPLICATE_EMAIL.to_string()));
        }

        let password_hash = self.hash_password(input.password).await?;
        let verification_token = generate_random_token();

        let user = self
            .users
            .create(NewUser {
                email: input.email,
                password_hash,
                first_name: input.first_name,
                last_name: input.last_name,
                verification_token: verification_token.clone(),
            })
            .await?;

        info!("✅ 신규 사용자 가입: id={} email={}", user.id, user.email);

        let link = self.mail_config.verification_link(&verification_token);
        self.send_best_effort(verification_mail(&user.email, &user.full_name(), &link))
            .await;

        Ok(RegisterResponse {
            message: "Registration successful. Please check your email for verification."
                .to_string(),
            user_id: user.id,
        })
    }

    /// 로그인
    ///
    /// # Errors
    ///
    /// * `AppError::AuthenticationError` - 계정 없음/비밀번호 불일치 (`Invalid credentials`),
    ///   미인증 계정 (`Please verify your email first`)
    pub async fn login(&self, email: &str, password: &str) -> AppResult<LoginResponse> {
        let invalid = || AppError::AuthenticationError("Invalid credentials".to_string());

        let Some(user) = self.users.find_by_email(email).await? else {
            warn!("로그인 실패: 존재하지 않는 이메일 {}", email);
            return Err(invalid());
        };

        if !self.verify_password(password, &user.password_hash).await? {
            warn!("로그인 실패: 비밀번호 불일치 id={}", user.id);
            return Err(invalid());
        }

        if !user.is_verified {
            return Err(AppError::AuthenticationError(
                "Please verify your email first".to_string(),
            ));
        }

        let tokens = self.tokens.generate_token_pair(&user)?;
        self.users
            .record_login(user.id, &hash_token(&tokens.refresh_token))
            .await?;

        info!("🔐 로그인 성공: id={}", user.id);

        Ok(LoginResponse {
            tokens,
            user: UserResponse::from(user),
        })
    }

    /// 이메일 인증 토큰 소비
    pub async fn verify_email(&self, token: &str) -> AppResult<MessageResponse> {
        if token.trim().is_empty() || !self.users.verify_email(token.trim()).await? {
            return Err(AppError::ValidationError(
                "Invalid verification token".to_string(),
            ));
        }

        Ok(MessageResponse::new("Email verified successfully"))
    }

    /// 리프레시 토큰으로 새 토큰 쌍을 발급하고 저장된 토큰을 교체합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ValidationError` - 토큰 누락
    /// * `AppError::TokenExpired` - 만료된 리프레시 토큰
    /// * `AppError::AuthenticationError` - 서명 불일치, 이미 교체되었거나 로그아웃된 토큰
    pub async fn refresh(&self, refresh_token: Option<String>) -> AppResult<TokenPair> {
        let refresh_token = refresh_token
            .ok_or_else(|| AppError::ValidationError("Refresh token required".to_string()))?;
        let invalid = || AppError::AuthenticationError("Invalid refresh token".to_string());

        let claims = self.tokens.verify_refresh_token(&refresh_token)?;
        let user_id = claims.user_id().ok_or_else(invalid)?;

        let user = self.users.find_by_id(user_id).await?.ok_or_else(invalid)?;

        let current_hash = hash_token(&refresh_token);
        if !user.holds_refresh_token(&current_hash) {
            warn!("⚠️ 교체되었거나 폐기된 리프레시 토큰 사용 시도: id={}", user_id);
            return Err(invalid());
        }

        let pair = self.tokens.generate_token_pair(&user)?;
        let rotated = self
            .users
            .rotate_refresh_token(user_id, &current_hash, &hash_token(&pair.refresh_token))
            .await?;

        if !rotated {
            // 동시에 같은 토큰으로 갱신한 다른 요청이 먼저 교체함
            warn!("⚠️ 리프레시 토큰 동시 사용 감지: id={}", user_id);
            return Err(invalid());
        }

        Ok(pair)
    }

    /// 저장된 리프레시 토큰 제거
    pub async fn logout(&self, user_id: i64) -> AppResult<MessageResponse> {
        self.users.clear_refresh_token(user_id).await?;
        info!("👋 로그아웃: id={}", user_id);
        Ok(MessageResponse::new("Logged out successfully"))
    }

    /// 비밀번호 재설정 메일 요청
    ///
    /// 가입 여부와 관계없이 항상 같은 메시지를 반환합니다.
    pub async fn forgot_password(&self, email: &str) -> AppResult<MessageResponse> {
        if let Some(user) = self.users.find_by_email(email).await? {
            let token = generate_random_token();
            let expires_at = Utc::now() + Duration::minutes(self.password_reset.expiration_minutes);

            self.users
                .set_reset_token(user.id, &hash_token(&token), expires_at)
                .await?;

            let link = self.mail_config.reset_link(&token);
            self.send_best_effort(password_reset_mail(
                &user.email,
                &link,
                self.password_reset.expiration_minutes,
            ))
            .await;
        } else {
            info!("비밀번호 재설정 요청: 등록되지 않은 이메일");
        }

        Ok(MessageResponse::new(
            "Password reset instructions sent to email",
        ))
    }

    /// 재설정 토큰으로 비밀번호 변경
    ///
    /// 성공 시 재설정 토큰과 리프레시 토큰이 모두 무효화됩니다.
    /// 토큰이 유효한지 먼저 확인한 뒤에만 새 비밀번호를 해싱합니다.
    pub async fn reset_password(
        &self,
        token: &str,
        new_password: String,
    ) -> AppResult<MessageResponse> {
        let invalid = || AppError::ValidationError("Invalid or expired reset token".to_string());
        let token_hash = hash_token(token);

        let holder = self.users.find_by_reset_token(&token_hash).await?;
        if !holder.is_some_and(|user| user.reset_token_valid_at(&token_hash, Utc::now())) {
            return Err(invalid());
        }

        let password_hash = self.hash_password(new_password).await?;

        // 확인 이후 다른 요청이 토큰을 먼저 소비했으면 갱신되는 행이 없음
        if !self
            .users
            .reset_password(&token_hash, &password_hash, Utc::now())
            .await?
        {
            return Err(invalid());
        }

        Ok(MessageResponse::new("Password reset successful"))
    }

    /// 현재 사용자 정보
    pub async fn me(&self, user_id: i64) -> AppResult<UserResponse> {
        self.users
            .find_by_id(user_id)
            .await?
            .map(UserResponse::from)
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }

    /// Bearer 액세스 토큰을 검증하고 사용자가 아직 존재하는지 확인합니다.
    pub async fn authenticate(&self, token: &str) -> AppResult<AuthenticatedUser> {
        let claims = self.tokens.verify_access_token(token)?;
        let invalid = || AppError::AuthenticationError("Invalid token".to_string());
        let user_id = claims.user_id().ok_or_else(invalid)?;

        if self.users.find_by_id(user_id).await?.is_none() {
            warn!("삭제된 사용자의 토큰 사용: id={}", user_id);
            return Err(invalid());
        }

        Ok(AuthenticatedUser {
            user_id,
            email: claims.email,
        })
    }

    async fn hash_password(&self, password: String) -> AppResult<String> {
        let cost = self.bcrypt_cost;
        web::block(move || bcrypt::hash(password, cost))
            .await
            .context("비밀번호 해싱 작업 실패")?
            .context("비밀번호 해싱 실패")
    }

    async fn verify_password(&self, password: &str, password_hash: &str) -> AppResult<bool> {
        let password = password.to_string();
        let password_hash = password_hash.to_string();
        web::block(move || bcrypt::verify(password, &password_hash))
            .await
            .context("비밀번호 검증 작업 실패")?
            .context("비밀번호 검증 실패")
    }

    async fn send_best_effort(&self, mail: OutgoingMail) {
        let to = mail.to.clone();
        if let Err(e) = self.mailer.send(mail).await {
            error!("메일 발송 실패 (요청은 계속 진행): to={} error={}", to, e);
        }
    }
}
