//! # Application Context
//!
//! 서버 시작 시 한 번 조립되어 `web::Data<AppContext>`로 모든 워커에 공유되는 서비스 묶음입니다.
//!
//! ```text
//! AppConfig + Database ──▶ Pg*Repository ──▶ *Service ──▶ AppContext ──▶ web::Data
//!                          Mailer ─────────────┘
//! ```
//!
//! 테스트에서는 같은 서비스를 인메모리 리포지토리와 기록용 메일러로 조립합니다.

use std::sync::Arc;

use crate::config::AppConfig;
use crate::db::Database;
use crate::repositories::{PgCompanyRepository, PgProductRepository, PgUserRepository};
use crate::services::auth::{AuthService, TokenService};
use crate::services::companies::CompanyService;
use crate::services::mail::Mailer;
use crate::services::products::ProductService;

#[derive(Clone)]
pub struct AppContext {
    pub auth: Arc<AuthService>,
    pub tokens: Arc<TokenService>,
    pub products: Arc<ProductService>,
    pub companies: Arc<CompanyService>,
}

impl AppContext {
    /// PostgreSQL 리포지토리 기반 컨텍스트
    pub fn new(config: &AppConfig, database: &Database, mailer: Arc<dyn Mailer>) -> Self {
        let pool = database.pool().clone();
        let tokens = Arc::new(TokenService::new(config.jwt.clone()));

        let auth = AuthService::new(
            Arc::new(PgUserRepository::new(pool.clone())),
            tokens.clone(),
            mailer,
            config.mail.clone(),
            config.password_reset.clone(),
            config.bcrypt_cost,
        );

        Self {
            auth: Arc::new(auth),
            tokens,
            products: Arc::new(ProductService::new(Arc::new(PgProductRepository::new(
                pool.clone(),
            )))),
            companies: Arc::new(CompanyService::new(Arc::new(PgCompanyRepository::new(pool)))),
        }
    }
}
