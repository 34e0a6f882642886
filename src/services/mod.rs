//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 서비스는 리포지토리 트레이트 객체(`Arc<dyn ...Repository>`)를 주입받아 생성되며,
//! [`crate::core::context::AppContext`]에 묶여 `web::Data`로 핸들러에 전달됩니다.
//!
//! # Features
//!
//! - 회원 가입, 이메일 인증, 로그인, 토큰 갱신, 비밀번호 재설정
//! - JWT 액세스/리프레시 토큰 발급과 검증
//! - 인증/재설정 메일 발송 (SMTP 또는 로그)
//! - 상품과 회사 리소스 관리
//!
//! # Examples
//!
//! ```rust,ignore
//! let products = ProductService::new(Arc::new(PgProductRepository::new(pool.clone())));
//! let page = products.list(query.to_options()).await?;
//! ```

pub mod auth;
pub mod mail;
pub mod products;
pub mod companies;
