//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//! 핸들러는 DTO로 요청을 받아 검증하고, `web::Data<AppContext>`의 서비스를 호출한 뒤
//! 결과를 JSON으로 돌려주는 일만 합니다.
//!
//! ## 아키텍처 위치
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   Client (Browser, Admin UI, API Client)
//! └─────────────────────┬───────────────────────┘
//!                       │ HTTP Request/Response
//! ┌─────────────────────▼───────────────────────┐
//!   Handlers (이 모듈) - HTTP 엔드포인트 처리         ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   Services - 비즈니스 로직                        ← Service Layer
//! ├─────────────────────────────────────────────┤
//!   Repositories - 데이터 접근 (PostgreSQL)         ← Repository Layer
//! ├─────────────────────────────────────────────┤
//!   Entities/Models - 도메인 모델                  ← Domain Layer
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## 핸들러 작성 패턴
//!
//! ```rust,ignore
//! #[post("")]
//! pub async fn create_company(
//!     ctx: web::Data<AppContext>,
//!     payload: web::Json<CompanyRequest>,
//! ) -> Result<HttpResponse, AppError> {
//!     let draft = payload.into_inner().into_draft()?; // 400: 누락/검증 실패
//!     let company = ctx.companies.create(draft).await?;
//!     Ok(HttpResponse::Created().json(company))
//! }
//! ```
//!
//! 에러는 모두 [`AppError`](crate::core::errors::AppError)로 통합되어
//! `?` 연산자만으로 상태 코드와 JSON 본문이 결정됩니다.
//!
//! ## 모듈 구성
//!
//! - **`auth`**: 가입, 로그인, 이메일 인증, 토큰 갱신, 비밀번호 재설정, 로그아웃, 내 정보
//! - **`products`**: 상품 목록/검색/상세 (공개), 생성/수정/삭제 (인증)
//! - **`companies`**: 회사 CRUD (인증)

pub mod auth;
pub mod products;
pub mod companies;
