//! # Core Module
//!
//! 애플리케이션 전역에서 쓰이는 기반 타입을 모아 둔 모듈입니다.
//!
//! ## 모듈 구성
//!
//! ### [`errors`] - 통합 에러 처리
//! - **AppError**: 애플리케이션 전역 에러 타입
//! - **HTTP 통합**: Actix-Web `ResponseError` 구현으로 상태 코드와 JSON 본문 결정
//! - **자동 변환**: `sqlx::Error`, `validator::ValidationErrors`에서 `?`로 변환
//!
//! ### [`context`] - 서비스 조립
//! - **AppContext**: 리포지토리와 서비스를 한 번 조립해 `web::Data`로 공유
//!
//! ## 사용 패턴
//!
//! ```rust,ignore
//! let database = Database::connect(&config.database).await?;
//! let context = AppContext::new(&config, &database, build_mailer(&config.mail)?);
//!
//! HttpServer::new(move || {
//!     App::new()
//!         .app_data(web::Data::new(context.clone()))
//!         .configure(configure_all_routes)
//! })
//! ```
//!
//! 핸들러는 `web::Data<AppContext>`로 서비스를 꺼내고, 에러는 `?`로 그대로 돌려줍니다.
//!
//! ```rust,ignore
//! #[get("/details/{id}")]
//! async fn details(ctx: web::Data<AppContext>, path: web::Path<i64>) -> Result<HttpResponse, AppError> {
//!     let product = ctx.products.get(path.into_inner()).await?;
//!     Ok(HttpResponse::Ok().json(product))
//! }
//! ```

pub mod errors;
pub mod context;

pub use errors::*;
pub use context::AppContext;
