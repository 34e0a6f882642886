//! API 라우트 설정 모듈
//!
//! RESTful API 엔드포인트들을 기능별로 그룹화하여 등록합니다.
//!
//! # Route Groups
//!
//! | 스코프 | 인증 |
//! |--------|------|
//! | `/health` | - |
//! | `/api/auth` | `logout`, `me`만 Bearer |
//! | `/api/products` | 조회는 공개, 변경은 Bearer |
//! | `/api/companies` | 스코프 전체 Bearer |
//!
//! 등록되지 않은 경로는 404 `{"error":"Route not found"}`, 잘못된 JSON 본문은 400으로 응답합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::{web, App};
//!
//! let app = App::new()
//!     .app_data(web::Data::new(context.clone()))
//!     .configure(configure_all_routes);
//! ```

use actix_web::{error, get, web, HttpRequest, HttpResponse};
use serde_json::json;

use crate::core::errors::AppError;
use crate::handlers;
use crate::middlewares::AuthMiddleware;

/// 모든 라우트와 추출자 설정을 등록합니다.
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .app_data(path_config())
        .service(health_check);

    configure_auth_routes(cfg);
    configure_product_routes(cfg);
    configure_company_routes(cfg);

    cfg.default_service(web::to(route_not_found));
}

/// 인증 라우트
///
/// ```bash
/// curl -X POST http://localhost:3000/api/auth/login \
///   -H "Content-Type: application/json" \
///   -d '{"email":"user@example.com","password":"pw123"}'
/// ```
fn configure_auth_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/auth")
            .service(handlers::auth::register)
            .service(handlers::auth::login)
            .service(handlers::auth::verify_email)
            .service(handlers::auth::forgot_password)
            .service(handlers::auth::reset_password)
            .service(handlers::auth::refresh_token)
            // Bearer 필요
            .service(handlers::auth::logout)
            .service(handlers::auth::me),
    );
}

fn configure_product_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/products")
            .service(handlers::products::list_products)
            .service(handlers::products::search_products)
            .service(handlers::products::product_details)
            // Bearer 필요
            .service(handlers::products::create_product)
            .service(handlers::products::update_product)
            .service(handlers::products::delete_product),
    );
}

fn configure_company_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/companies")
            .wrap(AuthMiddleware)
            .service(handlers::companies::list_companies)
            .service(handlers::companies::get_company)
            .service(handlers::companies::create_company)
            .service(handlers::companies::update_company)
            .service(handlers::companies::delete_company),
    );
}

/// JSON 본문 파싱 실패를 400 JSON 응답으로 변환
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, req: &HttpRequest| {
        log::warn!("잘못된 JSON 요청: {} {} - {}", req.method(), req.path(), err);
        error::Error::from(AppError::ValidationError(format!("Invalid JSON body: {}", err)))
    })
}

/// 숫자가 아닌 id 경로 파라미터
fn path_config() -> web::PathConfig {
    web::PathConfig::default()
        .error_handler(|_, _| error::Error::from(AppError::ValidationError("Invalid id".to_string())))
}

async fn route_not_found() -> HttpResponse {
    HttpResponse::NotFound().json(json!({ "error": "Route not found" }))
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// ```json
/// {
///   "status": "ok",
///   "service": "biz360_backend",
///   "version": "0.1.0",
///   "timestamp": "2024-01-01T00:00:00+00:00"
/// }
/// ```
#[get("/health")]
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "ok",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

#[cfg(test)]
mod tests {
    use actix_web::http::StatusCode;
    use actix_web::{test, App};
    use serde_json::Value;

    use super::*;
    use crate::core::context::testing::test_context;

    #[actix_web::test]
    async fn test_health_and_unknown_route() {
        let ctx = test_context();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(ctx.context.clone()))
                .configure(configure_all_routes),
        )
        .await;

        let resp = test::call_service(&app, test::TestRequest::get().uri("/health").to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], "ok");

        let resp = test::call_service(&app, test::TestRequest::get().uri("/nope").to_request()).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Route not found");

        let resp = test::call_service(
            &app,
            test::TestRequest::get().uri("/api/products/details/abc").to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
