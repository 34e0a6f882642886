//! Product HTTP Handlers
//!
//! 조회 계열은 공개, 변경 계열(`POST`, `PUT`, `DELETE`)은 Bearer 인증이 필요합니다.
use actix_web::{delete, get, post, put, web, HttpResponse};

use crate::core::context::AppContext;
use crate::core::errors::AppError;
use crate::domain::dto::products::{ProductListQuery, ProductRequest, ProductSearchQuery};
use crate::middlewares::AuthMiddleware;

/// 상품 목록
///
/// # Endpoint
/// `GET /api/products/list?page=1&limit=10&sort=price&order=desc`
#[get("/list")]
pub async fn list_products(
    ctx: web::Data<AppContext>,
    query: web::Query<ProductListQuery>,
) -> Result<HttpResponse, AppError> {
    let page = ctx.products.list(query.to_options()).await?;
    Ok(HttpResponse::Ok().json(page))
}

/// 상품 검색
///
/// # Endpoint
/// `GET /api/products/search?query=tee&page=1&limit=10`
#[get("/search")]
pub async fn search_products(
    ctx: web::Data<AppContext>,
    query: web::Query<ProductSearchQuery>,
) -> Result<HttpResponse, AppError> {
    let page = ctx
        .products
        .search(query.term(), query.page_request())
        .await?;
    Ok(HttpResponse::Ok().json(page))
}

/// # Endpoint
/// `GET /api/products/details/{id}`
#[get("/details/{id}")]
pub async fn product_details(
    ctx: web::Data<AppContext>,
    id: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let product = ctx.products.get(id.into_inner()).await?;
    Ok(HttpResponse::Ok().json(product))
}

/// # Endpoint
/// `POST /api/products`
#[post("", wrap = "AuthMiddleware")]
pub async fn create_product(
    ctx: web::Data<AppContext>,
    payload: web::Json<ProductRequest>,
) -> Result<HttpResponse, AppError> {
    let draft = payload.into_inner().into_draft()?;
    let product = ctx.products.create(draft).await?;
    Ok(HttpResponse::Created().json(product))
}

/// 필수 필드 검사는 존재 여부 확인보다 먼저 수행됩니다.
///
/// # Endpoint
/// `PUT /api/products/{id}`
#[put("/{id}", wrap = "AuthMiddleware")]
pub async fn update_product(
    ctx: web::Data<AppContext>,
    id: web::Path<i64>,
    payload: web::Json<ProductRequest>,
) -> Result<HttpResponse, AppError> {
    let draft = payload.into_inner().into_draft()?;
    let product = ctx.products.update(id.into_inner(), draft).await?;
    Ok(HttpResponse::Ok().json(product))
}

/// # Endpoint
/// `DELETE /api/products/{id}`
#[delete("/{id}", wrap = "AuthMiddleware")]
pub async fn delete_product(
    ctx: web::Data<AppContext>,
    id: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let response = ctx.products.delete(id.into_inner()).await?;
    Ok(HttpResponse::Ok().json(response))
}
