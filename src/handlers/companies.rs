//! Company HTTP Handlers
//!
//! `/api/companies` 스코프 전체가 Bearer 인증 뒤에 있습니다.
use actix_web::{delete, get, post, put, web, HttpResponse};

use crate::core::context::AppContext;
use crate::core::errors::AppError;
use crate::domain::dto::companies::CompanyRequest;

#[get("")]
pub async fn list_companies(ctx: web::Data<AppContext>) -> Result<HttpResponse, AppError> {
    let companies = ctx.companies.list().await?;
    Ok(HttpResponse::Ok().json(companies))
}

#[get("/{id}")]
pub async fn get_company(
    ctx: web::Data<AppContext>,
    id: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let company = ctx.companies.get(id.into_inner()).await?;
    Ok(HttpResponse::Ok().json(company))
}

#[post("")]
pub async fn create_company(
    ctx: web::Data<AppContext>,
    payload: web::Json<CompanyRequest>,
) -> Result<HttpResponse, AppError> {
    let draft = payload.into_inner().into_draft()?;
    let company = ctx.companies.create(draft).await?;
    Ok(HttpResponse::Created().json(company))
}

#[put("/{id}")]
pub async fn update_company(
    ctx: web::Data<AppContext>,
    id: web::Path<i64>,
    payload: web::Json<CompanyRequest>,
) -> Result<HttpResponse, AppError> {
    let draft = payload.into_inner().into_draft()?;
    let company = ctx.companies.update(id.into_inner(), draft).await?;
    Ok(HttpResponse::Ok().json(company))
}

#[delete("/{id}")]
pub async fn delete_company(
    ctx: web::Data<AppContext>,
    id: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let response = ctx.companies.delete(id.into_inner()).await?;
    Ok(HttpResponse::Ok().json(response))
}
