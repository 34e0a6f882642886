//! # Repository Layer
//!
//! PostgreSQL 접근을 담당하는 데이터 액세스 계층입니다.
//! 각 리소스는 `async_trait` 기반 트레이트와 `sqlx` 구현체로 나뉘며,
//! 서비스는 `Arc<dyn ...Repository>`에만 의존합니다.
//!
//! ```text
//! services ──▶ dyn UserRepository    ──▶ PgUserRepository    ──▶ users
//!          ──▶ dyn ProductRepository ──▶ PgProductRepository ──▶ products
//!          ──▶ dyn CompanyRepository ──▶ PgCompanyRepository ──▶ companies
//! ```
//!
//! 모든 쿼리는 파라미터 바인딩을 사용합니다. 동적 SQL은 정렬 컬럼과 방향뿐이며,
//! 둘 다 허용 목록 enum에서만 만들어집니다.

pub mod users;
pub mod products;
pub mod companies;

#[cfg(test)]
pub mod memory;

use crate::core::errors::AppError;

pub use companies::company_repo::{CompanyRepository, PgCompanyRepository};
pub use products::product_repo::{PgProductRepository, ProductRepository};
pub use users::user_repo::{PgUserRepository, UserRepository};

/// 이메일 중복 메시지
pub const DUPLICATE_EMAIL: &str = "Email already registered";
/// 상품 code/sku 중복 메시지
pub const DUPLICATE_PRODUCT: &str = "Product with this code or SKU already exists";

/// unique 인덱스 위반을 도메인 중복 에러(400)로, 그 외는 DB 에러로 변환합니다.
///
/// 애플리케이션 레벨 중복 확인과 실제 INSERT 사이의 경쟁 상태는 이 변환으로 닫힙니다.
pub(crate) fn map_unique_violation(message: &'static str) -> impl Fn(sqlx::Error) -> AppError {
    move |e| {
        if let sqlx::Error::Database(ref db_err) = e
            && db_err.is_unique_violation()
        {
            return AppError::ValidationError(message.to_string());
        }
        AppError::from(e)
    }
}
