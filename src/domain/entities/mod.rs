//! # Domain Entities
//!
//! 데이터베이스 테이블 한 행에 대응하는 핵심 엔티티들입니다.
//!
//! | 엔티티 | 테이블 | 비고 |
//! |--------|--------|------|
//! | [`users::User`] | `users` | 자격 증명, 인증/재설정/리프레시 토큰 상태 |
//! | [`products::Product`] | `products` | `code`, `sku` 유일 |
//! | [`companies::Company`] | `companies` | 이름, 업종 |

pub mod users;
pub mod products;
pub mod companies;
