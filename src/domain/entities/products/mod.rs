//! Products Entity Module
//!
//! 카탈로그 상품 엔티티와, 생성/수정 시 사용하는 검증된 입력 값([`ProductDraft`]),
//! 목록 조회 옵션([`ProductListOptions`])을 정의합니다.
//!
//! 배열형 필드(이미지, 색상, 사이즈, 태그, 성별)와 라벨은 도메인에서는 타입이 있는
//! 값으로 다루고, JSONB 변환은 리포지토리의 행(row) 타입에서만 수행합니다.

pub mod product;

pub use product::{
    Product, ProductDraft, ProductImage, ProductLabel, ProductListOptions, ProductSortField,
};
