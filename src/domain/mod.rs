//! # Domain Layer Module
//!
//! 비즈니스 객체와 API 계약을 정의하는 도메인 계층입니다.
//!
//! ## 아키텍처 개요
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── Entities  - 저장소에 영속되는 핵심 객체 (User, Product, Company)
//! ├── DTOs      - HTTP 요청/응답 계약
//! └── Models    - 인증 주체, 토큰 클레임, 페이지네이션 등 계층 간 공유 모델
//!      │
//!      ▼
//! Application Layer (services)
//!      │
//!      ▼
//! Infrastructure Layer (repositories, PostgreSQL)
//! ```
//!
//! ## 설계 원칙
//!
//! - 엔티티는 HTTP 계약을 모릅니다. 클라이언트에 노출되는 모양은 DTO가 결정합니다.
//! - 비밀번호 해시와 토큰 해시를 가진 [`entities::User`]는 직렬화되지 않습니다.
//! - 저장 형식(JSONB 등)은 리포지토리 경계에서만 등장합니다.

pub mod entities;
pub mod dto;
pub mod models;
