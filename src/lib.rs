//! Biz360 백엔드
//!
//! 사용자 인증과 상품/회사 관리를 제공하는 Rust 기반 REST API 서비스입니다.
//!
//! # Features
//!
//! - **회원 관리**: 가입, 이메일 인증, 비밀번호 재설정
//! - **JWT 인증**: 액세스/리프레시 토큰, 리프레시 토큰 교체(rotation)
//! - **상품 카탈로그**: 정렬/페이지 목록, 검색, 인증된 사용자의 CRUD
//! - **회사 관리**: 인증된 사용자의 CRUD
//! - **PostgreSQL**: `sqlx` 연결 풀과 마이그레이션
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트, 인증 미들웨어
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 비즈니스 로직 (AppContext로 주입)
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← 데이터 액세스 트레이트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   PostgreSQL    │ ← 저장소
//! └─────────────────┘
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
pub mod middlewares;
