//! # Data Transfer Objects (DTO) Module
//!
//! API 경계에서 주고받는 요청/응답 객체들입니다.
//! 엔티티와 분리되어 있어 비밀번호 해시 같은 내부 필드가 응답에 실수로 노출되지 않습니다.
//!
//! ## 요청 처리 단계
//!
//! ```text
//! JSON ──serde──▶ *Request ──필수 필드 검사──▶ validator 검증 ──▶ 도메인 입력 값 (Draft)
//! ```
//!
//! 1. 역직렬화: 문자열 필드는 공백 정리, 숫자/불리언 필드는 문자열 표현도 허용
//! 2. 필수 필드: 누락된 필드 전체를 `{"error":"Missing required fields","fields":[...]}`로 응답
//! 3. 형식 검증: `validator` derive (이메일 형식 등)
//!
//! ## 모듈 구조
//!
//! ```text
//! dto/
//! ├── common.rs      # 메시지, 삭제 응답
//! ├── users/         # 가입, 로그인, 비밀번호 재설정, 사용자 응답
//! ├── tokens/        # 리프레시 토큰 요청
//! ├── products/      # 상품 요청/쿼리/페이지 응답
//! └── companies/     # 회사 요청
//! ```

pub mod common;
pub mod users;
pub mod tokens;
pub mod products;
pub mod companies;
