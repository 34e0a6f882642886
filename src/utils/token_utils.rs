//! 불투명(opaque) 토큰 생성과 해싱
//!
//! 이메일 인증, 비밀번호 재설정 링크에 들어가는 랜덤 토큰과,
//! 토큰을 데이터베이스에 평문 대신 저장하기 위한 SHA-256 다이제스트를 만듭니다.

use rand::Rng;
use sha2::{Digest, Sha256};

/// 랜덤 토큰 바이트 수 (hex 인코딩 시 64자)
pub const TOKEN_BYTES: usize = 32;

/// 32바이트 랜덤 값을 소문자 hex 문자열로 반환합니다.
pub fn generate_random_token() -> String {
    let mut bytes = [0u8; TOKEN_BYTES];
    rand::rng().fill(&mut bytes);
    to_hex(&bytes)
}

/// 토큰의 SHA-256 hex 다이제스트
pub fn hash_token(token: &str) -> String {
    format!("{:x}", Sha256::digest(token.as_bytes()))
}

fn to_hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}
