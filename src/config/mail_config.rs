//! 메일 발송 설정
//!
//! `SMTP_HOST`가 설정되어 있지 않으면 실제 메일 대신 로그로만 링크를 남깁니다.

use std::env;

use crate::config::data_config::env_or;

#[derive(Debug, Clone)]
pub struct MailConfig {
    /// SMTP 서버 주소 (없으면 로그 전용 메일러 사용)
    pub smtp_host: Option<String>,
    pub smtp_port: u16,
    pub smtp_username: String,
    pub smtp_password: String,
    /// 발신자 주소 (`MAIL_FROM`)
    pub from_address: String,
    /// 이메일 인증 링크의 기준 URL (API 서버)
    pub app_base_url: String,
    /// 비밀번호 재설정 화면이 있는 프론트엔드 URL
    pub frontend_url: String,
}

impl MailConfig {
    pub fn from_env() -> Self {
        Self {
            smtp_host: env::var("SMTP_HOST").ok().filter(|host| !host.trim().is_empty()),
            smtp_port: env_or("SMTP_PORT", 587),
            smtp_username: env::var("SMTP_USERNAME").unwrap_or_default(),
            smtp_password: env::var("SMTP_PASSWORD").unwrap_or_default(),
            from_address: env::var("MAIL_FROM")
                .unwrap_or_else(|_| "Biz360 <no-reply@biz360.local>".to_string()),
            app_base_url: env::var("APP_BASE_URL")
                .unwrap_or_else(|_| "http://localhost:3000".to_string()),
            frontend_url: env::var("FRONTEND_URL")
                .unwrap_or_else(|_| "http://localhost:3000".to_string()),
        }
    }

    /// 이메일 인증 링크
    pub fn verification_link(&self, token: &str) -> String {
        format!(
            "{}/api/auth/verify-email/{}",
            self.app_base_url.trim_end_matches('/'),
            token
        )
    }

    /// 비밀번호 재설정 링크
    pub fn reset_link(&self, token: &str) -> String {
        format!(
            "{}/reset-password?token={}",
            self.frontend_url.trim_end_matches('/'),
            token
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> MailConfig {
        MailConfig {
            smtp_host: None,
            smtp_port: 587,
            smtp_username: String::new(),
            smtp_password: String::new(),
            from_address: "no-reply@biz360.local".to_string(),
            app_base_url: "http://api.biz360.local/".to_string(),
            frontend_url: "https://biz360-sepia.vercel.app".to_string(),
        }
    }

    #[test]
    fn test_verification_link() {
        assert_eq!(
            config().verification_link("abc"),
            "http://api.biz360.local/api/auth/verify-email/abc"
        );
    }

    #[test]
    fn test_reset_link() {
        assert_eq!(
            config().reset_link("abc"),
            "https://biz360-sepia.vercel.app/reset-password?token=abc"
        );
    }
}
