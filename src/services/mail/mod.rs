//! # Mail Service Module
//!
//! 이메일 인증 링크와 비밀번호 재설정 링크를 발송합니다.
//! 발송은 최선 노력(best-effort)이며, 실패는 호출 측에서 로그로만 남기고
//! 요청 자체를 실패시키지 않습니다.

pub mod mailer;

use std::sync::Arc;

use log::{info, warn};

use crate::config::MailConfig;
use crate::core::errors::AppResult;

pub use mailer::{LogMailer, Mailer, OutgoingMail, SmtpMailer};

/// 설정에 맞는 메일러를 생성합니다.
///
/// `SMTP_HOST`가 없으면 [`LogMailer`]를 사용합니다.
pub fn build_mailer(config: &MailConfig) -> AppResult<Arc<dyn Mailer>> {
    match &config.smtp_host {
        Some(host) => {
            info!("📧 SMTP 메일러 사용: {}:{}", host, config.smtp_port);
            Ok(Arc::new(SmtpMailer::new(host, config)?))
        }
        None => {
            warn!("SMTP_HOST not set, emails will only be logged");
            Ok(Arc::new(LogMailer))
        }
    }
}

/// 이메일 인증 메일
pub fn verification_mail(to: &str, name: &str, link: &str) -> OutgoingMail {
    OutgoingMail {
        to: to.to_string(),
        subject: "Verify your email".to_string(),
        body: format!(
            "Hello {},\n\nPlease confirm your email address by opening the link below:\n\n{}\n",
            name, link
        ),
    }
}

/// 비밀번호 재설정 메일
pub fn password_reset_mail(to: &str, link: &str, expires_in_minutes: i64) -> OutgoingMail {
    OutgoingMail {
        to: to.to_string(),
        subject: "Reset your password".to_string(),
        body: format!(
            "A password reset was requested for your account.\n\n\
             Open the link below to choose a new password. It expires in {} minutes.\n\n{}\n\n\
             If you did not request this, you can ignore this email.\n",
            expires_in_minutes, link
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::mail::mailer::recording::RecordingMailer;

    #[actix_web::test]
    async fn test_recording_mailer_extracts_tokens() {
        let mailer = RecordingMailer::default();

        mailer
            .send(verification_mail("a@x.com", "A", "http://api/api/auth/verify-email/abc123"))
            .await
            .unwrap();
        assert_eq!(mailer.last_token().as_deref(), Some("abc123"));

        mailer
            .send(password_reset_mail("a@x.com", "http://app/reset-password?token=def456", 60))
            .await
            .unwrap();
        assert_eq!(mailer.last_token().as_deref(), Some("def456"));
        assert_eq!(mailer.sent().len(), 2);
    }

    #[test]
    fn test_log_mailer_is_used_without_smtp_host() {
        let config = MailConfig {
            smtp_host: None,
            smtp_port: 587,
            smtp_username: String::new(),
            smtp_password: String::new(),
            from_address: "no-reply@biz360.local".to_string(),
            app_base_url: "http://localhost:3000".to_string(),
            frontend_url: "http://localhost:3000".to_string(),
        };
        assert!(build_mailer(&config).is_ok());
    }
}
