//! 메일 전송 구현체
//!
//! - [`SmtpMailer`] - lettre 비동기 SMTP 전송 (STARTTLS)
//! - [`LogMailer`] - SMTP 미설정 환경용, 메일 내용을 로그로만 남김

use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use log::info;

use crate::config::MailConfig;
use crate::core::errors::{AppError, AppResult};

/// 발송할 메일 한 통
#[derive(Debug, Clone, PartialEq)]
pub struct OutgoingMail {
    pub to: String,
    pub subject: String,
    pub body: String,
}

/// 메일 전송 트레이트
#[async_trait]
pub trait Mailer: Send + Sync {
    /// # Errors
    ///
    /// * `AppError::ExternalServiceError` - 주소 파싱, 메시지 생성, SMTP 전송 실패
    async fn send(&self, mail: OutgoingMail) -> AppResult<()>;
}

/// SMTP 메일러
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from_address: String,
}

impl SmtpMailer {
    pub fn new(host: &str, config: &MailConfig) -> AppResult<Self> {
        let credentials =
            Credentials::new(config.smtp_username.clone(), config.smtp_password.clone());

        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(host)
            .map_err(|e| AppError::ExternalServiceError(format!("SMTP 설정 실패: {}", e)))?
            .port(config.smtp_port)
            .credentials(credentials)
            .build();

        Ok(Self {
            transport,
            from_address: config.from_address.clone(),
        })
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send(&self, mail: OutgoingMail) -> AppResult<()> {
        let message = Message::builder()
            .from(self.from_address.parse().map_err(|_| {
                AppError::ExternalServiceError(format!("잘못된 발신 주소: {}", self.from_address))
            })?)
            .to(mail
                .to
                .parse()
                .map_err(|_| AppError::ExternalServiceError(format!("잘못된 수신 주소: {}", mail.to)))?)
            .subject(mail.subject.as_str())
            .header(ContentType::TEXT_PLAIN)
            .body(mail.body)
            .map_err(|e| AppError::ExternalServiceError(format!("메일 생성 실패: {}", e)))?;

        self.transport
            .send(message)
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("메일 전송 실패: {}", e)))?;

        info!("📧 메일 전송 완료: {} ({})", mail.to, mail.subject);
        Ok(())
    }
}

/// 로그 전용 메일러
pub struct LogMailer;

#[async_trait]
impl Mailer for LogMailer {
    async fn send(&self, mail: OutgoingMail) -> AppResult<()> {
        info!(
            "📧 [SMTP 미설정] to={} subject={}\n{}",
            mail.to, mail.subject, mail.body
        );
        Ok(())
    }
}

#[cfg(test)]
pub mod recording {
    use std::sync::Mutex;

    use super::*;

    /// 보낸 메일을 기록하는 테스트용 메일러
    #[derive(Default)]
    pub struct RecordingMailer {
        sent: Mutex<Vec<OutgoingMail>>,
        fail: bool,
    }

    impl RecordingMailer {
        /// 항상 전송에 실패하는 메일러
        pub fn failing() -> Self {
            Self { sent: Mutex::new(Vec::new()), fail: true }
        }

        pub fn sent(&self) -> Vec<OutgoingMail> {
            self.sent.lock().unwrap().clone()
        }

        /// 마지막 메일 본문 속 링크의 토큰 (`/{token}` 또는 `?token={token}`)
        pub fn last_token(&self) -> Option<String> {
            let sent = self.sent.lock().unwrap();
            let body = &sent.last()?.body;
            let link = body.split_whitespace().find(|word| word.starts_with("http"))?;
            let token = match link.split_once("token=") {
                Some((_, token)) => token,
                None => link.rsplit('/').next()?,
            };
            Some(token.to_string())
        }
    }

    #[async_trait]
    impl Mailer for RecordingMailer {
        async fn send(&self, mail: OutgoingMail) -> AppResult<()> {
            if self.fail {
                return Err(AppError::ExternalServiceError("SMTP unavailable".to_string()));
            }
            self.sent.lock().unwrap().push(mail);
            Ok(())
        }
    }
}
