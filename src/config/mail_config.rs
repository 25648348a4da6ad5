//! 메일 발송 설정 모듈

use std::env;

/// 외부 메일 제공자(HTTP API) 설정
///
/// 인증번호, 아이디 찾기 안내 메일을 발송할 때 사용합니다.
pub struct MailConfig;

impl MailConfig {
    /// 메일 발송 API 엔드포인트를 반환합니다.
    pub fn api_url() -> String {
        env::var("MAIL_API_URL")
            .unwrap_or_else(|_| "http://localhost:9090/v2/email/outbound-emails".to_string())
    }

    /// 메일 발송 API 인증 키를 반환합니다.
    pub fn api_key() -> String {
        env::var("MAIL_API_KEY").unwrap_or_else(|_| {
            log::warn!("MAIL_API_KEY not set, using empty key (dev only)");
            String::new()
        })
    }

    /// 발신자 주소를 반환합니다.
    pub fn sender() -> String {
        env::var("MAIL_SENDER").unwrap_or_else(|_| "관리자 <no-reply@member-service.local>".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mail_config_defaults() {
        if env::var("MAIL_SENDER").is_err() {
            assert!(MailConfig::sender().contains("no-reply"));
        }
        if env::var("MAIL_API_URL").is_err() {
            assert!(MailConfig::api_url().starts_with("http"));
        }
    }
}
