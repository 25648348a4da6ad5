//! 이메일 발송 서비스 구현
//!
//! SES 호환 HTTP API로 메일을 발송합니다. 제공자 오류의 상세 내용은
//! 로그에만 남기고 클라이언트에는 일반화된 메시지만 전달합니다.

use serde::Serialize;
use singleton_macro::service;

use crate::{
    config::{MailConfig, VerificationConfig},
    errors::errors::AppError,
};

#[derive(Debug, Serialize)]
struct OutboundEmail<'a> {
    from: String,
    to: &'a str,
    subject: &'a str,
    html: &'a str,
}

/// 이메일 발송 서비스
#[service(name = "mail")]
pub struct MailService {
    // 외부 의존성 없음 (HTTP 클라이언트는 호출마다 생성)
}

impl MailService {
    /// HTML 메일 발송
    ///
    /// # Errors
    ///
    /// * `AppError::DeliveryFailed` - 네트워크 오류 또는 제공자 측 거부
    pub async fn send_html(&self, to: &str, subject: &str, html: &str) -> Result<(), AppError> {
        let client = reqwest::Client::new();

        let body = OutboundEmail {
            from: MailConfig::sender(),
            to,
            subject,
            html,
        };

        let response = client
            .post(MailConfig::api_url())
            .header("X-Api-Key", MailConfig::api_key())
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                log::error!("메일 발송 요청 실패 (to: {}): {}", to, e);
                AppError::DeliveryFailed
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            log::error!("메일 발송 거부 (to: {}, status: {}): {}", to, status, error_text);
            return Err(AppError::DeliveryFailed);
        }

        log::info!("메일 발송 완료 (to: {}, subject: {})", to, subject);
        Ok(())
    }

    /// 인증번호 안내 메일 발송
    pub async fn send_verification_code(
        &self,
        to: &str,
        subject: &str,
        code: &str,
    ) -> Result<(), AppError> {
        let html = verification_code_body(code, VerificationConfig::send_ttl_minutes());
        self.send_html(to, subject, &html).await
    }

    /// 아이디 찾기 안내 메일 발송 (마스킹된 아이디 포함)
    pub async fn send_masked_user_id(&self, to: &str, masked_user_id: &str) -> Result<(), AppError> {
        let html = format!(
            "<div style=\"font-family: sans-serif; max-width: 480px; margin: 0 auto;\">\
             <h2>아이디 찾기 안내</h2>\
             <p>요청하신 계정의 아이디는 다음과 같습니다.</p>\
             <p style=\"font-size: 24px; font-weight: bold;\">{}</p>\
             <p style=\"color: #888;\">보안을 위해 일부 문자는 가려져 있습니다.</p>\
             </div>",
            masked_user_id
        );

        self.send_html(to, "[회원서비스] 아이디 찾기 안내", &html).await
    }
}

/// 인증번호 안내 메일 본문 (유효 시간은 인증 세션 TTL과 같은 값을 안내)
fn verification_code_body(code: &str, ttl_minutes: u64) -> String {
    format!(
        "<div style=\"font-family: sans-serif; max-width: 480px; margin: 0 auto;\">\
         <h2>이메일 인증 안내</h2>\
         <p>아래 인증번호를 입력해 주세요. 인증번호는 {}분 동안 유효합니다.</p>\
         <p style=\"font-size: 28px; font-weight: bold; letter-spacing: 4px;\">{}</p>\
         <p style=\"color: #888;\">본인이 요청하지 않았다면 이 메일을 무시하셔도 됩니다.</p>\
         </div>",
        ttl_minutes, code
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verification_body_uses_configured_ttl() {
        let body = verification_code_body("123456", 30);
        assert!(body.contains("123456"));
        assert!(body.contains("30분 동안 유효"));

        let shorter = verification_code_body("654321", 5);
        assert!(shorter.contains("5분 동안 유효"));
    }
}
