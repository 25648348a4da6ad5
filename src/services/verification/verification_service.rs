//! 이메일 인증 서비스 구현
//!
//! 인증 메일 발송과 인증번호 확인, 완료된 인증의 소비까지를 담당합니다.
//! 가입, 비밀번호 재설정, 이메일 변경 흐름이 모두 이 서비스를 거칩니다.

use std::sync::Arc;

use singleton_macro::service;

use crate::{
    config::{ThrottleConfig, VerificationConfig},
    domain::models::verification::{
        EmailVerification, VerificationPurpose, VERIFICATION_NUMBER_DIGITS,
        VERIFICATION_TOKEN_LENGTH,
    },
    errors::errors::AppError,
    repositories::attempts::IpAddressAttemptRepository,
    repositories::verifications::VerificationRepository,
    services::mail::MailService,
    utils::random_utils::{generate_random_number, generate_random_string},
};

/// 이메일 인증 서비스
#[service(name = "verification")]
pub struct VerificationService {
    verification_repo: Arc<VerificationRepository>,
    ip_attempt_repo: Arc<IpAddressAttemptRepository>,
    mail_service: Arc<MailService>,
}

impl VerificationService {
    fn send_subject(purpose: VerificationPurpose) -> &'static str {
        match purpose {
            VerificationPurpose::SignUp => "[회원서비스] 회원가입 이메일 인증",
            VerificationPurpose::FindPassword => "[회원서비스] 비밀번호 재설정 이메일 인증",
            VerificationPurpose::EmailUpdate => "[회원서비스] 이메일 변경 인증",
        }
    }

    fn throttle_prefix(purpose: VerificationPurpose) -> String {
        format!("emailSendAttempt{}", purpose.key_fragment())
    }

    /// 인증 메일 발송
    ///
    /// IP 단위 발송 제한을 먼저 통과해야 하며, 메일 발송에 성공한
    /// 경우에만 인증 세션이 저장됩니다. 반환된 토큰으로 인증번호
    /// 확인을 요청합니다.
    pub async fn send(
        &self,
        purpose: VerificationPurpose,
        email: &str,
        ip: &str,
    ) -> Result<String, AppError> {
        let allowed = self
            .ip_attempt_repo
            .check_and_increment(
                &Self::throttle_prefix(purpose),
                ip,
                ThrottleConfig::email_send_limit() as i64,
            )
            .await?;

        if !allowed {
            log::warn!("인증 메일 발송 한도 초과 (ip: {})", ip);
            return Err(AppError::TooManyAttempts);
        }

        let token = generate_random_string(VERIFICATION_TOKEN_LENGTH);
        let code = generate_random_number(VERIFICATION_NUMBER_DIGITS);

        self.mail_service
            .send_verification_code(email, Self::send_subject(purpose), &code)
            .await?;

        let verification = EmailVerification::new(email.to_string(), token.clone(), code);
        self.verification_repo
            .save(
                purpose,
                &verification,
                VerificationConfig::send_ttl_minutes() * 60,
            )
            .await?;

        Ok(token)
    }

    /// 인증번호 확인
    ///
    /// 성공/실패와 무관하게 변경된 상태는 짧은 TTL로 다시 저장됩니다.
    /// 확인에 성공한 세션은 5분 안에 가입/재설정/변경 요청으로
    /// 소비되어야 합니다.
    pub async fn check(
        &self,
        purpose: VerificationPurpose,
        token: &str,
        code: &str,
    ) -> Result<EmailVerification, AppError> {
        let mut verification = self
            .verification_repo
            .find(purpose, token)
            .await?
            .ok_or(AppError::VerificationExpired)?;

        let result = verification.check_code(code, VerificationConfig::MAX_ATTEMPTS);

        self.verification_repo
            .save(
                purpose,
                &verification,
                VerificationConfig::recheck_ttl_minutes() * 60,
            )
            .await?;

        result.map(|_| verification)
    }

    /// 확인이 완료된 인증 세션인지 검증
    ///
    /// 가입, 비밀번호 재설정, 이메일 변경 요청이 본 동작을 수행하기
    /// 전에 호출합니다.
    pub async fn require_done(
        &self,
        purpose: VerificationPurpose,
        token: &str,
    ) -> Result<EmailVerification, AppError> {
        let verification = self
            .verification_repo
            .find(purpose, token)
            .await?
            .ok_or(AppError::VerificationExpired)?;

        if !verification.is_done {
            return Err(AppError::ValidationError(
                "이메일 인증이 완료되지 않았습니다.".to_string(),
            ));
        }

        Ok(verification)
    }

    /// 인증 세션 소비 (최종 완료)
    pub async fn complete(
        &self,
        purpose: VerificationPurpose,
        token: &str,
    ) -> Result<(), AppError> {
        self.verification_repo.delete(purpose, token).await
    }
}
