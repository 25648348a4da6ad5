//! 이메일 인증 모델
//!
//! 인증번호 발송부터 확인, 최종 소비까지의 상태를 담는 모델입니다.
//! 시도 횟수 제한과 완료 판정은 전부 이 모델의 순수 함수로 처리하고,
//! 저장과 TTL 관리는 리포지토리가 맡습니다.

use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// 인증 토큰(키 조각) 길이
pub const VERIFICATION_TOKEN_LENGTH: usize = 32;
/// 인증번호 자릿수
pub const VERIFICATION_NUMBER_DIGITS: usize = 6;

/// 이메일 인증의 용도 구분
///
/// 용도별로 Redis 키 공간이 분리되어, 비밀번호 찾기용으로 받은 인증을
/// 회원가입에 재사용하는 식의 교차 사용이 불가능합니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VerificationPurpose {
    SignUp,
    FindPassword,
    EmailUpdate,
}

impl VerificationPurpose {
    /// Redis 키에 들어가는 용도 구분 문자열
    pub fn key_fragment(&self) -> &'static str {
        match self {
            VerificationPurpose::SignUp => "SignUp",
            VerificationPurpose::FindPassword => "FindPassword",
            VerificationPurpose::EmailUpdate => "EmailUpdate",
        }
    }

    /// Redis 저장 키 생성 (`emailVerification{용도}:{token}`)
    pub fn redis_key(&self, token: &str) -> String {
        format!("emailVerification{}:{}", self.key_fragment(), token)
    }
}

/// 진행 중인 이메일 인증의 상태
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmailVerification {
    /// 인증 대상 이메일
    pub email: String,
    /// 클라이언트에게 전달되는 인증 토큰 (Redis 키 조각)
    pub verification_token: String,
    /// 메일로 발송된 6자리 인증번호
    pub verification_number: String,
    /// 지금까지의 확인 시도 횟수
    pub attempt_count: u32,
    /// 인증번호 확인 완료 여부
    pub is_done: bool,
}

impl EmailVerification {
    pub fn new(email: String, verification_token: String, verification_number: String) -> Self {
        Self {
            email,
            verification_token,
            verification_number,
            attempt_count: 0,
            is_done: false,
        }
    }

    /// 인증번호 확인 시도
    ///
    /// 실패해도 시도 횟수는 증가하며, 변경된 상태는 호출자가 다시 저장해야
    /// 합니다. 한도 도달 이후의 시도는 번호가 맞아도 거부됩니다.
    pub fn check_code(&mut self, supplied: &str, max_attempts: u32) -> Result<(), AppError> {
        if self.is_done {
            return Err(AppError::AlreadyVerified);
        }
        if self.attempt_count >= max_attempts {
            return Err(AppError::TooManyAttempts);
        }

        self.attempt_count += 1;

        if self.verification_number != supplied {
            return Err(AppError::ValidationError(
                "인증번호가 일치하지 않습니다.".to_string(),
            ));
        }

        self.is_done = true;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> EmailVerification {
        EmailVerification::new(
            "one@example.com".to_string(),
            "tok".to_string(),
            "123456".to_string(),
        )
    }

    #[test]
    fn test_correct_code_marks_done() {
        let mut v = sample();
        assert!(v.check_code("123456", 10).is_ok());
        assert!(v.is_done);
        assert_eq!(v.attempt_count, 1);
    }

    #[test]
    fn test_wrong_code_counts_attempt() {
        let mut v = sample();
        let err = v.check_code("000000", 10).unwrap_err();
        assert!(matches!(err, AppError::ValidationError(_)));
        assert_eq!(v.attempt_count, 1);
        assert!(!v.is_done);
    }

    #[test]
    fn test_attempt_limit_blocks_even_correct_code() {
        let mut v = sample();
        for _ in 0..10 {
            let _ = v.check_code("000000", 10);
        }
        assert_eq!(v.attempt_count, 10);

        let err = v.check_code("123456", 10).unwrap_err();
        assert!(matches!(err, AppError::TooManyAttempts));
        assert!(!v.is_done);
        // 한도 도달 이후에는 시도 횟수도 더 늘지 않는다
        assert_eq!(v.attempt_count, 10);
    }

    #[test]
    fn test_recheck_after_done_rejected() {
        let mut v = sample();
        v.check_code("123456", 10).unwrap();

        let err = v.check_code("123456", 10).unwrap_err();
        assert!(matches!(err, AppError::AlreadyVerified));
    }

    #[test]
    fn test_purpose_key_spaces_are_distinct() {
        let sign_up = VerificationPurpose::SignUp.redis_key("tok");
        let find_pw = VerificationPurpose::FindPassword.redis_key("tok");
        let email = VerificationPurpose::EmailUpdate.redis_key("tok");

        assert_eq!(sign_up, "emailVerificationSignUp:tok");
        assert_ne!(sign_up, find_pw);
        assert_ne!(find_pw, email);
    }
}
