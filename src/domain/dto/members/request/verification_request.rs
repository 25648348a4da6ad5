//! 이메일 인증 요청 DTO

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::models::verification::VerificationPurpose;

/// 인증 메일 발송 요청
///
/// 같은 이메일로 다시 요청하면 기존 인증 세션은 폐기되고 새 세션이
/// 시작됩니다. IP 단위 발송 횟수 제한이 적용됩니다.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct VerificationSendRequest {
    pub purpose: VerificationPurpose,

    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: String,
}

/// 인증번호 확인 요청
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct VerificationCheckRequest {
    pub purpose: VerificationPurpose,

    #[validate(length(min = 1, message = "이메일 인증 토큰이 필요합니다"))]
    pub verification_token: String,

    #[validate(length(equal = 6, message = "인증번호는 6자리여야 합니다"))]
    pub verification_number: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_purpose_deserializes_from_screaming_case() {
        let req: VerificationSendRequest =
            serde_json::from_str(r#"{"purpose": "SIGN_UP", "email": "one@example.com"}"#).unwrap();
        assert_eq!(req.purpose, VerificationPurpose::SignUp);
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_wrong_number_length_rejected() {
        let req = VerificationCheckRequest {
            purpose: VerificationPurpose::SignUp,
            verification_token: "tok".to_string(),
            verification_number: "1234".to_string(),
        };
        assert!(req.validate().is_err());
    }
}
