//! 계정 찾기 요청 DTO
//!
//! 아이디 찾기와 비밀번호 재설정 흐름의 요청을 정의합니다.

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::validators::validate_password;

/// 아이디 찾기 요청
///
/// 등록 여부와 무관하게 동일한 응답을 돌려줍니다. 등록된 이메일이면
/// 마스킹된 아이디가 메일로 발송됩니다.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct FindUserIdRequest {
    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: String,
}

/// 비밀번호 재설정용 인증 메일 발송 요청
///
/// 아이디와 이메일이 같은 회원의 것일 때만 실제로 발송됩니다.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct FindPasswordSendRequest {
    #[validate(length(min = 1, message = "아이디를 입력해주세요"))]
    pub user_id: String,

    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: String,
}

/// 비밀번호 재설정 요청
///
/// 인증번호 확인까지 마친 토큰으로 새 비밀번호를 설정합니다.
/// 성공 시 해당 회원의 모든 세션이 폐기됩니다.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct FindPasswordResetRequest {
    #[validate(custom(function = "validate_password"))]
    pub new_password: String,

    #[validate(length(min = 1, message = "이메일 인증 토큰이 필요합니다"))]
    pub verification_token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_email_rejected() {
        let req = FindUserIdRequest {
            email: "not-an-email".to_string(),
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_weak_reset_password_rejected() {
        let req = FindPasswordResetRequest {
            new_password: "weak".to_string(),
            verification_token: "tok".to_string(),
        };
        assert!(req.validate().is_err());
    }
}
