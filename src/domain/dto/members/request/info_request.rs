//! 회원 정보 관리 요청 DTO
//!
//! 내 정보 수정, 비밀번호/이메일 변경, 탈퇴 요청을 정의합니다.
//! 현재 비밀번호를 요구하는 요청은 세션 탈취만으로는 수행할 수 없습니다.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use super::validators::{validate_birth_date, validate_password};
use crate::domain::entities::members::Gender;
use crate::utils::string_utils::deserialize_optional_string;

/// 내 정보 수정 요청
///
/// 모든 필드가 선택이며, 전달된 필드만 반영됩니다.
/// 빈 문자열은 None으로 정규화됩니다.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateInfoRequest {
    /// 닉네임 (2-20자, 중복 불가)
    #[validate(length(min = 2, max = 20, message = "닉네임은 2-20자 사이여야 합니다"))]
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub nick: Option<String>,

    #[validate(length(max = 50, message = "이름은 50자를 넘을 수 없습니다"))]
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub name: Option<String>,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub image_url: Option<String>,

    #[validate(custom(function = "validate_birth_date"))]
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub birth_date: Option<String>,

    #[serde(default)]
    pub gender: Option<Gender>,
}

/// 비밀번호 변경 요청
///
/// 성공 시 비밀번호 변경과 함께 모든 세션이 폐기됩니다.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_new_password_differs"))]
pub struct UpdatePasswordRequest {
    #[validate(length(min = 1, message = "현재 비밀번호를 입력해주세요"))]
    pub current_password: String,

    #[validate(custom(function = "validate_password"))]
    pub new_password: String,
}

fn validate_new_password_differs(req: &UpdatePasswordRequest) -> Result<(), ValidationError> {
    if req.current_password == req.new_password {
        return Err(ValidationError::new("password_unchanged")
            .with_message("새 비밀번호가 기존 비밀번호와 같습니다".into()));
    }
    Ok(())
}

/// 이메일 변경 요청
///
/// 새 이메일로 받은 인증을 완료한 토큰과 현재 비밀번호를 함께 요구합니다.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateEmailRequest {
    #[validate(length(min = 1, message = "현재 비밀번호를 입력해주세요"))]
    pub current_password: String,

    #[validate(length(min = 1, message = "이메일 인증 토큰이 필요합니다"))]
    pub verification_token: String,
}

/// 회원 탈퇴 요청
///
/// 이메일 가입 회원은 비밀번호 확인이 필요하고, 소셜 가입 회원은
/// 비밀번호가 없으므로 생략합니다.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct WithdrawRequest {
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub password: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_password_rejected() {
        let req = UpdatePasswordRequest {
            current_password: "passw0rd!".to_string(),
            new_password: "passw0rd!".to_string(),
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_weak_new_password_rejected() {
        let req = UpdatePasswordRequest {
            current_password: "passw0rd!".to_string(),
            new_password: "onlyletters".to_string(),
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_empty_update_info_allowed() {
        let req: UpdateInfoRequest = serde_json::from_str("{}").unwrap();
        assert!(req.validate().is_ok());
        assert!(req.nick.is_none());
    }

    #[test]
    fn test_blank_nick_normalized_to_none() {
        let req: UpdateInfoRequest = serde_json::from_str(r#"{"nick": "  "}"#).unwrap();
        assert!(req.nick.is_none());
    }
}
