//! # 회원가입 요청 DTO
//!
//! 이메일 인증을 완료한 뒤 제출하는 회원가입 요청의 데이터 구조를 정의합니다.
//! `verification_token`은 인증번호 확인까지 마친 인증 세션의 토큰이어야 하며,
//! 가입 성공 시 소비됩니다. 이메일 자체는 인증 세션에 저장된 값을 사용하므로
//! 요청 본문에 포함되지 않습니다.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use super::validators::{validate_birth_date, validate_password, validate_user_id};
use crate::domain::entities::members::Gender;

/// 회원가입 요청 DTO
///
/// # JSON 예제
///
/// ```json
/// {
///   "user_id": "member_one",
///   "password": "passw0rd!",
///   "password_confirm": "passw0rd!",
///   "nick": "원이",
///   "name": "김회원",
///   "birth_date": "1995-03-21",
///   "gender": "MAN",
///   "verification_token": "f3a9..."
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_passwords_match"))]
pub struct SignUpRequest {
    /// 로그인 아이디 (4-20자, 영문 소문자/숫자/언더스코어)
    #[validate(custom(function = "validate_user_id"))]
    pub user_id: String,

    /// 계정 비밀번호 (8-20자, 영문+숫자+특수문자)
    #[validate(custom(function = "validate_password"))]
    pub password: String,

    /// 비밀번호 확인
    pub password_confirm: String,

    /// 닉네임 (2-20자, 중복 불가)
    #[validate(length(min = 2, max = 20, message = "닉네임은 2-20자 사이여야 합니다"))]
    pub nick: String,

    /// 실명 (선택)
    #[validate(length(max = 50, message = "이름은 50자를 넘을 수 없습니다"))]
    pub name: Option<String>,

    /// 생년월일 (선택, YYYY-MM-DD)
    #[validate(custom(function = "validate_birth_date"))]
    pub birth_date: Option<String>,

    /// 성별 (선택)
    pub gender: Option<Gender>,

    /// 인증번호 확인까지 마친 이메일 인증 토큰
    #[validate(length(min = 1, message = "이메일 인증 토큰이 필요합니다"))]
    pub verification_token: String,
}

fn validate_passwords_match(req: &SignUpRequest) -> Result<(), ValidationError> {
    if req.password != req.password_confirm {
        return Err(ValidationError::new("passwords_mismatch")
            .with_message("비밀번호가 일치하지 않습니다".into()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> SignUpRequest {
        SignUpRequest {
            user_id: "member_one".to_string(),
            password: "passw0rd!".to_string(),
            password_confirm: "passw0rd!".to_string(),
            nick: "원이".to_string(),
            name: None,
            birth_date: Some("1995-03-21".to_string()),
            gender: Some(Gender::Man),
            verification_token: "tok".to_string(),
        }
    }

    #[test]
    fn test_valid_request_passes() {
        assert!(valid_request().validate().is_ok());
    }

    #[test]
    fn test_password_mismatch_rejected() {
        let mut req = valid_request();
        req.password_confirm = "different1!".to_string();
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_reserved_user_id_rejected() {
        let mut req = valid_request();
        req.user_id = "kakao_12345".to_string();
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_short_nick_rejected() {
        let mut req = valid_request();
        req.nick = "원".to_string();
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_missing_verification_token_rejected() {
        let mut req = valid_request();
        req.verification_token = String::new();
        assert!(req.validate().is_err());
    }
}
