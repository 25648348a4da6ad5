//! 로그인 요청 DTO
//!
//! 아이디/비밀번호 로그인과 소셜 교환 토큰 로그인 두 가지 형태를 정의합니다.
//! 형식 수준 검증만 수행하며, 자격 증명의 진위는 서비스 계층이 판정합니다.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::members::SocialType;

/// 아이디/비밀번호 로그인 요청
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "아이디를 입력해주세요"))]
    pub user_id: String,

    #[validate(length(min = 1, message = "비밀번호를 입력해주세요"))]
    pub password: String,
}

/// 소셜 로그인 요청
///
/// OAuth 콜백 과정에서 발급된 1회용 교환 토큰으로 로그인합니다.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SocialLoginRequest {
    #[validate(length(min = 1, message = "소셜 토큰이 필요합니다"))]
    pub social_token: String,
}

/// 소셜 교환 토큰 발급 요청
///
/// OAuth 콜백 처리기가 제공자 인증을 마친 뒤 내부 키와 함께 호출합니다.
/// 일반 클라이언트가 직접 호출하는 API가 아닙니다.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SocialIssueRequest {
    pub social_type: SocialType,

    #[validate(length(min = 1, message = "소셜 식별자가 필요합니다"))]
    pub social_id: String,

    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: String,

    #[validate(length(min = 1, max = 30, message = "닉네임은 1자 이상 30자 이하여야 합니다"))]
    pub nick: String,

    pub social_nick: Option<String>,

    pub image_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_fields_rejected() {
        let req = LoginRequest {
            user_id: String::new(),
            password: "passw0rd!".to_string(),
        };
        assert!(req.validate().is_err());

        let req = SocialLoginRequest {
            social_token: String::new(),
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_social_issue_request_validation() {
        let req = SocialIssueRequest {
            social_type: SocialType::Kakao,
            social_id: "12345".to_string(),
            email: "kakao@example.com".to_string(),
            nick: "카카오사용자".to_string(),
            social_nick: None,
            image_url: None,
        };
        assert!(req.validate().is_ok());

        let bad_email = SocialIssueRequest {
            email: "not-an-email".to_string(),
            ..req.clone()
        };
        assert!(bad_email.validate().is_err());

        let empty_id = SocialIssueRequest {
            social_id: String::new(),
            ..req
        };
        assert!(empty_id.validate().is_err());
    }

    #[test]
    fn test_social_type_deserializes_screaming_case() {
        let req: SocialIssueRequest = serde_json::from_str(
            r#"{"social_type": "NAVER", "social_id": "98765",
                "email": "naver@example.com", "nick": "네이버사용자"}"#,
        )
        .unwrap();

        assert_eq!(req.social_type, SocialType::Naver);
        assert!(req.social_nick.is_none());
    }
}
