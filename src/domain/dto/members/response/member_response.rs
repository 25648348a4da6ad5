//! 회원 관련 응답 DTO
//!
//! 비밀번호 해시, 내부 ObjectId, 감사용 IP 필드는 응답에서 제외합니다.

use mongodb::bson::DateTime;
use serde::{Deserialize, Serialize};

use crate::domain::entities::members::{Gender, Member, SocialType, UserType};

/// 내 정보 조회 응답
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemberInfoResponse {
    pub user_id: String,
    pub email: String,
    pub nick: String,
    pub name: Option<String>,
    pub birth_date: Option<String>,
    pub gender: Option<Gender>,
    pub image_url: Option<String>,
    pub user_type: UserType,
    pub social_type: Option<SocialType>,
    pub is_social_guest: bool,
    pub created_at: DateTime,
}

impl From<Member> for MemberInfoResponse {
    fn from(member: Member) -> Self {
        let Member {
            user_id,
            email,
            nick,
            name,
            birth_date,
            gender,
            image_url,
            user_type,
            social_type,
            is_social_guest,
            created_at,
            ..
        } = member;

        Self {
            user_id,
            email,
            nick,
            name,
            birth_date,
            gender,
            image_url,
            user_type,
            social_type,
            is_social_guest,
            created_at,
        }
    }
}

/// 회원가입 완료 응답
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignUpResponse {
    pub user_id: String,
    pub email: String,
    pub nick: String,
}

/// 인증 메일 발송 응답
///
/// 클라이언트는 이 토큰으로 인증번호 확인을 요청합니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerificationSendResponse {
    pub verification_token: String,
}

/// 소셜 교환 토큰 발급 응답
///
/// OAuth 콜백 처리기가 이 토큰을 클라이언트에 전달하고,
/// 클라이언트는 소셜 로그인 요청으로 교환합니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SocialTokenResponse {
    pub social_token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_info_response_hides_sensitive_fields() {
        let member = Member::new_email(
            "member_one".to_string(),
            "one@example.com".to_string(),
            "원이".to_string(),
            "$2b$04$hash".to_string(),
            None,
            None,
            None,
        );

        let value = serde_json::to_value(MemberInfoResponse::from(member)).unwrap();
        assert!(value.get("password_hash").is_none());
        assert!(value.get("created_ip").is_none());
        assert!(value.get("_id").is_none());
        assert_eq!(value["user_id"], "member_one");
    }
}
