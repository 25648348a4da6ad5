//! Member Entity Implementation
//!
//! 회원 엔티티의 핵심 구현체입니다.
//! 이메일 가입 회원과 소셜 가입 회원을 모두 표현하는 통합 모델을 제공합니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

/// 기본 회원 권한
pub const ROLE_MEMBER: &str = "MEMBER";
/// 관리자 권한
pub const ROLE_ADMIN: &str = "ADMIN";

/// 성별
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Gender {
    Man,
    Woman,
}

/// 가입 유형
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserType {
    /// 이메일 인증을 거친 일반 가입
    Email,
    /// 소셜 계정 연동 가입
    Social,
}

/// 소셜 가입 제공자
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SocialType {
    Kakao,
    Naver,
    Google,
}

impl SocialType {
    /// 아이디 접두사 (소셜 가입 회원의 user_id는 `{provider}_{social_id}` 형태)
    pub fn id_prefix(&self) -> &'static str {
        match self {
            SocialType::Kakao => "kakao_",
            SocialType::Naver => "naver_",
            SocialType::Google => "google_",
        }
    }
}

/// 쓰기 시점에 요청 IP를 기록하는 엔티티용 trait
///
/// 리포지토리가 저장/수정 직전에 명시적으로 호출합니다.
/// 런타임 리플렉션 없이 감사 필드를 채우기 위한 장치입니다.
pub trait IpAudited {
    /// 생성 요청의 IP를 기록합니다. 최초 저장 시에만 호출됩니다.
    fn set_created_ip(&mut self, ip: &str);

    /// 수정 요청의 IP를 기록합니다. 모든 쓰기에서 호출됩니다.
    fn set_modified_ip(&mut self, ip: &str);
}

/// 회원 엔티티
///
/// 시스템의 모든 회원을 표현하는 핵심 도메인 엔티티입니다.
/// `user_id`, `email`, `nick`은 각각 유일해야 하며,
/// 유일성 검사는 리포지토리의 생성/수정 경로에서 수행됩니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Member {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 로그인 아이디 (unique)
    pub user_id: String,
    /// 이메일 (unique)
    pub email: String,
    /// 닉네임 (unique)
    pub nick: String,
    /// 해시된 비밀번호 (소셜 회원의 경우 None)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password_hash: Option<String>,
    /// 실명
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// 생년월일 (YYYY-MM-DD)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
    /// 프로필 이미지 URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// 가입 유형
    pub user_type: UserType,
    /// 소셜 제공자 (소셜 회원만)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub social_type: Option<SocialType>,
    /// 제공자 측 회원 식별자 (소셜 회원만)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub social_id: Option<String>,
    /// 제공자 측 닉네임 (소셜 회원만)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub social_nick: Option<String>,
    /// 소셜 가입 후 추가 정보 입력 전 상태인지 여부
    pub is_social_guest: bool,
    /// 회원 권한 목록
    pub roles: Vec<String>,
    /// 생성 시간
    pub created_at: DateTime,
    /// 수정 시간
    pub updated_at: DateTime,
    /// 생성 요청 IP
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_ip: Option<String>,
    /// 마지막 수정 요청 IP
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified_ip: Option<String>,
}

impl Member {
    /// 새 이메일 가입 회원 생성
    pub fn new_email(
        user_id: String,
        email: String,
        nick: String,
        password_hash: String,
        name: Option<String>,
        birth_date: Option<String>,
        gender: Option<Gender>,
    ) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            user_id,
            email,
            nick,
            password_hash: Some(password_hash),
            name,
            birth_date,
            gender,
            image_url: None,
            user_type: UserType::Email,
            social_type: None,
            social_id: None,
            social_nick: None,
            is_social_guest: false,
            roles: vec![ROLE_MEMBER.to_string()],
            created_at: now,
            updated_at: now,
            created_ip: None,
            modified_ip: None,
        }
    }

    /// 새 소셜 가입 회원 생성
    ///
    /// 아이디는 `{provider}_{social_id}` 형태로 만들어지며, 추가 정보를
    /// 입력하기 전까지 게스트 상태로 시작합니다.
    pub fn new_social(
        social_type: SocialType,
        social_id: String,
        email: String,
        nick: String,
        social_nick: Option<String>,
        image_url: Option<String>,
    ) -> Self {
        let now = DateTime::now();
        let user_id = format!("{}{}", social_type.id_prefix(), social_id);

        Self {
            id: None,
            user_id,
            email,
            nick,
            password_hash: None,
            name: None,
            birth_date: None,
            gender: None,
            image_url,
            user_type: UserType::Social,
            social_type: Some(social_type),
            social_id: Some(social_id),
            social_nick,
            is_social_guest: true,
            roles: vec![ROLE_MEMBER.to_string()],
            created_at: now,
            updated_at: now,
            created_ip: None,
            modified_ip: None,
        }
    }

    /// ID 문자열로 변환
    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }

    /// 이메일 가입 회원인지 확인
    pub fn is_email_member(&self) -> bool {
        matches!(self.user_type, UserType::Email)
    }

    /// 비밀번호 인증이 가능한 회원인지 확인
    pub fn can_authenticate_with_password(&self) -> bool {
        self.is_email_member() && self.password_hash.is_some()
    }

    /// 특정 권한을 보유하고 있는지 확인
    pub fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r == role)
    }

    /// 권한 목록을 토큰 클레임용 문자열로 변환 (쉼표 구분)
    pub fn authorities(&self) -> String {
        self.roles.join(",")
    }
}

impl IpAudited for Member {
    fn set_created_ip(&mut self, ip: &str) {
        self.created_ip = Some(ip.to_string());
        self.modified_ip = Some(ip.to_string());
    }

    fn set_modified_ip(&mut self, ip: &str) {
        self.modified_ip = Some(ip.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_email_member_defaults() {
        let member = Member::new_email(
            "member_one".to_string(),
            "one@example.com".to_string(),
            "원이".to_string(),
            "$2b$04$hash".to_string(),
            None,
            None,
            None,
        );

        assert!(member.is_email_member());
        assert!(member.can_authenticate_with_password());
        assert!(member.has_role(ROLE_MEMBER));
        assert!(!member.has_role(ROLE_ADMIN));
        assert!(!member.is_social_guest);
    }

    #[test]
    fn test_new_social_member_user_id_prefix() {
        let member = Member::new_social(
            SocialType::Kakao,
            "12345".to_string(),
            "kakao@example.com".to_string(),
            "카카오사용자".to_string(),
            None,
            None,
        );

        assert_eq!(member.user_id, "kakao_12345");
        assert!(member.is_social_guest);
        assert!(!member.can_authenticate_with_password());
    }

    #[test]
    fn test_ip_audit_stamps() {
        let mut member = Member::new_email(
            "member_one".to_string(),
            "one@example.com".to_string(),
            "원이".to_string(),
            "$2b$04$hash".to_string(),
            None,
            None,
            None,
        );

        member.set_created_ip("198.51.100.1");
        assert_eq!(member.created_ip.as_deref(), Some("198.51.100.1"));
        assert_eq!(member.modified_ip.as_deref(), Some("198.51.100.1"));

        member.set_modified_ip("203.0.113.9");
        assert_eq!(member.created_ip.as_deref(), Some("198.51.100.1"));
        assert_eq!(member.modified_ip.as_deref(), Some("203.0.113.9"));
    }

    #[test]
    fn test_authorities_joins_roles() {
        let mut member = Member::new_email(
            "member_one".to_string(),
            "one@example.com".to_string(),
            "원이".to_string(),
            "$2b$04$hash".to_string(),
            None,
            None,
            None,
        );
        member.roles.push(ROLE_ADMIN.to_string());

        assert_eq!(member.authorities(), "MEMBER,ADMIN");
    }
}
