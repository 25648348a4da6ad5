use std::future::{ready, Ready};

use actix_web::{Error, FromRequest, HttpMessage, HttpRequest};
use serde::{Deserialize, Serialize};

use crate::domain::entities::members::ROLE_ADMIN;
use crate::domain::models::token::TokenClaims;

/// 액세스 토큰에서 추출된 회원 정보
///
/// 인증 미들웨어가 토큰을 검증한 뒤 request extensions에 넣고,
/// 핸들러는 이 추출자를 파라미터로 선언해 명시적으로 받아갑니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthenticatedMember {
    /// 회원 아이디
    pub user_id: String,

    /// 회원 이메일
    pub email: String,

    /// 회원 닉네임
    pub nick: String,

    /// 회원 권한 목록
    pub roles: Vec<String>,
}

impl AuthenticatedMember {
    pub fn from_claims(claims: &TokenClaims) -> Self {
        Self {
            user_id: claims.sub.clone(),
            email: claims.email.clone(),
            nick: claims.nick.clone(),
            roles: claims.roles(),
        }
    }

    /// 특정 권한을 보유하고 있는지 확인
    pub fn has_role(&self, role: &str) -> bool {
        self.roles.contains(&role.to_string())
    }

    /// 여러 권한 중 하나라도 보유하고 있는지 확인
    pub fn has_any_role(&self, roles: &[&str]) -> bool {
        roles.iter().any(|&role| self.has_role(role))
    }

    /// 관리자 권한을 보유하고 있는지 확인
    pub fn is_admin(&self) -> bool {
        self.has_role(ROLE_ADMIN)
    }
}

/// ActixWeb FromRequest trait 구현
impl FromRequest for AuthenticatedMember {
    type Error = Error;
    type Future = Ready<actix_web::Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        match req.extensions().get::<AuthenticatedMember>() {
            Some(member) => ready(Ok(member.clone())),
            None => ready(Err(actix_web::error::ErrorUnauthorized(
                "인증되지 않은 요청입니다",
            ))),
        }
    }
}

/// 선택적 인증 회원 추출자
#[derive(Debug, Clone)]
pub struct OptionalMember(pub Option<AuthenticatedMember>);

impl FromRequest for OptionalMember {
    type Error = Error;
    type Future = Ready<actix_web::Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        let member = req.extensions().get::<AuthenticatedMember>().cloned();
        ready(Ok(OptionalMember(member)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_claims_splits_roles() {
        let claims = TokenClaims {
            sub: "member_one".to_string(),
            email: "one@example.com".to_string(),
            nick: "원이".to_string(),
            auth: "MEMBER,ADMIN".to_string(),
            iat: 0,
            exp: 0,
        };

        let member = AuthenticatedMember::from_claims(&claims);
        assert_eq!(member.user_id, "member_one");
        assert!(member.has_role("MEMBER"));
        assert!(member.is_admin());
    }

    #[test]
    fn test_has_any_role() {
        let member = AuthenticatedMember {
            user_id: "member_one".to_string(),
            email: "one@example.com".to_string(),
            nick: "원이".to_string(),
            roles: vec!["MEMBER".to_string()],
        };

        assert!(member.has_any_role(&["ADMIN", "MEMBER"]));
        assert!(!member.has_any_role(&["ADMIN"]));
        assert!(!member.is_admin());
    }
}
