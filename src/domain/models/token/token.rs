//! JWT 인증 토큰 구조체 및 페어링 된 세트
//!
//! RFC 7519 JWT 표준 클레임과 용도별 키 역할, 발급 결과를 표현합니다.
use serde::{Deserialize, Serialize};

/// 토큰 서명 키의 역할 구분
///
/// 액세스 토큰과 리프레시 토큰은 서로 다른 비밀 키로 서명합니다.
/// 한쪽 키가 유출되어도 다른 쪽 토큰은 위조할 수 없습니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyRole {
    Access,
    Refresh,
}

/// JWT 토큰의 클레임(Payload) 구조체
///
/// RFC 7519 JWT 표준의 클레임과 애플리케이션 특화 클레임을 포함합니다.
/// 개인정보 보호를 위해 최소한의 정보만 포함합니다.
///
/// ## 클레임 구성
///
/// - `sub`: 토큰의 주체 (회원 아이디)
/// - `email`: 회원 이메일
/// - `nick`: 회원 닉네임
/// - `auth`: 권한 목록 (쉼표 구분)
/// - `iat`: 토큰 발급 시간 (Unix timestamp)
/// - `exp`: 토큰 만료 시간 (Unix timestamp)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    /// 토큰의 주체 (회원 아이디)
    pub sub: String,
    /// 회원 이메일
    pub email: String,
    /// 회원 닉네임
    pub nick: String,
    /// 쉼표로 구분된 권한 목록
    pub auth: String,
    /// 토큰 발급 시간 (Unix timestamp)
    pub iat: i64,
    /// 토큰 만료 시간 (Unix timestamp)
    pub exp: i64,
}

impl TokenClaims {
    /// 권한 목록을 Vec으로 분해
    pub fn roles(&self) -> Vec<String> {
        self.auth
            .split(',')
            .filter(|s| !s.is_empty())
            .map(|s| s.to_string())
            .collect()
    }
}

/// 토큰 발급 결과 구조체
///
/// 로그인과 토큰 갱신 응답으로 클라이언트에게 전달되는 토큰 집합입니다.
/// OAuth 2.0 표준의 토큰 응답 형식을 따릅니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenInfo {
    /// 회원 아이디
    pub user_id: String,
    /// 토큰 유형 (항상 "Bearer")
    pub grant_type: String,
    /// 액세스 토큰 (API 접근용 단기 토큰)
    pub access_token: String,
    /// 리프레시 토큰 (토큰 갱신용 장기 토큰)
    pub refresh_token: String,
}

impl TokenInfo {
    pub fn new(user_id: String, access_token: String, refresh_token: String) -> Self {
        Self {
            user_id,
            grant_type: "Bearer".to_string(),
            access_token,
            refresh_token,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_claims_roles_split() {
        let claims = TokenClaims {
            sub: "member_one".to_string(),
            email: "one@example.com".to_string(),
            nick: "원이".to_string(),
            auth: "MEMBER,ADMIN".to_string(),
            iat: 0,
            exp: 0,
        };

        assert_eq!(claims.roles(), vec!["MEMBER", "ADMIN"]);
    }

    #[test]
    fn test_token_info_grant_type() {
        let info = TokenInfo::new("member_one".to_string(), "a".to_string(), "r".to_string());
        assert_eq!(info.grant_type, "Bearer");
    }
}
