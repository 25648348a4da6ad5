//! JWT 토큰 관리 서비스 구현
//!
//! 액세스 토큰과 리프레시 토큰의 생성, 검증, 갱신을 담당합니다.
//! 두 토큰은 서로 다른 비밀 키로 서명되어 역할 간 교차 사용이 불가능합니다.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use singleton_macro::service;

use crate::{
    config::JwtConfig,
    domain::models::token::{KeyRole, TokenClaims, TokenInfo},
    errors::errors::AppError,
};

/// JWT 토큰 관리 서비스
///
/// HMAC-SHA256 서명을 사용합니다. 비밀 키는 base64로 인코딩된 환경
/// 변수에서 읽어 디코딩한 원문 바이트로 서명합니다.
#[service(name = "token")]
pub struct TokenService {
    // 외부 의존성 없음
}

impl TokenService {
    fn signing_key(role: KeyRole) -> Result<Vec<u8>, AppError> {
        let encoded = match role {
            KeyRole::Access => JwtConfig::access_secret(),
            KeyRole::Refresh => JwtConfig::refresh_secret(),
        };

        BASE64
            .decode(encoded.as_bytes())
            .map_err(|e| AppError::InternalError(format!("JWT 비밀 키 디코딩 실패: {}", e)))
    }

    fn encode_claims(&self, claims: &TokenClaims, role: KeyRole) -> Result<String, AppError> {
        let key = Self::signing_key(role)?;
        encode(&Header::default(), claims, &EncodingKey::from_secret(&key))
            .map_err(|e| AppError::InternalError(format!("JWT 토큰 생성 실패: {}", e)))
    }

    fn decode_claims(&self, token: &str, role: KeyRole) -> Result<TokenClaims, AppError> {
        let key = Self::signing_key(role)?;

        decode::<TokenClaims>(
            token,
            &DecodingKey::from_secret(&key),
            &Validation::default(),
        )
        .map(|data| data.claims)
        .map_err(|e| match e.kind() {
            jsonwebtoken::errors::ErrorKind::ExpiredSignature => AppError::TokenExpired,
            _ => AppError::TokenInvalid,
        })
    }

    /// 액세스/리프레시 토큰 쌍 생성
    ///
    /// 두 토큰은 같은 클레임 내용을 담지만 만료 시간과 서명 키가
    /// 다릅니다.
    pub fn create_token_info(
        &self,
        user_id: &str,
        email: &str,
        nick: &str,
        authorities: &str,
    ) -> Result<TokenInfo, AppError> {
        let now = Utc::now();
        let access_exp = now + Duration::minutes(JwtConfig::access_expire_minutes());
        let refresh_exp = now + Duration::minutes(JwtConfig::refresh_expire_minutes());

        let access_token = self.encode_claims(
            &TokenClaims {
                sub: user_id.to_string(),
                email: email.to_string(),
                nick: nick.to_string(),
                auth: authorities.to_string(),
                iat: now.timestamp(),
                exp: access_exp.timestamp(),
            },
            KeyRole::Access,
        )?;

        let refresh_token = self.encode_claims(
            &TokenClaims {
                sub: user_id.to_string(),
                email: email.to_string(),
                nick: nick.to_string(),
                auth: authorities.to_string(),
                iat: now.timestamp(),
                exp: refresh_exp.timestamp(),
            },
            KeyRole::Refresh,
        )?;

        Ok(TokenInfo::new(
            user_id.to_string(),
            access_token,
            refresh_token,
        ))
    }

    /// 액세스 토큰 검증 및 클레임 추출
    ///
    /// # Errors
    ///
    /// * `AppError::TokenExpired` - 만료된 토큰
    /// * `AppError::TokenInvalid` - 서명 불일치, 형식 오류, 리프레시 키로 서명된 토큰
    pub fn get_access_claims(&self, token: &str) -> Result<TokenClaims, AppError> {
        self.decode_claims(token, KeyRole::Access)
    }

    /// 리프레시 토큰 검증 및 클레임 추출
    pub fn get_refresh_claims(&self, token: &str) -> Result<TokenClaims, AppError> {
        self.decode_claims(token, KeyRole::Refresh)
    }

    /// 리프레시 토큰을 검증하고 새 토큰 쌍 발급
    ///
    /// 새 액세스 토큰은 전체 수명으로, 새 리프레시 토큰은 기존 만료
    /// 시각을 유지하되 남은 수명이 연장 기준 아래로 떨어졌을 때만 전체
    /// 수명으로 연장됩니다. 세션 저장소 처리는 호출자의 몫입니다.
    pub fn validate_refresh_and_create(&self, refresh_token: &str) -> Result<TokenInfo, AppError> {
        let claims = self.get_refresh_claims(refresh_token)?;

        let now = Utc::now();
        let refresh_ms = JwtConfig::refresh_expire_minutes() * 60 * 1000;
        let remain_ms = JwtConfig::remain_refresh_minutes() * 60 * 1000;
        let next_exp_ms = next_refresh_expiration(
            now.timestamp_millis(),
            claims.exp * 1000,
            refresh_ms,
            remain_ms,
        );

        let access_exp = now + Duration::minutes(JwtConfig::access_expire_minutes());

        let access_token = self.encode_claims(
            &TokenClaims {
                iat: now.timestamp(),
                exp: access_exp.timestamp(),
                ..claims.clone()
            },
            KeyRole::Access,
        )?;

        let new_refresh_token = self.encode_claims(
            &TokenClaims {
                iat: now.timestamp(),
                exp: next_exp_ms / 1000,
                ..claims.clone()
            },
            KeyRole::Refresh,
        )?;

        Ok(TokenInfo::new(claims.sub, access_token, new_refresh_token))
    }

    /// Authorization 헤더에서 Bearer 토큰 추출
    pub fn extract_bearer_token(&self, header: &str) -> Option<String> {
        header
            .strip_prefix("Bearer ")
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
    }
}

/// 리프레시 토큰 갱신 시의 다음 만료 시각 계산
///
/// 남은 수명이 `remain_ms`보다 크면 기존 만료 시각을 유지하고,
/// 그 이하면 전체 수명(`refresh_ms`)만큼 연장합니다. 매 갱신마다
/// 수명이 무한히 늘어나는 것을 막으면서도, 꾸준히 사용하는 기기는
/// 로그인을 유지하게 하는 정책입니다.
pub fn next_refresh_expiration(now_ms: i64, prev_exp_ms: i64, refresh_ms: i64, remain_ms: i64) -> i64 {
    if prev_exp_ms - now_ms > remain_ms {
        prev_exp_ms
    } else {
        now_ms + refresh_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> TokenService {
        TokenService {}
    }

    fn sample_claims(iat: i64, exp: i64) -> TokenClaims {
        TokenClaims {
            sub: "member_one".to_string(),
            email: "one@example.com".to_string(),
            nick: "원이".to_string(),
            auth: "MEMBER".to_string(),
            iat,
            exp,
        }
    }

    #[test]
    fn test_create_and_verify_pair() {
        let svc = service();
        let info = svc
            .create_token_info("member_one", "one@example.com", "원이", "MEMBER")
            .unwrap();

        assert_eq!(info.grant_type, "Bearer");

        let access = svc.get_access_claims(&info.access_token).unwrap();
        assert_eq!(access.sub, "member_one");
        assert_eq!(access.auth, "MEMBER");

        let refresh = svc.get_refresh_claims(&info.refresh_token).unwrap();
        assert_eq!(refresh.sub, "member_one");
        assert!(refresh.exp > access.exp);
    }

    #[test]
    fn test_cross_role_verification_fails() {
        let svc = service();
        let info = svc
            .create_token_info("member_one", "one@example.com", "원이", "MEMBER")
            .unwrap();

        // 액세스 토큰은 리프레시 검증 경로를 통과할 수 없다 (반대도 동일)
        assert!(matches!(
            svc.get_refresh_claims(&info.access_token),
            Err(AppError::TokenInvalid)
        ));
        assert!(matches!(
            svc.get_access_claims(&info.refresh_token),
            Err(AppError::TokenInvalid)
        ));
    }

    #[test]
    fn test_expired_token_detected() {
        let svc = service();
        // jsonwebtoken 기본 검증은 60초의 여유를 두므로 충분히 과거로 설정
        let now = Utc::now().timestamp();
        let claims = sample_claims(now - 7200, now - 7200 + 60);

        let token = svc.encode_claims(&claims, KeyRole::Access).unwrap();
        assert!(matches!(
            svc.get_access_claims(&token),
            Err(AppError::TokenExpired)
        ));
    }

    #[test]
    fn test_garbage_token_invalid() {
        let svc = service();
        assert!(matches!(
            svc.get_access_claims("not-a-jwt"),
            Err(AppError::TokenInvalid)
        ));
    }

    #[test]
    fn test_refresh_rotation_mints_new_pair() {
        let svc = service();
        let info = svc
            .create_token_info("member_one", "one@example.com", "원이", "MEMBER")
            .unwrap();

        let rotated = svc
            .validate_refresh_and_create(&info.refresh_token)
            .unwrap();

        assert_eq!(rotated.user_id, "member_one");
        assert!(svc.get_access_claims(&rotated.access_token).is_ok());
        assert!(svc.get_refresh_claims(&rotated.refresh_token).is_ok());
    }

    #[test]
    fn test_sliding_expiration_keeps_far_expiry() {
        let now = 1_000_000_000_000_i64;
        let refresh = 7 * 24 * 60 * 60 * 1000;
        let remain = 24 * 60 * 60 * 1000;

        // 남은 수명이 이틀이면 만료 시각 유지
        let prev_exp = now + 2 * 24 * 60 * 60 * 1000;
        assert_eq!(
            next_refresh_expiration(now, prev_exp, refresh, remain),
            prev_exp
        );
    }

    #[test]
    fn test_sliding_expiration_extends_near_expiry() {
        let now = 1_000_000_000_000_i64;
        let refresh = 7 * 24 * 60 * 60 * 1000;
        let remain = 24 * 60 * 60 * 1000;

        // 남은 수명이 한 시간이면 전체 수명으로 연장
        let prev_exp = now + 60 * 60 * 1000;
        assert_eq!(
            next_refresh_expiration(now, prev_exp, refresh, remain),
            now + refresh
        );
    }

    #[test]
    fn test_extract_bearer_token() {
        let svc = service();
        assert_eq!(
            svc.extract_bearer_token("Bearer abc.def.ghi"),
            Some("abc.def.ghi".to_string())
        );
        assert_eq!(svc.extract_bearer_token("Basic abc"), None);
        assert_eq!(svc.extract_bearer_token("Bearer "), None);
    }
}
