//! 리프레시 토큰 세션 모델
//!
//! 기기(로그인 단위)별로 Redis에 저장되는 세션 정보와
//! 목록 조회용 응답 모델을 정의합니다.

use serde::{Deserialize, Serialize};

/// 세션별 기기 식별 비밀값의 길이
pub const SESSION_SECRET_LENGTH: usize = 15;

/// Redis에 저장되는 리프레시 토큰 세션 정보
///
/// 키는 `refreshToken:{userId}:{refreshToken}` 형식이며,
/// TTL은 리프레시 토큰의 남은 수명과 동일하게 설정됩니다.
///
/// `secret`은 로그인 시 생성되는 무작위 문자열로, 리프레시 토큰 자체를
/// 노출하지 않고 특정 기기의 세션을 골라 끊을 수 있게 합니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshTokenInfo {
    /// 회원 아이디
    pub user_id: String,
    /// 발급된 리프레시 토큰
    pub refresh_token: String,
    /// User-Agent 헤더 원문
    pub header: String,
    /// 파싱된 브라우저 이름
    pub browser: String,
    /// 파싱된 운영체제 이름
    pub os: String,
    /// 로그인 요청 IP
    pub ip_address: String,
    /// 기기 식별용 비밀값 (세션 단위 폐기에 사용)
    pub secret: String,
    /// 로그인 시각 (%Y-%m-%d %H:%M:%S)
    pub date: String,
}

impl RefreshTokenInfo {
    /// Redis 저장 키 생성
    pub fn redis_key(&self) -> String {
        Self::key_of(&self.user_id, &self.refresh_token)
    }

    pub fn key_of(user_id: &str, refresh_token: &str) -> String {
        format!("refreshToken:{}:{}", user_id, refresh_token)
    }

    /// 토큰 값만 바꾼 사본을 만듭니다. 토큰 갱신 시 기기 정보와 secret은
    /// 기존 세션의 것을 그대로 이어받습니다.
    pub fn with_rotated_token(&self, refresh_token: String) -> Self {
        Self {
            refresh_token,
            ..self.clone()
        }
    }
}

/// 로그인 기기 목록 조회 응답의 한 항목
///
/// 리프레시 토큰 원문은 절대 내보내지 않습니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionResponse {
    pub browser: String,
    pub os: String,
    pub ip_address: String,
    pub secret: String,
    pub date: String,
    /// 요청한 기기 자신의 세션인지 여부
    pub is_current: bool,
}

impl SessionResponse {
    pub fn from_info(info: &RefreshTokenInfo, current_token: &str) -> Self {
        Self {
            browser: info.browser.clone(),
            os: info.os.clone(),
            ip_address: info.ip_address.clone(),
            secret: info.secret.clone(),
            date: info.date.clone(),
            is_current: info.refresh_token == current_token,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_info() -> RefreshTokenInfo {
        RefreshTokenInfo {
            user_id: "member_one".to_string(),
            refresh_token: "token-abc".to_string(),
            header: "Mozilla/5.0".to_string(),
            browser: "Chrome".to_string(),
            os: "macOS".to_string(),
            ip_address: "203.0.113.7".to_string(),
            secret: "abcDEF123456789".to_string(),
            date: "2025-01-15 10:30:00".to_string(),
        }
    }

    #[test]
    fn test_redis_key_format() {
        let info = sample_info();
        assert_eq!(info.redis_key(), "refreshToken:member_one:token-abc");
    }

    #[test]
    fn test_rotated_token_keeps_device_info() {
        let info = sample_info();
        let rotated = info.with_rotated_token("token-def".to_string());

        assert_eq!(rotated.refresh_token, "token-def");
        assert_eq!(rotated.secret, info.secret);
        assert_eq!(rotated.browser, info.browser);
        assert_eq!(rotated.date, info.date);
    }

    #[test]
    fn test_session_response_marks_current() {
        let info = sample_info();

        let current = SessionResponse::from_info(&info, "token-abc");
        assert!(current.is_current);

        let other = SessionResponse::from_info(&info, "token-zzz");
        assert!(!other.is_current);
    }

    #[test]
    fn test_session_response_hides_token() {
        let info = sample_info();
        let json = serde_json::to_value(SessionResponse::from_info(&info, "token-abc")).unwrap();

        assert!(json.get("refresh_token").is_none());
        assert!(json.get("header").is_none());
    }
}
