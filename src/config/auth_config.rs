//! 인증 관련 설정 모듈
//!
//! JWT 토큰, 로그인/메일 시도 제한, 이메일 인증 정책 설정을 관리합니다.
//! 모든 값은 환경 변수에서 읽으며, 설정되지 않은 경우 개발용 기본값을 사용합니다.
//!
//! ## 필수 환경 변수 (프로덕션)
//!
//! ```bash
//! export JWT_ACCESS_SECRET="base64-encoded-256bit-key"
//! export JWT_REFRESH_SECRET="base64-encoded-256bit-key"  # 액세스 키와 달라야 함
//! export JWT_ACCESS_EXPIRE_MINUTES="30"
//! export JWT_REFRESH_EXPIRE_MINUTES="10080"
//! export JWT_REMAIN_REFRESH_MINUTES="1440"
//! ```

use std::env;

/// JSON Web Token (JWT) 관련 설정을 관리하는 구조체
///
/// 액세스 토큰과 리프레시 토큰은 서로 다른 서명 키를 사용합니다.
/// 한 역할의 토큰이 다른 역할의 검증 경로를 통과할 수 없도록 하는
/// 핵심 장치이므로, 두 키는 반드시 독립적으로 생성해야 합니다.
///
/// # 키 생성 예제
///
/// ```bash
/// openssl rand -base64 32
/// ```
pub struct JwtConfig;

impl JwtConfig {
    /// 액세스 토큰 서명용 비밀키(base64 인코딩)를 반환합니다.
    ///
    /// 환경 변수가 설정되지 않은 경우 개발용 기본키를 사용하며
    /// 경고 로그가 출력됩니다.
    pub fn access_secret() -> String {
        env::var("JWT_ACCESS_SECRET").unwrap_or_else(|_| {
            log::warn!("JWT_ACCESS_SECRET not set, using default (not secure for production!)");
            "bWVtYmVyLXNlcnZpY2UtYWNjZXNzLXNlY3JldC1kZXYtb25seS0wMTIzNDU2Nzg5".to_string()
        })
    }

    /// 리프레시 토큰 서명용 비밀키(base64 인코딩)를 반환합니다.
    pub fn refresh_secret() -> String {
        env::var("JWT_REFRESH_SECRET").unwrap_or_else(|_| {
            log::warn!("JWT_REFRESH_SECRET not set, using default (not secure for production!)");
            "bWVtYmVyLXNlcnZpY2UtcmVmcmVzaC1zZWNyZXQtZGV2LW9ubHktOTg3NjU0MzIxMA==".to_string()
        })
    }

    /// 액세스 토큰 만료 시간을 분 단위로 반환합니다. 기본값: 30분
    pub fn access_expire_minutes() -> i64 {
        env::var("JWT_ACCESS_EXPIRE_MINUTES")
            .unwrap_or_else(|_| "30".to_string())
            .parse()
            .unwrap_or(30)
    }

    /// 리프레시 토큰 만료 시간을 분 단위로 반환합니다. 기본값: 7일 (10080분)
    pub fn refresh_expire_minutes() -> i64 {
        env::var("JWT_REFRESH_EXPIRE_MINUTES")
            .unwrap_or_else(|_| "10080".to_string())
            .parse()
            .unwrap_or(10080)
    }

    /// 리프레시 토큰 만료 연장 기준 시간을 분 단위로 반환합니다. 기본값: 1일
    ///
    /// 토큰 재발급 시 남은 수명이 이 값보다 크면 기존 만료 시각을
    /// 유지하고, 그 이하로 떨어졌을 때만 전체 수명만큼 연장합니다.
    pub fn remain_refresh_minutes() -> i64 {
        env::var("JWT_REMAIN_REFRESH_MINUTES")
            .unwrap_or_else(|_| "1440".to_string())
            .parse()
            .unwrap_or(1440)
    }
}

/// 로그인/메일 발송 시도 제한 설정
///
/// 카운터의 윈도우는 60초 고정이며, 한도만 환경 변수로 조정합니다.
pub struct ThrottleConfig;

impl ThrottleConfig {
    /// 윈도우 길이 (초)
    pub const WINDOW_SECONDS: u64 = 60;

    /// 아이디+IP당 분당 로그인 시도 한도. 기본값: 15
    pub fn login_limit() -> u32 {
        env::var("THROTTLE_LOGIN_LIMIT")
            .unwrap_or_else(|_| "15".to_string())
            .parse()
            .unwrap_or(15)
    }

    /// IP당 분당 인증 메일 발송 한도. 기본값: 10
    pub fn email_send_limit() -> u32 {
        env::var("THROTTLE_EMAIL_SEND_LIMIT")
            .unwrap_or_else(|_| "10".to_string())
            .parse()
            .unwrap_or(10)
    }
}

/// 소셜 로그인 연동 설정
///
/// 교환 토큰 발급 API는 OAuth 콜백 처리기 전용이며, 이 키를 아는
/// 내부 호출자만 사용할 수 있습니다.
pub struct SocialConfig;

impl SocialConfig {
    /// 교환 토큰 발급 API의 내부 호출 키
    pub fn callback_key() -> String {
        env::var("SOCIAL_CALLBACK_KEY").unwrap_or_else(|_| {
            log::warn!("SOCIAL_CALLBACK_KEY not set, using dev default (dev only)");
            "dev-social-callback-key".to_string()
        })
    }
}

/// 이메일 인증 정책 설정
pub struct VerificationConfig;

impl VerificationConfig {
    /// 인증번호 확인 최대 시도 횟수
    pub const MAX_ATTEMPTS: u32 = 10;

    /// 발송 직후 인증 레코드 유효 시간 (분). 기본값: 30분
    pub fn send_ttl_minutes() -> u64 {
        env::var("VERIFICATION_SEND_TTL_MINUTES")
            .unwrap_or_else(|_| "30".to_string())
            .parse()
            .unwrap_or(30)
    }

    /// 확인 시도 이후 인증 레코드 유효 시간 (분). 기본값: 5분
    ///
    /// 한 번이라도 확인을 시도한 레코드는 짧은 수명으로 다시 저장하여
    /// 이후 가입/재설정 완료까지의 창을 좁힙니다.
    pub fn recheck_ttl_minutes() -> u64 {
        env::var("VERIFICATION_RECHECK_TTL_MINUTES")
            .unwrap_or_else(|_| "5".to_string())
            .parse()
            .unwrap_or(5)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jwt_expiration_defaults() {
        if env::var("JWT_ACCESS_EXPIRE_MINUTES").is_err() {
            assert_eq!(JwtConfig::access_expire_minutes(), 30);
        }
        if env::var("JWT_REFRESH_EXPIRE_MINUTES").is_err() {
            assert_eq!(JwtConfig::refresh_expire_minutes(), 10080);
        }
        if env::var("JWT_REMAIN_REFRESH_MINUTES").is_err() {
            assert_eq!(JwtConfig::remain_refresh_minutes(), 1440);
        }
    }

    #[test]
    fn test_default_secrets_differ_by_role() {
        if env::var("JWT_ACCESS_SECRET").is_err() && env::var("JWT_REFRESH_SECRET").is_err() {
            assert_ne!(JwtConfig::access_secret(), JwtConfig::refresh_secret());
        }
    }

    #[test]
    fn test_throttle_defaults() {
        if env::var("THROTTLE_LOGIN_LIMIT").is_err() {
            assert_eq!(ThrottleConfig::login_limit(), 15);
        }
        if env::var("THROTTLE_EMAIL_SEND_LIMIT").is_err() {
            assert_eq!(ThrottleConfig::email_send_limit(), 10);
        }
    }

    #[test]
    fn test_verification_defaults() {
        assert_eq!(VerificationConfig::MAX_ATTEMPTS, 10);
        if env::var("VERIFICATION_SEND_TTL_MINUTES").is_err() {
            assert_eq!(VerificationConfig::send_ttl_minutes(), 30);
        }
        if env::var("VERIFICATION_RECHECK_TTL_MINUTES").is_err() {
            assert_eq!(VerificationConfig::recheck_ttl_minutes(), 5);
        }
    }
}
