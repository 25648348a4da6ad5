//! # 시도 횟수 제한 리포지토리 구현
//!
//! 로그인과 인증 메일 발송의 남용을 막는 카운터를 Redis에서 관리합니다.
//!
//! ## 동작 방식
//!
//! 키마다 60초 윈도우의 정수 카운터를 유지합니다. TTL은 쓰기마다 다시
//! 적용되므로, 시도가 계속되는 동안에는 윈도우가 밀리고 시도가 멈추면
//! 60초 뒤 카운터가 사라집니다. 한도에 도달한 뒤의 시도는 카운터를
//! 더 올리지 않고 거부만 합니다.

use std::sync::Arc;

use singleton_macro::repository;

use crate::{
    caching::redis::RedisClient,
    config::ThrottleConfig,
    core::registry::Repository,
    errors::errors::AppError,
};

/// 로그인 시도 제한 리포지토리
///
/// 키: `loginAttempt:{userId}:{ip}` — 같은 IP에서 같은 계정을 향한
/// 비밀번호 대입을 막되, 다른 네트워크의 정상 사용자는 막지 않습니다.
#[repository(name = "loginattempt", collection = "login_attempts")]
pub struct LoginAttemptRepository {
    redis: Arc<RedisClient>,
}

impl LoginAttemptRepository {
    fn key(user_id: &str, ip: &str) -> String {
        format!("loginAttempt:{}:{}", user_id, ip)
    }

    /// 시도를 기록하고 한도 이내인지 반환
    ///
    /// 실패/성공 여부와 무관하게 모든 로그인 시도 전에 호출합니다.
    pub async fn check_and_increment(
        &self,
        user_id: &str,
        ip: &str,
        limit: i64,
    ) -> Result<bool, AppError> {
        let key = Self::key(user_id, ip);
        check_counter(&self.redis, &key, limit).await
    }
}

/// 용도별 IP 시도 제한 리포지토리
///
/// 키: `{prefix}:{ip}` — 인증 메일 발송처럼 계정과 무관하게 IP 단위로
/// 제한해야 하는 동작에 사용합니다.
#[repository(name = "ipaddressattempt", collection = "ip_attempts")]
pub struct IpAddressAttemptRepository {
    redis: Arc<RedisClient>,
}

impl IpAddressAttemptRepository {
    /// 시도를 기록하고 한도 이내인지 반환
    pub async fn check_and_increment(
        &self,
        prefix: &str,
        ip: &str,
        limit: i64,
    ) -> Result<bool, AppError> {
        let key = format!("{}:{}", prefix, ip);
        check_counter(&self.redis, &key, limit).await
    }
}

/// 공통 카운터 검사
///
/// 한도 도달 이후에는 증가 없이 거부하여 카운터가 한없이 자라지 않습니다.
/// Redis 오류는 그대로 전파되어 해당 시도는 통과되지 않습니다.
async fn check_counter(redis: &RedisClient, key: &str, limit: i64) -> Result<bool, AppError> {
    let current: Option<i64> = redis
        .get(key)
        .await
        .map_err(|e| AppError::RedisError(e.to_string()))?;

    if at_limit(current, limit) {
        return Ok(false);
    }

    let count = redis
        .incr_with_expiry(key, ThrottleConfig::WINDOW_SECONDS)
        .await
        .map_err(|e| AppError::RedisError(e.to_string()))?;

    Ok(count <= limit)
}

/// 증가 전 거부 판정
fn at_limit(current: Option<i64>, limit: i64) -> bool {
    current.unwrap_or(0) >= limit
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_under_limit_allows() {
        assert!(!at_limit(None, 15));
        assert!(!at_limit(Some(0), 15));
        assert!(!at_limit(Some(14), 15));
    }

    #[test]
    fn test_at_and_over_limit_rejects() {
        assert!(at_limit(Some(15), 15));
        assert!(at_limit(Some(16), 15));
    }

    #[test]
    fn test_zero_limit_blocks_everything() {
        assert!(at_limit(None, 0));
        assert!(at_limit(Some(1), 0));
    }
}
