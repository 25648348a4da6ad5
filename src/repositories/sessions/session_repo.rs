//! # 세션 리포지토리 구현
//!
//! 기기별 리프레시 토큰 세션을 Redis에서 관리합니다.
//!
//! ## 키 구조
//!
//! `refreshToken:{userId}:{refreshToken}` 형식으로 회원당 여러 키를
//! 허용하여 기기(로그인)마다 독립적인 세션을 유지합니다.
//! TTL은 리프레시 토큰의 남은 수명과 동일하게 설정되어,
//! 토큰이 만료되면 세션도 함께 사라집니다.

use std::sync::Arc;

use singleton_macro::repository;

use crate::{
    caching::redis::RedisClient,
    core::registry::Repository,
    domain::models::session::RefreshTokenInfo,
    errors::errors::AppError,
};

/// 한 회원이 세션 목록 조회로 받을 수 있는 최대 항목 수
const MAX_SESSION_LIST: usize = 100;

/// 리프레시 토큰 세션 리포지토리
#[repository(name = "session", collection = "sessions")]
pub struct SessionRepository {
    redis: Arc<RedisClient>,
}

impl SessionRepository {
    fn user_pattern(user_id: &str) -> String {
        format!("refreshToken:{}:*", user_id)
    }

    /// 세션 저장
    ///
    /// TTL은 호출자가 리프레시 토큰의 남은 수명으로 계산해서 넘깁니다.
    pub async fn save(&self, info: &RefreshTokenInfo, ttl_seconds: u64) -> Result<(), AppError> {
        self.redis
            .set_with_expiry(&info.redis_key(), info, ttl_seconds)
            .await
            .map_err(|e| AppError::RedisError(e.to_string()))
    }

    /// 세션을 원자적으로 회수 (단일 사용 보장)
    ///
    /// GETDEL로 조회와 삭제를 한 번에 수행하므로, 같은 토큰으로 동시에
    /// 갱신을 시도해도 최대 한 요청만 세션을 가져갈 수 있습니다.
    /// 없는 키와 이미 회수된 키는 구별되지 않습니다.
    pub async fn take_by_refresh_token(
        &self,
        user_id: &str,
        refresh_token: &str,
    ) -> Result<Option<RefreshTokenInfo>, AppError> {
        let key = RefreshTokenInfo::key_of(user_id, refresh_token);
        self.redis
            .get_del::<RefreshTokenInfo>(&key)
            .await
            .map_err(|e| AppError::RedisError(e.to_string()))
    }

    /// 회원의 전체 세션 목록 조회 (최신 로그인 순)
    pub async fn list_by_user(&self, user_id: &str) -> Result<Vec<RefreshTokenInfo>, AppError> {
        let keys = self
            .redis
            .keys(&Self::user_pattern(user_id))
            .await
            .map_err(|e| AppError::RedisError(e.to_string()))?;

        let mut sessions = Vec::with_capacity(keys.len());
        for key in keys {
            // 조회 도중 만료된 키는 건너뛴다
            if let Ok(Some(info)) = self.redis.get::<RefreshTokenInfo>(&key).await {
                sessions.push(info);
            }
        }

        Ok(order_sessions(sessions))
    }

    /// 특정 세션 삭제
    pub async fn delete(&self, user_id: &str, refresh_token: &str) -> Result<(), AppError> {
        let key = RefreshTokenInfo::key_of(user_id, refresh_token);
        self.redis
            .del(&key)
            .await
            .map_err(|e| AppError::RedisError(e.to_string()))
    }

    /// secret으로 특정 기기의 세션 삭제
    ///
    /// 목록 조회 응답의 secret만으로 해당 기기를 로그아웃시킵니다.
    /// 토큰 원문을 클라이언트에 노출하지 않기 위한 우회 식별자입니다.
    pub async fn delete_by_secret(&self, user_id: &str, secret: &str) -> Result<bool, AppError> {
        let sessions = self.list_by_user(user_id).await?;

        for info in sessions {
            if info.secret == secret {
                self.delete(user_id, &info.refresh_token).await?;
                return Ok(true);
            }
        }

        Ok(false)
    }

    /// 회원의 모든 세션 삭제 (전체 로그아웃)
    ///
    /// 비밀번호 변경, 재설정, 탈퇴 시에도 호출됩니다.
    pub async fn delete_all_for_user(&self, user_id: &str) -> Result<usize, AppError> {
        let keys = self
            .redis
            .keys(&Self::user_pattern(user_id))
            .await
            .map_err(|e| AppError::RedisError(e.to_string()))?;

        let count = keys.len();
        self.redis
            .del_multiple(&keys)
            .await
            .map_err(|e| AppError::RedisError(e.to_string()))?;

        Ok(count)
    }
}

/// 목록 응답 정렬 및 상한 적용 (최신 로그인 순, 최대 100개)
fn order_sessions(mut sessions: Vec<RefreshTokenInfo>) -> Vec<RefreshTokenInfo> {
    sessions.sort_by(|a, b| b.date.cmp(&a.date));
    sessions.truncate(MAX_SESSION_LIST);
    sessions
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session_at(date: &str) -> RefreshTokenInfo {
        RefreshTokenInfo {
            user_id: "member_one".to_string(),
            refresh_token: format!("token-{}", date),
            header: "Mozilla/5.0".to_string(),
            browser: "Chrome".to_string(),
            os: "macOS".to_string(),
            ip_address: "203.0.113.7".to_string(),
            secret: "abcDEF123456789".to_string(),
            date: date.to_string(),
        }
    }

    #[test]
    fn test_order_sessions_newest_first() {
        let sessions = vec![
            session_at("2025-01-14 09:00:00"),
            session_at("2025-01-16 22:15:00"),
            session_at("2025-01-15 10:30:00"),
        ];

        let ordered = order_sessions(sessions);

        assert_eq!(ordered[0].date, "2025-01-16 22:15:00");
        assert_eq!(ordered[1].date, "2025-01-15 10:30:00");
        assert_eq!(ordered[2].date, "2025-01-14 09:00:00");
    }

    #[test]
    fn test_order_sessions_caps_result_size() {
        let sessions: Vec<RefreshTokenInfo> = (0..MAX_SESSION_LIST + 30)
            .map(|i| session_at(&format!("2025-01-15 10:{:02}:{:02}", i / 60, i % 60)))
            .collect();

        let ordered = order_sessions(sessions);

        assert_eq!(ordered.len(), MAX_SESSION_LIST);
    }

    #[test]
    fn test_order_sessions_cap_keeps_newest() {
        let mut sessions: Vec<RefreshTokenInfo> = (0..MAX_SESSION_LIST)
            .map(|i| session_at(&format!("2025-01-10 00:{:02}:{:02}", i / 60, i % 60)))
            .collect();
        sessions.push(session_at("2025-02-01 08:00:00"));

        let ordered = order_sessions(sessions);

        assert_eq!(ordered.len(), MAX_SESSION_LIST);
        assert_eq!(ordered[0].date, "2025-02-01 08:00:00");
        // 상한에서 잘려 나가는 것은 가장 오래된 세션이다
        assert!(ordered.iter().all(|s| s.date != "2025-01-10 00:00:00"));
    }
}
