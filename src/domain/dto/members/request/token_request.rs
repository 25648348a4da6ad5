//! 토큰 및 세션 관리 요청 DTO

use serde::{Deserialize, Serialize};
use validator::Validate;

/// 토큰 갱신 요청
///
/// 리프레시 토큰은 본문으로 전달합니다. 갱신에 성공하면 기존 토큰은
/// 즉시 무효화되고 새 토큰 쌍이 발급됩니다.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct TokenRefreshRequest {
    #[validate(length(min = 1, message = "리프레시 토큰이 필요합니다"))]
    pub refresh_token: String,
}

/// 특정 기기 세션 폐기 요청
///
/// 세션 목록 조회에서 받은 secret으로 해당 기기만 로그아웃시킵니다.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SecretDeleteRequest {
    #[validate(length(min = 1, message = "세션 식별값이 필요합니다"))]
    pub secret: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_token_rejected() {
        let req = TokenRefreshRequest {
            refresh_token: String::new(),
        };
        assert!(req.validate().is_err());
    }
}
