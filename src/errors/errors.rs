//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! 회원/인증 백엔드를 위한 통합 에러 처리 시스템입니다.
//! `thiserror`와 `actix_web::ResponseError`를 사용하여 타입 안전하고
//! 일관된 에러 처리를 제공합니다.
//!
//! 토큰/세션 수명주기에서 발생하는 에러는 모두 의미론적 거부이며,
//! 재시도 대상이 아닙니다. 클라이언트는 상태 코드와 메시지로
//! 원인을 구분할 수 있습니다.

use thiserror::Error;

/// 애플리케이션 전역 에러 타입
///
/// 회원 서비스에서 발생할 수 있는 모든 종류의 에러를 포괄하는 열거형입니다.
/// 자동으로 HTTP 응답으로 변환되어 클라이언트에게 전달됩니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 로그인 정보 불일치 (400 Bad Request)
    ///
    /// 존재하지 않는 아이디와 잘못된 비밀번호를 구분하지 않습니다.
    /// 계정 존재 여부가 응답으로 새어나가지 않도록 동일한 에러를 사용합니다.
    #[error("아이디 또는 비밀번호가 일치하지 않습니다")]
    BadCredentials,

    /// 시도 횟수 초과 (429 Too Many Requests)
    ///
    /// 로그인/이메일 발송/인증번호 확인의 윈도우별 한도를 넘었습니다.
    #[error("요청 횟수를 초과했습니다. 잠시 후 다시 시도해주세요")]
    TooManyAttempts,

    /// 리프레시 세션 없음 (401 Unauthorized)
    ///
    /// 발급된 적 없는 토큰과 이미 사용(회수)된 토큰을 구분하지 않습니다.
    #[error("세션을 찾을 수 없습니다. 다시 로그인해주세요")]
    SessionNotFound,

    /// 유효하지 않은 토큰 (403 Forbidden) - 형식 오류, 서명 불일치
    #[error("유효하지 않은 토큰입니다")]
    TokenInvalid,

    /// 만료된 토큰 (403 Forbidden)
    #[error("만료된 토큰입니다")]
    TokenExpired,

    /// 이메일 인증 레코드 만료/없음 (400 Bad Request)
    #[error("인증 정보가 만료되었습니다. 인증 메일을 다시 요청해주세요")]
    VerificationExpired,

    /// 이미 완료된 이메일 인증 (409 Conflict)
    #[error("이미 완료된 인증입니다")]
    AlreadyVerified,

    /// 메일 발송 실패 (502 Bad Gateway)
    ///
    /// 외부 메일 제공자 오류. 내부 상세는 로그에만 남깁니다.
    #[error("메일 발송에 실패했습니다")]
    DeliveryFailed,

    /// 충돌/중복 에러 (409 Conflict) - 아이디/닉네임/이메일 중복 등
    #[error("Conflict error: {0}")]
    ConflictError(String),

    /// 입력값 검증 에러 (400 Bad Request)
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 리소스 찾을 수 없음 에러 (404 Not Found)
    #[error("Not found: {0}")]
    NotFound(String),

    /// 권한 부족 에러 (403 Forbidden)
    #[error("Authorization error: {0}")]
    AuthorizationError(String),

    /// 데이터베이스 관련 에러 (500 Internal Server Error)
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// Redis 캐시 관련 에러 (500 Internal Server Error)
    #[error("Redis error: {0}")]
    RedisError(String),

    /// 내부 서버 에러 (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl actix_web::ResponseError for AppError {
    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 각 에러 타입을 적절한 HTTP 상태 코드와 JSON 응답으로 변환합니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        use actix_web::http::StatusCode;

        let status = match self {
            AppError::BadCredentials => StatusCode::BAD_REQUEST,
            AppError::TooManyAttempts => StatusCode::TOO_MANY_REQUESTS,
            AppError::SessionNotFound => StatusCode::UNAUTHORIZED,
            AppError::TokenInvalid => StatusCode::FORBIDDEN,
            AppError::TokenExpired => StatusCode::FORBIDDEN,
            AppError::VerificationExpired => StatusCode::BAD_REQUEST,
            AppError::AlreadyVerified => StatusCode::CONFLICT,
            AppError::DeliveryFailed => StatusCode::BAD_GATEWAY,
            AppError::ConflictError(_) => StatusCode::CONFLICT,
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::AuthorizationError(_) => StatusCode::FORBIDDEN,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        actix_web::HttpResponse::build(status)
            .json(serde_json::json!({
                "error": self.to_string()
            }))
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;

    /// 클로저를 사용하여 지연 평가된 컨텍스트를 제공합니다.
    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", f(), e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::ResponseError;

    #[test]
    fn test_bad_credentials_response() {
        let error = AppError::BadCredentials;
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_too_many_attempts_response() {
        let error = AppError::TooManyAttempts;
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::TOO_MANY_REQUESTS);
    }

    #[test]
    fn test_session_not_found_response() {
        let error = AppError::SessionNotFound;
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_token_errors_are_forbidden() {
        assert_eq!(
            AppError::TokenInvalid.error_response().status(),
            actix_web::http::StatusCode::FORBIDDEN
        );
        assert_eq!(
            AppError::TokenExpired.error_response().status(),
            actix_web::http::StatusCode::FORBIDDEN
        );
    }

    #[test]
    fn test_verification_error_responses() {
        assert_eq!(
            AppError::VerificationExpired.error_response().status(),
            actix_web::http::StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::AlreadyVerified.error_response().status(),
            actix_web::http::StatusCode::CONFLICT
        );
    }

    #[test]
    fn test_delivery_failed_response() {
        let error = AppError::DeliveryFailed;
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn test_conflict_error_response() {
        let error = AppError::ConflictError("duplicate user id".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::CONFLICT);
    }

    #[test]
    fn test_internal_error_response() {
        let error = AppError::InternalError("Something went wrong".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_error_context_trait() {
        let result: Result<(), &str> = Err("original error");
        let app_result = result.context("Additional context");

        assert!(app_result.is_err());
        if let Err(AppError::InternalError(msg)) = app_result {
            assert!(msg.contains("Additional context"));
            assert!(msg.contains("original error"));
        } else {
            panic!("Expected InternalError");
        }
    }
}
