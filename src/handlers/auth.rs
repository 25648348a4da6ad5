//! Authentication HTTP Handlers
//!
//! 로그인과 토큰/세션 수명주기 관련 HTTP 엔드포인트를 처리하는 핸들러 함수들입니다.
//! 액세스/리프레시 토큰 쌍의 발급, 회전, 기기별 세션 관리를 담당합니다.
//!
//! # Endpoints
//!
//! - **로그인**: 아이디/비밀번호 방식 (`POST /api/member/login`)
//! - **소셜 로그인**: 1회용 소셜 토큰 교환 (`POST /api/member/login/social`)
//! - **소셜 토큰 발급**: OAuth 콜백 처리기 전용 (`POST /api/member/login/social/issue`)
//! - **토큰 회전**: 리프레시 토큰으로 새 쌍 발급 (`POST /api/member/token/refresh/issue`)
//! - **세션 관리**: 기기 목록/개별 삭제/전체 로그아웃 (`/api/member/token/refresh/*`)
use actix_web::{get, post, web, HttpRequest, HttpResponse};
use validator::Validate;

use crate::config::SocialConfig;
use crate::domain::dto::common::BaseResponse;
use crate::domain::dto::members::request::{
    LoginRequest, SecretDeleteRequest, SocialIssueRequest, SocialLoginRequest,
    TokenRefreshRequest,
};
use crate::domain::dto::members::response::SocialTokenResponse;
use crate::domain::models::auth::AuthenticatedMember;
use crate::errors::errors::AppError;
use crate::services::auth::AuthService;
use crate::utils::browser_info::{client_ip, DeviceInfo};

/// 로그인 핸들러
///
/// 아이디와 비밀번호로 인증하고 토큰 쌍을 발급합니다.
/// 요청 기기 정보(브라우저, OS, IP)가 함께 세션에 기록됩니다.
///
/// # Endpoint
/// `POST /api/member/login`
#[post("/login")]
pub async fn login(
    req: HttpRequest,
    payload: web::Json<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    // 유효성 검사
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let device = DeviceInfo::from_request(&req);
    log::info!("로그인 시도 - 아이디: {}, IP: {}", payload.user_id, device.ip_address);

    let token_info = AuthService::instance().login(&payload, &device).await?;

    Ok(HttpResponse::Ok().json(BaseResponse::ok(token_info)))
}

/// 소셜 로그인 핸들러
///
/// OAuth 콜백에서 발급된 1회용 소셜 토큰을 토큰 쌍으로 교환합니다.
/// 소셜 토큰은 조회와 동시에 삭제되어 재사용할 수 없습니다.
///
/// # Endpoint
/// `POST /api/member/login/social`
#[post("/login/social")]
pub async fn social_login(
    req: HttpRequest,
    payload: web::Json<SocialLoginRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let device = DeviceInfo::from_request(&req);
    let token_info = AuthService::instance()
        .login_for_social(&payload, &device)
        .await?;

    Ok(HttpResponse::Ok().json(BaseResponse::ok(token_info)))
}

/// 소셜 교환 토큰 발급 핸들러 (내부 전용)
///
/// OAuth 콜백 처리기가 제공자 인증을 마친 프로필로 호출하여
/// 클라이언트에 전달할 1회용 교환 토큰을 받습니다.
/// `X-Internal-Key` 헤더가 설정값과 일치해야 합니다.
///
/// # Endpoint
/// `POST /api/member/login/social/issue`
#[post("/login/social/issue")]
pub async fn social_issue(
    req: HttpRequest,
    payload: web::Json<SocialIssueRequest>,
) -> Result<HttpResponse, AppError> {
    let supplied = req
        .headers()
        .get("X-Internal-Key")
        .and_then(|h| h.to_str().ok())
        .unwrap_or("");

    if supplied != SocialConfig::callback_key() {
        log::warn!("소셜 토큰 발급 API에 잘못된 내부 키로 접근");
        return Err(AppError::AuthorizationError(
            "접근 권한이 부족합니다".to_string(),
        ));
    }

    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let ip = client_ip(&req);
    let social_token = AuthService::instance()
        .issue_social_token(&payload, &ip)
        .await?;

    Ok(HttpResponse::Ok().json(BaseResponse::ok(SocialTokenResponse { social_token })))
}

/// 토큰 회전 핸들러
///
/// 리프레시 토큰을 제출하면 기존 세션을 회수하고 새 토큰 쌍을 발급합니다.
/// 이미 교환된 토큰을 다시 제출하면 `SessionNotFound`로 거부됩니다.
/// 액세스 토큰 없이 호출할 수 있습니다 (리프레시 토큰 자체가 자격 증명).
///
/// # Endpoint
/// `POST /api/member/token/refresh/issue`
#[post("/token/refresh/issue")]
pub async fn token_refresh(
    payload: web::Json<TokenRefreshRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let token_info = AuthService::instance().refresh(&payload.refresh_token).await?;

    Ok(HttpResponse::Ok().json(BaseResponse::ok(token_info)))
}

/// 로그인 기기 목록 조회 핸들러
///
/// 현재 회원의 활성 세션 목록을 최근 로그인 순으로 반환합니다.
/// `Refresh-Token` 헤더로 요청 기기의 리프레시 토큰을 전달하면
/// 해당 세션에 `is_current`가 표시됩니다.
///
/// # Endpoint
/// `GET /api/member/token/refresh/list`
#[get("/list")]
pub async fn session_list(
    req: HttpRequest,
    member: AuthenticatedMember,
) -> Result<HttpResponse, AppError> {
    let current_refresh = req
        .headers()
        .get("Refresh-Token")
        .and_then(|h| h.to_str().ok());

    let sessions = AuthService::instance()
        .list_sessions(&member.user_id, current_refresh)
        .await?;

    Ok(HttpResponse::Ok().json(BaseResponse::ok(sessions)))
}

/// 기기별 세션 삭제 핸들러
///
/// 세션 목록 조회에서 받은 `secret`으로 특정 기기를 로그아웃시킵니다.
/// 리프레시 토큰이 응답에 노출되지 않으므로 secret이 삭제 수단이 됩니다.
///
/// # Endpoint
/// `POST /api/member/token/refresh/delete`
#[post("/delete")]
pub async fn session_delete(
    member: AuthenticatedMember,
    payload: web::Json<SecretDeleteRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let deleted = AuthService::instance()
        .logout_one(&member.user_id, &payload.secret)
        .await?;

    if !deleted {
        return Err(AppError::NotFound("해당 세션을 찾을 수 없습니다".to_string()));
    }

    Ok(HttpResponse::Ok().json(BaseResponse::<()>::ok_message("세션이 삭제되었습니다")))
}

/// 전체 로그아웃 핸들러
///
/// 회원의 모든 기기 세션을 폐기합니다. 이미 발급된 액세스 토큰은
/// 남은 수명 동안 유효하지만 더 이상 갱신할 수 없습니다.
///
/// # Endpoint
/// `GET /api/member/token/refresh/logout`
#[get("/logout")]
pub async fn logout(member: AuthenticatedMember) -> Result<HttpResponse, AppError> {
    let removed = AuthService::instance().logout_all(&member.user_id).await?;
    log::info!("전체 로그아웃 - 회원: {}, 세션 {}개 폐기", member.user_id, removed);

    Ok(HttpResponse::Ok().json(BaseResponse::<()>::ok_message("로그아웃 되었습니다")))
}
