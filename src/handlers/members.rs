//! Member HTTP Handlers
//!
//! 회원 가입, 정보 조회/수정, 계정 찾기 관련 HTTP 엔드포인트를 처리하는
//! 핸들러 함수들입니다. 인증이 필요한 엔드포인트는 미들웨어가 검증한
//! `AuthenticatedMember`를 명시적으로 주입받습니다.
use actix_web::{get, post, put, web, HttpRequest, HttpResponse};
use validator::Validate;

use crate::domain::dto::common::BaseResponse;
use crate::domain::dto::members::request::{
    FindPasswordResetRequest, FindPasswordSendRequest, FindUserIdRequest, SignUpRequest,
    UpdateEmailRequest, UpdateInfoRequest, UpdatePasswordRequest, WithdrawRequest,
};
use crate::domain::dto::members::response::VerificationSendResponse;
use crate::domain::models::auth::AuthenticatedMember;
use crate::errors::errors::AppError;
use crate::services::members::MemberService;
use crate::utils::browser_info::client_ip;

/// 회원 가입 핸들러
///
/// 이메일 인증(`SIGN_UP`)이 완료된 인증 토큰을 요구합니다.
/// 가입되는 이메일은 인증 세션에 저장된 값입니다.
///
/// # Endpoint
/// `POST /api/member/signup`
#[post("/signup")]
pub async fn sign_up(
    req: HttpRequest,
    payload: web::Json<SignUpRequest>,
) -> Result<HttpResponse, AppError> {
    // 유효성 검사
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let ip = client_ip(&req);
    let response = MemberService::instance()
        .sign_up(payload.into_inner(), &ip)
        .await?;

    log::info!("회원 가입 완료 - 아이디: {}", response.user_id);

    Ok(HttpResponse::Created().json(BaseResponse::ok(response)))
}

/// 내 정보 조회 핸들러
///
/// # Endpoint
/// `GET /api/member/info`
#[get("")]
pub async fn my_info(member: AuthenticatedMember) -> Result<HttpResponse, AppError> {
    let info = MemberService::instance()
        .search_my_info(&member.user_id)
        .await?;

    Ok(HttpResponse::Ok().json(BaseResponse::ok(info)))
}

/// 내 정보 수정 핸들러
///
/// 전달된 필드만 반영됩니다. 닉네임 변경 시 중복 검사를 수행합니다.
///
/// # Endpoint
/// `PUT /api/member/info`
#[put("")]
pub async fn update_my_info(
    req: HttpRequest,
    member: AuthenticatedMember,
    payload: web::Json<UpdateInfoRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let ip = client_ip(&req);
    let info = MemberService::instance()
        .save_my_info(&member.user_id, payload.into_inner(), &ip)
        .await?;

    Ok(HttpResponse::Ok().json(BaseResponse::ok(info)))
}

/// 비밀번호 변경 핸들러
///
/// 현재 비밀번호 확인을 요구하며, 성공 시 모든 세션이 폐기됩니다.
///
/// # Endpoint
/// `PUT /api/member/info/password`
#[put("/password")]
pub async fn update_password(
    req: HttpRequest,
    member: AuthenticatedMember,
    payload: web::Json<UpdatePasswordRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let ip = client_ip(&req);
    MemberService::instance()
        .update_password(&member.user_id, payload.into_inner(), &ip)
        .await?;

    Ok(HttpResponse::Ok().json(BaseResponse::<()>::ok_message(
        "비밀번호가 변경되었습니다. 다시 로그인해주세요",
    )))
}

/// 이메일 변경 핸들러
///
/// 새 이메일로 받은 `EMAIL_UPDATE` 인증이 완료되어 있어야 합니다.
///
/// # Endpoint
/// `PUT /api/member/info/email`
#[put("/email")]
pub async fn update_email(
    req: HttpRequest,
    member: AuthenticatedMember,
    payload: web::Json<UpdateEmailRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let ip = client_ip(&req);
    let info = MemberService::instance()
        .update_email(&member.user_id, payload.into_inner(), &ip)
        .await?;

    Ok(HttpResponse::Ok().json(BaseResponse::ok(info)))
}

/// 회원 탈퇴 핸들러
///
/// 이메일 가입 회원은 비밀번호 확인이 필요합니다.
/// 탈퇴와 함께 모든 세션이 즉시 폐기됩니다.
///
/// # Endpoint
/// `POST /api/member/info/withdraw`
#[post("/withdraw")]
pub async fn withdraw(
    member: AuthenticatedMember,
    payload: web::Json<WithdrawRequest>,
) -> Result<HttpResponse, AppError> {
    MemberService::instance()
        .withdraw(&member.user_id, payload.password.as_deref())
        .await?;

    log::info!("회원 탈퇴 - 아이디: {}", member.user_id);

    Ok(HttpResponse::Ok().json(BaseResponse::<()>::ok_message("탈퇴가 완료되었습니다")))
}

/// 아이디 찾기 핸들러
///
/// 가입된 이메일이면 마스킹된 아이디를 메일로 안내합니다.
/// 이메일 존재 여부가 응답으로 드러나지 않도록 항상 같은 메시지를 반환합니다.
///
/// # Endpoint
/// `POST /api/member/find/user-id`
#[post("/user-id")]
pub async fn find_user_id(
    payload: web::Json<FindUserIdRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    MemberService::instance()
        .find_user_id_by_email(&payload.email)
        .await?;

    Ok(HttpResponse::Ok().json(BaseResponse::<()>::ok_message(
        "가입된 이메일이라면 아이디 안내 메일이 발송됩니다",
    )))
}

/// 비밀번호 재설정 인증 메일 발송 핸들러
///
/// 아이디와 이메일이 같은 회원의 것일 때만 발송됩니다.
///
/// # Endpoint
/// `POST /api/member/find/password/send`
#[post("/password/send")]
pub async fn find_password_send(
    req: HttpRequest,
    payload: web::Json<FindPasswordSendRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let ip = client_ip(&req);
    let verification_token = MemberService::instance()
        .find_password_send(&payload.user_id, &payload.email, &ip)
        .await?;

    Ok(HttpResponse::Ok().json(BaseResponse::ok(VerificationSendResponse {
        verification_token,
    })))
}

/// 비밀번호 재설정 핸들러
///
/// 완료된 `FIND_PASSWORD` 인증 토큰으로 새 비밀번호를 설정합니다.
/// 성공 시 모든 세션이 폐기됩니다.
///
/// # Endpoint
/// `POST /api/member/find/password/reset`
#[post("/password/reset")]
pub async fn find_password_reset(
    req: HttpRequest,
    payload: web::Json<FindPasswordResetRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let ip = client_ip(&req);
    MemberService::instance()
        .find_password_reset(&payload.new_password, &payload.verification_token, &ip)
        .await?;

    Ok(HttpResponse::Ok().json(BaseResponse::<()>::ok_message(
        "비밀번호가 재설정되었습니다. 다시 로그인해주세요",
    )))
}
