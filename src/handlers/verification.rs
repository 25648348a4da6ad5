//! Email Verification HTTP Handlers
//!
//! 이메일 인증 메일 발송과 인증번호 확인 엔드포인트를 처리합니다.
//! 가입/비밀번호 재설정/이메일 변경이 공유하는 흐름이며, 용도(`purpose`)별로
//! 인증 세션이 분리되어 있어 서로 교차 사용할 수 없습니다.
use actix_web::{post, web, HttpRequest, HttpResponse};
use validator::Validate;

use crate::domain::dto::common::BaseResponse;
use crate::domain::dto::members::request::{VerificationCheckRequest, VerificationSendRequest};
use crate::domain::dto::members::response::VerificationSendResponse;
use crate::errors::errors::AppError;
use crate::services::verification::VerificationService;
use crate::utils::browser_info::client_ip;

/// 인증 메일 발송 핸들러
///
/// IP 단위 발송 제한을 통과하면 6자리 인증번호가 담긴 메일을 발송하고
/// 확인 요청에 사용할 인증 토큰을 반환합니다.
///
/// # Endpoint
/// `POST /api/member/verification/send`
#[post("/send")]
pub async fn send(
    req: HttpRequest,
    payload: web::Json<VerificationSendRequest>,
) -> Result<HttpResponse, AppError> {
    // 유효성 검사
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let ip = client_ip(&req);
    let verification_token = VerificationService::instance()
        .send(payload.purpose, &payload.email, &ip)
        .await?;

    Ok(HttpResponse::Ok().json(BaseResponse::ok(VerificationSendResponse {
        verification_token,
    })))
}

/// 인증번호 확인 핸들러
///
/// 발송 시 받은 인증 토큰과 메일의 6자리 인증번호를 확인합니다.
/// 시도 횟수가 한도에 도달하면 `TooManyAttempts`로 거부됩니다.
///
/// # Endpoint
/// `POST /api/member/verification/check`
#[post("/check")]
pub async fn check(
    payload: web::Json<VerificationCheckRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    VerificationService::instance()
        .check(
            payload.purpose,
            &payload.verification_token,
            &payload.verification_number,
        )
        .await?;

    Ok(HttpResponse::Ok().json(BaseResponse::<()>::ok_message("인증이 완료되었습니다")))
}
