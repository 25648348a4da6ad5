//! AuthMiddleware 인증 로직의 핵심적인 기능
use std::rc::Rc;
use actix_web::body::EitherBody;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse};
use actix_web::{Error, HttpMessage, ResponseError};
use futures_util::future::LocalBoxFuture;
use crate::domain::models::auth::{AuthMode, AuthenticatedMember, RequiredRole};
use crate::errors::errors::AppError;
use crate::services::tokens::TokenService;

/// 실제 인증 로직을 수행하는 서비스
pub struct AuthMiddlewareService<S> {
    pub service: Rc<S>,
    pub mode: AuthMode,
    pub required_role: Option<RequiredRole>,
}

impl<S, B> Service<ServiceRequest> for AuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, actix_web::Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();
        let mode = self.mode.clone();
        let required_role = self.required_role.clone();

        Box::pin(async move {
            let token_service = TokenService::instance();

            // Authorization 헤더에서 액세스 토큰 추출 및 검증
            let auth_result = extract_member_from_request(&req, &token_service);

            match (&mode, auth_result) {
                // Required 모드에서 인증 실패
                (AuthMode::Required, Err(err)) => {
                    log::warn!("인증 실패: {}", err);
                    let response = err.error_response();
                    let (req, _) = req.into_parts();
                    let res = ServiceResponse::new(req, response)
                        .map_into_right_body();
                    return Ok(res);
                },
                // Required 모드에서 인증 성공
                (AuthMode::Required, Ok(member)) => {
                    // 역할 검증
                    if let Some(ref required) = required_role {
                        if !required.is_satisfied(&member.roles) {
                            log::warn!(
                                "권한 부족: 회원 {} ({:?}), 필요 권한: {:?}",
                                member.user_id, member.roles, required
                            );
                            let response = AppError::AuthorizationError(
                                "접근 권한이 부족합니다".to_string(),
                            )
                            .error_response();
                            let (req, _) = req.into_parts();
                            let res = ServiceResponse::new(req, response)
                                .map_into_right_body();
                            return Ok(res);
                        }
                    }

                    // 회원 정보를 Request Extensions에 저장
                    req.extensions_mut().insert(member.clone());
                    log::debug!("인증 성공: 회원 {}", member.user_id);
                },
                // Optional 모드에서 인증 성공
                (AuthMode::Optional, Ok(member)) => {
                    // 역할 검증 (Optional 모드에서는 실패해도 진행)
                    if let Some(ref required) = required_role {
                        if required.is_satisfied(&member.roles) {
                            req.extensions_mut().insert(member.clone());
                            log::debug!("선택적 인증 성공: 회원 {}", member.user_id);
                        } else {
                            log::debug!("선택적 인증: 권한 부족하지만 진행 허용");
                        }
                    } else {
                        req.extensions_mut().insert(member.clone());
                        log::debug!("선택적 인증 성공: 회원 {}", member.user_id);
                    }
                },
                // Optional 모드에서 인증 실패 (진행 허용)
                (AuthMode::Optional, Err(_)) => {
                    log::debug!("선택적 인증: 토큰 없음, 요청 진행");
                },
            }

            // 다음 서비스로 요청 전달
            let res = service.call(req).await?;
            Ok(res.map_into_left_body())
        })
    }
}

/// 요청에서 액세스 토큰을 추출하고 검증
fn extract_member_from_request(
    req: &ServiceRequest,
    token_service: &TokenService,
) -> Result<AuthenticatedMember, AppError> {
    let auth_header = req
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| {
            AppError::AuthorizationError("Authorization 헤더가 없습니다".to_string())
        })?;

    let token = token_service
        .extract_bearer_token(auth_header)
        .ok_or_else(|| {
            AppError::AuthorizationError("Bearer 토큰 형식이 아닙니다".to_string())
        })?;

    // 액세스 키로 서명을 검증하므로 리프레시 토큰으로는 통과할 수 없다
    let claims = token_service.get_access_claims(&token)?;

    Ok(AuthenticatedMember::from_claims(&claims))
}
