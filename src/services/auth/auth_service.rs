//! 인증 및 세션 수명주기 서비스 구현
//!
//! 로그인, 토큰 갱신, 로그아웃과 기기별 세션 관리를 담당합니다.
//!
//! ## 토큰 갱신의 원자성
//!
//! 갱신은 항상 기존 세션의 회수(GETDEL)로 시작합니다. 새 토큰 발급이나
//! 저장이 실패해도 기존 토큰은 이미 무효화된 상태이므로, 하나의
//! 리프레시 토큰이 두 번 교환되는 일은 어떤 경합에서도 불가능합니다.

use std::sync::Arc;

use chrono::Utc;
use singleton_macro::service;

use crate::{
    config::{JwtConfig, ThrottleConfig},
    domain::dto::members::request::{LoginRequest, SocialIssueRequest, SocialLoginRequest},
    domain::entities::members::Member,
    domain::models::session::{RefreshTokenInfo, SessionResponse, SESSION_SECRET_LENGTH},
    domain::models::token::TokenInfo,
    errors::errors::AppError,
    repositories::attempts::LoginAttemptRepository,
    repositories::members::MemberRepository,
    repositories::sessions::SessionRepository,
    repositories::social::SocialTokenRepository,
    services::tokens::TokenService,
    utils::browser_info::DeviceInfo,
    utils::random_utils::generate_random_string,
};

/// 인증 및 세션 수명주기 서비스
#[service(name = "auth")]
pub struct AuthService {
    member_repo: Arc<MemberRepository>,
    session_repo: Arc<SessionRepository>,
    login_attempt_repo: Arc<LoginAttemptRepository>,
    social_token_repo: Arc<SocialTokenRepository>,
    token_service: Arc<TokenService>,
}

impl AuthService {
    /// 아이디/비밀번호 로그인
    ///
    /// 시도 제한 검사가 자격 증명 확인보다 먼저 수행되어, 한도를 넘긴
    /// 요청은 비밀번호가 맞아도 거부됩니다. 존재하지 않는 아이디와
    /// 틀린 비밀번호는 같은 오류로 응답하여 계정 존재 여부를 숨깁니다.
    pub async fn login(
        &self,
        request: &LoginRequest,
        device: &DeviceInfo,
    ) -> Result<TokenInfo, AppError> {
        let allowed = self
            .login_attempt_repo
            .check_and_increment(
                &request.user_id,
                &device.ip_address,
                ThrottleConfig::login_limit() as i64,
            )
            .await?;

        if !allowed {
            log::warn!(
                "로그인 시도 한도 초과 (user_id: {}, ip: {})",
                request.user_id,
                device.ip_address
            );
            return Err(AppError::TooManyAttempts);
        }

        let member = self
            .member_repo
            .find_by_user_id(&request.user_id)
            .await?
            .ok_or(AppError::BadCredentials)?;

        let hash = member
            .password_hash
            .as_deref()
            .filter(|_| member.can_authenticate_with_password())
            .ok_or(AppError::BadCredentials)?;

        let verified = bcrypt::verify(&request.password, hash)
            .map_err(|e| AppError::InternalError(format!("비밀번호 검증 실패: {}", e)))?;

        if !verified {
            return Err(AppError::BadCredentials);
        }

        self.issue_session(&member, device).await
    }

    /// 소셜 교환 토큰 로그인
    ///
    /// OAuth 콜백에서 발급된 1회용 토큰을 회원으로 해석해 토큰 쌍을
    /// 발급합니다. 토큰은 조회와 동시에 삭제되어 재사용할 수 없습니다.
    pub async fn login_for_social(
        &self,
        request: &SocialLoginRequest,
        device: &DeviceInfo,
    ) -> Result<TokenInfo, AppError> {
        let user_id = self
            .social_token_repo
            .take(&request.social_token)
            .await?
            .ok_or(AppError::BadCredentials)?;

        let member = self
            .member_repo
            .find_by_user_id(&user_id)
            .await?
            .ok_or(AppError::BadCredentials)?;

        self.issue_session(&member, device).await
    }

    /// 소셜 교환 토큰 발급 (OAuth 콜백 처리기 전용)
    ///
    /// 제공자 인증을 마친 프로필을 회원으로 연결합니다. 처음 보는
    /// 소셜 계정이면 게스트 상태의 회원을 만든 뒤 1회용 토큰을
    /// 발급합니다.
    pub async fn issue_social_token(
        &self,
        request: &SocialIssueRequest,
        ip: &str,
    ) -> Result<String, AppError> {
        let member = match self
            .member_repo
            .find_by_social(request.social_type, &request.social_id)
            .await?
        {
            Some(member) => member,
            None => self.register_social_member(request, ip).await?,
        };

        self.social_token_repo.issue(&member.user_id).await
    }

    async fn register_social_member(
        &self,
        request: &SocialIssueRequest,
        ip: &str,
    ) -> Result<Member, AppError> {
        // 소셜 닉네임은 서로 겹치기 쉬우므로 충돌 시 접미사를 붙인다
        let nick = if self.member_repo.find_by_nick(&request.nick).await?.is_some() {
            format!("{}_{}", request.nick, generate_random_string(4))
        } else {
            request.nick.clone()
        };

        let member = Member::new_social(
            request.social_type,
            request.social_id.clone(),
            request.email.clone(),
            nick,
            request.social_nick.clone(),
            request.image_url.clone(),
        );

        let created = self.member_repo.create(member, ip).await?;
        log::info!("소셜 회원 생성 (user_id: {})", created.user_id);

        Ok(created)
    }

    /// 토큰 갱신 (회전)
    ///
    /// 기존 세션을 먼저 원자적으로 회수한 뒤에만 새 쌍을 발급합니다.
    /// 없는 토큰, 이미 교환된 토큰, 폐기된 세션은 모두 동일하게
    /// `SessionNotFound`로 응답합니다.
    pub async fn refresh(&self, old_refresh: &str) -> Result<TokenInfo, AppError> {
        let claims = self.token_service.get_refresh_claims(old_refresh)?;

        let old_session = self
            .session_repo
            .take_by_refresh_token(&claims.sub, old_refresh)
            .await?
            .ok_or(AppError::SessionNotFound)?;

        let token_info = self.token_service.validate_refresh_and_create(old_refresh)?;

        let new_session = old_session.with_rotated_token(token_info.refresh_token.clone());
        let new_claims = self
            .token_service
            .get_refresh_claims(&token_info.refresh_token)?;
        let ttl = (new_claims.exp - Utc::now().timestamp()).max(1) as u64;

        self.session_repo.save(&new_session, ttl).await?;

        Ok(token_info)
    }

    /// secret으로 특정 기기 로그아웃
    pub async fn logout_one(&self, user_id: &str, secret: &str) -> Result<bool, AppError> {
        self.session_repo.delete_by_secret(user_id, secret).await
    }

    /// 모든 기기에서 로그아웃
    pub async fn logout_all(&self, user_id: &str) -> Result<usize, AppError> {
        self.session_repo.delete_all_for_user(user_id).await
    }

    /// 로그인 기기 목록 조회
    ///
    /// 요청 기기의 리프레시 토큰이 전달되면 해당 세션에 `is_current`가
    /// 표시됩니다.
    pub async fn list_sessions(
        &self,
        user_id: &str,
        current_refresh: Option<&str>,
    ) -> Result<Vec<SessionResponse>, AppError> {
        let sessions = self.session_repo.list_by_user(user_id).await?;
        let current = current_refresh.unwrap_or("");

        Ok(sessions
            .iter()
            .map(|info| SessionResponse::from_info(info, current))
            .collect())
    }

    /// 토큰 쌍 발급과 세션 저장
    async fn issue_session(
        &self,
        member: &Member,
        device: &DeviceInfo,
    ) -> Result<TokenInfo, AppError> {
        let token_info = self.token_service.create_token_info(
            &member.user_id,
            &member.email,
            &member.nick,
            &member.authorities(),
        )?;

        // 같은 초에 같은 회원이 두 번 로그인하면 토큰 문자열이 겹친다.
        // 이 경우 새 세션이 같은 키를 덮어쓰므로 토큰당 세션은 항상 하나다.
        let session = RefreshTokenInfo {
            user_id: member.user_id.clone(),
            refresh_token: token_info.refresh_token.clone(),
            header: device.header.clone(),
            browser: device.browser.clone(),
            os: device.os.clone(),
            ip_address: device.ip_address.clone(),
            secret: generate_random_string(SESSION_SECRET_LENGTH),
            date: Utc::now().format("%Y-%m-%d %H:%M:%S").to_string(),
        };

        let ttl = (JwtConfig::refresh_expire_minutes() * 60).max(1) as u64;
        self.session_repo.save(&session, ttl).await?;

        log::info!(
            "로그인 세션 발급 (user_id: {}, browser: {}, os: {})",
            member.user_id,
            device.browser,
            device.os
        );

        Ok(token_info)
    }
}
