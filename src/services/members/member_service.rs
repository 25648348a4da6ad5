//! 회원 관리 서비스 구현
//!
//! 가입, 내 정보 조회/수정, 비밀번호/이메일 변경, 계정 찾기, 탈퇴를
//! 담당합니다. 비밀번호와 세션을 건드리는 모든 변경은 전체 로그아웃을
//! 동반합니다.

use std::sync::Arc;

use mongodb::bson::doc;
use singleton_macro::service;

use crate::{
    config::PasswordConfig,
    domain::dto::members::request::{
        SignUpRequest, UpdateEmailRequest, UpdateInfoRequest, UpdatePasswordRequest,
    },
    domain::dto::members::response::{MemberInfoResponse, SignUpResponse},
    domain::entities::members::Member,
    domain::models::verification::VerificationPurpose,
    errors::errors::AppError,
    repositories::members::MemberRepository,
    repositories::sessions::SessionRepository,
    services::mail::MailService,
    services::verification::VerificationService,
    utils::string_utils::{clean_optional_string, mask_user_id},
};

/// 회원 관리 서비스
#[service(name = "member")]
pub struct MemberService {
    member_repo: Arc<MemberRepository>,
    session_repo: Arc<SessionRepository>,
    verification_service: Arc<VerificationService>,
    mail_service: Arc<MailService>,
}

impl MemberService {
    fn hash_password(password: &str) -> Result<String, AppError> {
        bcrypt::hash(password, PasswordConfig::bcrypt_cost())
            .map_err(|e| AppError::InternalError(format!("비밀번호 해싱 실패: {}", e)))
    }

    fn verify_password(member: &Member, password: &str) -> Result<(), AppError> {
        let hash = member
            .password_hash
            .as_deref()
            .filter(|_| member.can_authenticate_with_password())
            .ok_or(AppError::BadCredentials)?;

        let verified = bcrypt::verify(password, hash)
            .map_err(|e| AppError::InternalError(format!("비밀번호 검증 실패: {}", e)))?;

        if !verified {
            return Err(AppError::BadCredentials);
        }
        Ok(())
    }

    /// 회원가입
    ///
    /// 인증번호 확인까지 마친 `SignUp` 인증 세션이 있어야 하며,
    /// 이메일은 인증 세션에 저장된 값을 사용합니다. 가입이 완료되면
    /// 인증 세션은 소비되어 같은 토큰으로 다시 가입할 수 없습니다.
    pub async fn sign_up(&self, request: SignUpRequest, ip: &str) -> Result<SignUpResponse, AppError> {
        let verification = self
            .verification_service
            .require_done(VerificationPurpose::SignUp, &request.verification_token)
            .await?;

        let password_hash = Self::hash_password(&request.password)?;

        let member = Member::new_email(
            request.user_id,
            verification.email.clone(),
            request.nick,
            password_hash,
            clean_optional_string(request.name),
            clean_optional_string(request.birth_date),
            request.gender,
        );

        let created = self.member_repo.create(member, ip).await?;

        self.verification_service
            .complete(VerificationPurpose::SignUp, &request.verification_token)
            .await?;

        log::info!("회원가입 완료 (user_id: {})", created.user_id);

        Ok(SignUpResponse {
            user_id: created.user_id,
            email: created.email,
            nick: created.nick,
        })
    }

    /// 내 정보 조회
    pub async fn search_my_info(&self, user_id: &str) -> Result<MemberInfoResponse, AppError> {
        let member = self
            .member_repo
            .find_by_user_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("회원을 찾을 수 없습니다".to_string()))?;

        Ok(MemberInfoResponse::from(member))
    }

    /// 내 정보 수정
    ///
    /// 전달된 필드만 반영하며, 닉네임 변경 시 중복을 다시 확인합니다.
    pub async fn save_my_info(
        &self,
        user_id: &str,
        request: UpdateInfoRequest,
        ip: &str,
    ) -> Result<MemberInfoResponse, AppError> {
        let mut update_doc = doc! {};

        if let Some(nick) = clean_optional_string(request.nick) {
            if let Some(existing) = self.member_repo.find_by_nick(&nick).await? {
                if existing.user_id != user_id {
                    return Err(AppError::ConflictError(
                        "이미 사용 중인 닉네임입니다".to_string(),
                    ));
                }
            }
            update_doc.insert("nick", nick);
        }

        if let Some(name) = clean_optional_string(request.name) {
            update_doc.insert("name", name);
        }

        if let Some(image_url) = clean_optional_string(request.image_url) {
            update_doc.insert("image_url", image_url);
        }

        if let Some(birth_date) = clean_optional_string(request.birth_date) {
            update_doc.insert("birth_date", birth_date);
        }

        if let Some(gender) = request.gender {
            let value = mongodb::bson::to_bson(&gender)
                .map_err(|e| AppError::InternalError(format!("성별 직렬화 실패: {}", e)))?;
            update_doc.insert("gender", value);
        }

        // 소셜 가입 직후의 게스트 상태는 첫 정보 입력으로 해제된다
        if !update_doc.is_empty() {
            update_doc.insert("is_social_guest", false);
        }

        let updated = self
            .member_repo
            .update(user_id, update_doc, ip)
            .await?
            .ok_or_else(|| AppError::NotFound("회원을 찾을 수 없습니다".to_string()))?;

        Ok(MemberInfoResponse::from(updated))
    }

    /// 비밀번호 변경
    ///
    /// 현재 비밀번호 확인을 요구하며, 변경에 성공하면 모든 세션이
    /// 폐기되어 모든 기기에서 다시 로그인해야 합니다.
    pub async fn update_password(
        &self,
        user_id: &str,
        request: UpdatePasswordRequest,
        ip: &str,
    ) -> Result<(), AppError> {
        let member = self
            .member_repo
            .find_by_user_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("회원을 찾을 수 없습니다".to_string()))?;

        Self::verify_password(&member, &request.current_password)?;

        let new_hash = Self::hash_password(&request.new_password)?;
        self.member_repo
            .update(user_id, doc! { "password_hash": new_hash }, ip)
            .await?;

        let removed = self.session_repo.delete_all_for_user(user_id).await?;
        log::info!(
            "비밀번호 변경 완료, 세션 {}개 폐기 (user_id: {})",
            removed,
            user_id
        );

        Ok(())
    }

    /// 이메일 변경
    ///
    /// 새 이메일로 받은 `EmailUpdate` 인증이 완료되어 있어야 하며,
    /// 변경될 이메일은 인증 세션에 저장된 값입니다.
    pub async fn update_email(
        &self,
        user_id: &str,
        request: UpdateEmailRequest,
        ip: &str,
    ) -> Result<MemberInfoResponse, AppError> {
        let member = self
            .member_repo
            .find_by_user_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("회원을 찾을 수 없습니다".to_string()))?;

        Self::verify_password(&member, &request.current_password)?;

        let verification = self
            .verification_service
            .require_done(VerificationPurpose::EmailUpdate, &request.verification_token)
            .await?;

        if let Some(existing) = self.member_repo.find_by_email(&verification.email).await? {
            if existing.user_id != user_id {
                return Err(AppError::ConflictError(
                    "이미 사용 중인 이메일입니다".to_string(),
                ));
            }
        }

        let updated = self
            .member_repo
            .update(user_id, doc! { "email": verification.email.clone() }, ip)
            .await?
            .ok_or_else(|| AppError::NotFound("회원을 찾을 수 없습니다".to_string()))?;

        self.verification_service
            .complete(VerificationPurpose::EmailUpdate, &request.verification_token)
            .await?;

        Ok(MemberInfoResponse::from(updated))
    }

    /// 아이디 찾기
    ///
    /// 등록된 이메일이면 마스킹된 아이디를 메일로 발송합니다.
    /// 미등록 이메일도 같은 성공 응답을 받아, 이 API로 가입 여부를
    /// 탐지할 수 없습니다.
    pub async fn find_user_id_by_email(&self, email: &str) -> Result<(), AppError> {
        if let Some(member) = self.member_repo.find_by_email(email).await? {
            let masked = mask_user_id(&member.user_id);
            self.mail_service.send_masked_user_id(email, &masked).await?;
        }

        Ok(())
    }

    /// 비밀번호 재설정용 인증 메일 발송
    ///
    /// 아이디와 이메일이 같은 회원의 것일 때만 발송됩니다.
    pub async fn find_password_send(
        &self,
        user_id: &str,
        email: &str,
        ip: &str,
    ) -> Result<String, AppError> {
        let member = self
            .member_repo
            .find_by_user_id(user_id)
            .await?
            .filter(|m| m.email == email)
            .ok_or_else(|| AppError::NotFound("일치하는 회원이 없습니다".to_string()))?;

        if !member.is_email_member() {
            return Err(AppError::ValidationError(
                "소셜 가입 회원은 비밀번호 재설정을 사용할 수 없습니다.".to_string(),
            ));
        }

        self.verification_service
            .send(VerificationPurpose::FindPassword, email, ip)
            .await
    }

    /// 비밀번호 재설정
    ///
    /// 완료된 `FindPassword` 인증의 이메일로 회원을 특정합니다.
    /// 성공 시 모든 세션이 폐기됩니다.
    pub async fn find_password_reset(
        &self,
        new_password: &str,
        verification_token: &str,
        ip: &str,
    ) -> Result<(), AppError> {
        let verification = self
            .verification_service
            .require_done(VerificationPurpose::FindPassword, verification_token)
            .await?;

        let member = self
            .member_repo
            .find_by_email(&verification.email)
            .await?
            .ok_or_else(|| AppError::NotFound("회원을 찾을 수 없습니다".to_string()))?;

        let new_hash = Self::hash_password(new_password)?;
        self.member_repo
            .update(&member.user_id, doc! { "password_hash": new_hash }, ip)
            .await?;

        self.verification_service
            .complete(VerificationPurpose::FindPassword, verification_token)
            .await?;

        let removed = self.session_repo.delete_all_for_user(&member.user_id).await?;
        log::info!(
            "비밀번호 재설정 완료, 세션 {}개 폐기 (user_id: {})",
            removed,
            member.user_id
        );

        Ok(())
    }

    /// 회원 탈퇴
    ///
    /// 이메일 가입 회원은 비밀번호 확인이 필요합니다. 탈퇴와 함께
    /// 모든 세션이 즉시 폐기됩니다.
    pub async fn withdraw(&self, user_id: &str, password: Option<&str>) -> Result<(), AppError> {
        let member = self
            .member_repo
            .find_by_user_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("회원을 찾을 수 없습니다".to_string()))?;

        if member.can_authenticate_with_password() {
            let password = password.ok_or(AppError::BadCredentials)?;
            Self::verify_password(&member, password)?;
        }

        self.member_repo.delete_by_user_id(user_id).await?;
        let removed = self.session_repo.delete_all_for_user(user_id).await?;

        log::info!("회원 탈퇴 완료, 세션 {}개 폐기 (user_id: {})", removed, user_id);

        Ok(())
    }
}
