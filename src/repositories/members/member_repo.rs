//! # 회원 리포지토리 구현
//!
//! 회원 엔티티의 데이터 액세스 계층입니다.
//! MongoDB를 주 저장소로 사용하고, 아이디 조회에 Redis 캐싱을 적용합니다.
//!
//! ## 유일성 제약
//!
//! `user_id`, `email`, `nick` 세 필드가 각각 유니크하며,
//! 인덱스와 함께 생성 경로에서의 사전 중복 검사로 이중 방어합니다.

use std::sync::Arc;

use mongodb::{
    bson::{doc, Document},
    options::IndexOptions,
    IndexModel,
};
use singleton_macro::repository;

use crate::{
    caching::redis::RedisClient,
    core::registry::Repository,
    db::Database,
    domain::entities::members::{IpAudited, Member, SocialType},
    errors::errors::AppError,
};

/// 회원 조회 캐시 TTL (초)
const MEMBER_CACHE_TTL: u64 = 600;

/// 회원 데이터 액세스 리포지토리
///
/// ## 캐싱 전략
///
/// - **캐시 키**: `member:{user_id}`, TTL 10분
/// - 모든 쓰기 경로에서 해당 회원의 캐시를 무효화합니다.
///
/// ## 에러 처리
///
/// - **DatabaseError**: MongoDB 연결/쿼리 오류
/// - **ConflictError**: 아이디/이메일/닉네임 중복
#[repository(name = "member", collection = "members")]
pub struct MemberRepository {
    /// MongoDB 데이터베이스 연결
    db: Arc<Database>,

    /// Redis 캐시 클라이언트
    redis: Arc<RedisClient>,
}

impl MemberRepository {
    fn member_cache_key(user_id: &str) -> String {
        format!("member:{}", user_id)
    }

    /// 로그인 아이디로 회원 조회 (캐시 우선)
    pub async fn find_by_user_id(&self, user_id: &str) -> Result<Option<Member>, AppError> {
        let cache_key = Self::member_cache_key(user_id);

        if let Ok(Some(cached)) = self.redis.get::<Member>(&cache_key).await {
            return Ok(Some(cached));
        }

        let member = self
            .collection::<Member>()
            .find_one(doc! { "user_id": user_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        if let Some(ref member) = member {
            let _ = self
                .redis
                .set_with_expiry(&cache_key, member, MEMBER_CACHE_TTL)
                .await;
        }

        Ok(member)
    }

    /// 이메일로 회원 조회
    pub async fn find_by_email(&self, email: &str) -> Result<Option<Member>, AppError> {
        self.collection::<Member>()
            .find_one(doc! { "email": email })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 소셜 제공자 식별자로 회원 조회
    pub async fn find_by_social(
        &self,
        social_type: SocialType,
        social_id: &str,
    ) -> Result<Option<Member>, AppError> {
        let type_bson = mongodb::bson::to_bson(&social_type)
            .map_err(|e| AppError::InternalError(format!("소셜 유형 직렬화 실패: {}", e)))?;

        self.collection::<Member>()
            .find_one(doc! { "social_type": type_bson, "social_id": social_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 닉네임으로 회원 조회 (중복 확인용)
    pub async fn find_by_nick(&self, nick: &str) -> Result<Option<Member>, AppError> {
        self.collection::<Member>()
            .find_one(doc! { "nick": nick })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 새 회원 생성
    ///
    /// 아이디, 이메일, 닉네임의 중복 여부를 사전에 검증하고,
    /// 생성 요청 IP를 감사 필드에 기록한 뒤 저장합니다.
    pub async fn create(&self, mut member: Member, ip: &str) -> Result<Member, AppError> {
        if self.find_by_user_id(&member.user_id).await?.is_some() {
            return Err(AppError::ConflictError(
                "이미 사용 중인 아이디입니다".to_string(),
            ));
        }

        if self.find_by_email(&member.email).await?.is_some() {
            return Err(AppError::ConflictError(
                "이미 사용 중인 이메일입니다".to_string(),
            ));
        }

        if self.find_by_nick(&member.nick).await?.is_some() {
            return Err(AppError::ConflictError(
                "이미 사용 중인 닉네임입니다".to_string(),
            ));
        }

        member.set_created_ip(ip);

        let result = self
            .collection::<Member>()
            .insert_one(&member)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        member.id = result.inserted_id.as_object_id();

        Ok(member)
    }

    /// 회원 정보 부분 업데이트
    ///
    /// `$set`으로 전달된 필드만 변경하며, 수정 시간과 수정 요청 IP를
    /// 함께 기록합니다. 최신 상태의 문서를 반환합니다.
    pub async fn update(
        &self,
        user_id: &str,
        mut update_doc: Document,
        ip: &str,
    ) -> Result<Option<Member>, AppError> {
        let Some(mut member) = self.find_by_user_id(user_id).await? else {
            return Ok(None);
        };

        // 감사 필드는 엔티티의 IpAudited 구현이 채운다
        member.set_modified_ip(ip);

        update_doc.insert("updated_at", mongodb::bson::DateTime::now());
        if let Some(modified_ip) = member.modified_ip {
            update_doc.insert("modified_ip", modified_ip);
        }

        let options = mongodb::options::FindOneAndUpdateOptions::builder()
            .return_document(mongodb::options::ReturnDocument::After)
            .build();

        let updated = self
            .collection::<Member>()
            .find_one_and_update(doc! { "user_id": user_id }, doc! { "$set": update_doc })
            .with_options(options)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        if updated.is_some() {
            let _ = self.redis.del(&Self::member_cache_key(user_id)).await;
        }

        Ok(updated)
    }

    /// 회원 삭제 (탈퇴)
    pub async fn delete_by_user_id(&self, user_id: &str) -> Result<bool, AppError> {
        let result = self
            .collection::<Member>()
            .delete_one(doc! { "user_id": user_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        if result.deleted_count > 0 {
            let _ = self.redis.del(&Self::member_cache_key(user_id)).await;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// 회원 컬렉션 인덱스 생성
    ///
    /// 애플리케이션 초기화 시점에 한 번 실행합니다.
    pub async fn create_indexes(&self) -> Result<(), AppError> {
        let collection = self.collection::<Member>();

        let user_id_index = IndexModel::builder()
            .keys(doc! { "user_id": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("user_id_unique".to_string())
                    .build(),
            )
            .build();

        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("email_unique".to_string())
                    .build(),
            )
            .build();

        let nick_index = IndexModel::builder()
            .keys(doc! { "nick": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("nick_unique".to_string())
                    .build(),
            )
            .build();

        let created_at_index = IndexModel::builder()
            .keys(doc! { "created_at": -1 })
            .options(
                IndexOptions::builder()
                    .name("created_at_desc".to_string())
                    .build(),
            )
            .build();

        collection
            .create_indexes([user_id_index, email_index, nick_index, created_at_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}
