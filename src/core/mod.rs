//! # Core Framework Module
//!
//! 회원 서비스를 위한 핵심 프레임워크 기능을 제공하는 모듈입니다.
//!
//! ## 모듈 구성
//!
//! ### [`registry`] - 의존성 주입 컨테이너
//! - **ServiceLocator**: Spring의 ApplicationContext + BeanFactory 역할
//! - **자동 레지스트리**: `inventory` 기반 컴파일 타임 서비스 등록
//! - **싱글톤 관리**: Thread-safe한 인스턴스 생명주기 관리
//! - **의존성 해결**: Arc<T> 타입 기반 자동 의존성 주입
//!
//! ## 사용 패턴
//!
//! ```rust,ignore
//! // 리포지토리 정의
//! #[repository(name = "member", collection = "members")]
//! struct MemberRepository {
//!     db: Arc<Database>,
//! }
//!
//! // 서비스 정의 (자동 의존성 주입)
//! #[service(name = "member")]
//! struct MemberService {
//!     member_repository: Arc<MemberRepository>,
//! }
//!
//! // 사용
//! let member_service = MemberService::instance();
//! ```

pub mod registry;

pub use registry::*;
