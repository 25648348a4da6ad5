//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//! Spring Framework의 Controller 레이어와 동일한 역할을 수행하며,
//! ActixWeb 프레임워크를 기반으로 구현되었습니다.
//!
//! ## 아키텍처 위치
//!
//! ```text
//! HTTP Layer Architecture
//! ┌─────────────────────────────────────────────┐
//!   Client (Browser, Mobile App, API Client)
//! └─────────────────────┬───────────────────────┘
//!                       │ HTTP Request/Response
//! ┌─────────────────────▼───────────────────────┐
//!   Handlers (이 모듈) - HTTP 엔드포인트 처리         ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   Services - 비즈니스 로직                        ← Service Layer
//! ├─────────────────────────────────────────────┤
//!   Repositories - 데이터 접근                     ← Repository Layer
//! ├─────────────────────────────────────────────┤
//!   Entities/Models - 도메인 모델                  ← Domain Layer
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Spring Framework와의 비교
//!
//! ### Spring MVC Controller
//! ```java
//! @RestController
//! @RequestMapping("/api/member")
//! public class MemberController {
//!
//!     @Autowired
//!     private MemberService memberService;
//!
//!     @PostMapping("/signup")
//!     public ResponseEntity<BaseResponse> signUp(@RequestBody SignUpRequest request) {
//!         SignUpResponse response = memberService.signUp(request);
//!         return ResponseEntity.status(HttpStatus.CREATED).body(BaseResponse.ok(response));
//!     }
//! }
//! ```
//!
//! ### 이 모듈의 Rust 구현
//! ```rust,ignore
//! use actix_web::{web, HttpRequest, HttpResponse, post};
//! use crate::services::members::MemberService;
//!
//! #[post("/signup")]
//! pub async fn sign_up(
//!     req: HttpRequest,
//!     payload: web::Json<SignUpRequest>,
//! ) -> Result<HttpResponse, AppError> {
//!     payload.validate()
//!         .map_err(|e| AppError::ValidationError(e.to_string()))?;
//!
//!     let ip = client_ip(&req);
//!     let service = MemberService::instance(); // 싱글톤 패턴
//!     let response = service.sign_up(payload.into_inner(), &ip).await?;
//!     Ok(HttpResponse::Created().json(BaseResponse::ok(response)))
//! }
//! ```
//!
//! ## 주요 특징
//!
//! ### 1. 명시적 신원 전달
//! 인증이 필요한 핸들러는 `AuthenticatedMember` extractor로 미들웨어가
//! 검증한 회원 정보를 명시적으로 주입받아 서비스에 전달합니다.
//! 서비스 레이어는 요청 컨텍스트를 들여다보지 않습니다.
//!
//! ```rust,ignore
//! #[get("")]
//! pub async fn my_info(member: AuthenticatedMember) -> Result<HttpResponse, AppError> {
//!     let info = MemberService::instance().search_my_info(&member.user_id).await?;
//!     Ok(HttpResponse::Ok().json(BaseResponse::ok(info)))
//! }
//! ```
//!
//! ### 2. 타입 안전성
//! - **컴파일 타임 검증**: 요청/응답 타입 검증
//! - **자동 직렬화**: JSON ↔ Rust 구조체 자동 변환
//! - **검증 통합**: validator 크레이트로 입력 검증
//!
//! ### 3. 에러 처리
//! - **Result 패턴**: 모든 핸들러가 `Result<HttpResponse, AppError>` 반환
//! - **자동 변환**: `?` 연산자로 에러 자동 전파
//! - **통합 에러 타입**: AppError가 HTTP 상태 코드로 자동 변환
//!
//! ## 모듈 구성
//!
//! - **`auth`**: 로그인, 토큰 회전, 기기별 세션 관리
//! - **`members`**: 가입, 정보 조회/수정, 계정 찾기, 탈퇴
//! - **`verification`**: 이메일 인증 발송/확인

pub mod auth;
pub mod members;
pub mod verification;
