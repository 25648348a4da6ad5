//! 공통 유틸리티 함수 모듈
//!
//! 애플리케이션 전체에서 사용되는 공통 유틸리티 함수들을 제공합니다.
//!
//! # Modules
//!
//! - [`string_utils`] - 문자열 정리 및 마스킹 유틸리티
//! - [`display_terminal`] - 터미널 출력 포맷팅 함수들
//! - [`random_utils`] - 세션 시크릿, 인증번호 등 랜덤 값 생성
//! - [`browser_info`] - User-Agent와 X-Forwarded-For 헤더 파싱

pub mod string_utils;
pub mod display_terminal;
pub mod random_utils;
pub mod browser_info;
