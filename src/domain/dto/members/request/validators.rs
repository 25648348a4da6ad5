//! 회원 요청 DTO 공통 검증 함수
//!
//! 여러 요청 DTO가 같은 필드 규칙을 공유하므로 (아이디, 비밀번호, 닉네임,
//! 생년월일) 검증 함수를 한곳에 모아둡니다.

use validator::ValidationError;

/// 소셜 가입 회원에게 예약된 아이디 접두사
const RESERVED_ID_PREFIXES: [&str; 3] = ["kakao_", "naver_", "google_"];

/// 로그인 아이디 검증
///
/// - 4-20자
/// - 영문 소문자, 숫자, 언더스코어만 허용
/// - 소셜 가입에 예약된 접두사로 시작할 수 없음
pub fn validate_user_id(user_id: &str) -> Result<(), ValidationError> {
    let len = user_id.chars().count();
    if !(4..=20).contains(&len) {
        return Err(ValidationError::new("invalid_user_id")
            .with_message("아이디는 4-20자 사이여야 합니다".into()));
    }

    if !user_id
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
    {
        return Err(ValidationError::new("invalid_user_id")
            .with_message("아이디는 영문 소문자, 숫자, 언더스코어만 사용 가능합니다".into()));
    }

    if RESERVED_ID_PREFIXES.iter().any(|p| user_id.starts_with(p)) {
        return Err(ValidationError::new("reserved_user_id")
            .with_message("사용할 수 없는 아이디입니다".into()));
    }

    Ok(())
}

/// 비밀번호 보안 강도 검증
///
/// - 8-20자
/// - 영문, 숫자, 특수문자를 각각 최소 1개 포함
pub fn validate_password(password: &str) -> Result<(), ValidationError> {
    let len = password.chars().count();
    if !(8..=20).contains(&len) {
        return Err(ValidationError::new("weak_password")
            .with_message("비밀번호는 8-20자 사이여야 합니다".into()));
    }

    let has_letter = password.chars().any(|c| c.is_ascii_alphabetic());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    let has_special = password
        .chars()
        .any(|c| !c.is_alphanumeric() && !c.is_whitespace());

    if !(has_letter && has_digit && has_special) {
        return Err(ValidationError::new("weak_password")
            .with_message("비밀번호는 영문, 숫자, 특수문자를 모두 포함해야 합니다".into()));
    }

    Ok(())
}

/// 생년월일 형식 검증 (YYYY-MM-DD)
pub fn validate_birth_date(birth_date: &str) -> Result<(), ValidationError> {
    if chrono::NaiveDate::parse_from_str(birth_date, "%Y-%m-%d").is_err() {
        return Err(ValidationError::new("invalid_birth_date")
            .with_message("생년월일은 YYYY-MM-DD 형식이어야 합니다".into()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_id_rules() {
        assert!(validate_user_id("member_one").is_ok());
        assert!(validate_user_id("abc1").is_ok());

        assert!(validate_user_id("abc").is_err()); // 너무 짧음
        assert!(validate_user_id("Member_One").is_err()); // 대문자 불허
        assert!(validate_user_id("user-name").is_err()); // 하이픈 불허
        assert!(validate_user_id("kakao_12345").is_err()); // 예약 접두사
        assert!(validate_user_id("naver_member").is_err());
        assert!(validate_user_id("google_member").is_err());
    }

    #[test]
    fn test_password_rules() {
        assert!(validate_password("passw0rd!").is_ok());

        assert!(validate_password("short1!").is_err()); // 너무 짧음
        assert!(validate_password("password!").is_err()); // 숫자 없음
        assert!(validate_password("password1").is_err()); // 특수문자 없음
        assert!(validate_password("12345678!").is_err()); // 영문 없음
        assert!(validate_password(&"a1!".repeat(7)).is_err()); // 21자
    }

    #[test]
    fn test_birth_date_format() {
        assert!(validate_birth_date("1995-03-21").is_ok());

        assert!(validate_birth_date("1995-13-21").is_err());
        assert!(validate_birth_date("95-03-21").is_err());
        assert!(validate_birth_date("1995/03/21").is_err());
    }
}
