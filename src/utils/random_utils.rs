//! # 랜덤 값 생성 유틸리티
//!
//! 세션 시크릿과 이메일 인증번호 생성에 사용됩니다.

use rand::Rng;

/// 영문 대소문자와 숫자로 구성된 랜덤 문자열을 생성합니다.
///
/// 세션별 로그아웃에 사용하는 시크릿(15자) 생성에 쓰입니다.
pub fn generate_random_string(length: usize) -> String {
    const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";
    let mut rng = rand::thread_rng();

    (0..length)
        .map(|_| {
            let idx = rng.gen_range(0..CHARSET.len());
            CHARSET[idx] as char
        })
        .collect()
}

/// 지정된 자릿수의 숫자 문자열을 생성합니다.
///
/// 앞자리가 0인 경우도 포함됩니다 (예: "042719").
/// 이메일 인증번호(6자리) 생성에 쓰입니다.
pub fn generate_random_number(digits: usize) -> String {
    let mut rng = rand::thread_rng();

    (0..digits)
        .map(|_| char::from(b'0' + rng.gen_range(0..10u8)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_string_length_and_charset() {
        let secret = generate_random_string(15);

        assert_eq!(secret.len(), 15);
        assert!(secret.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn test_random_number_is_digits_only() {
        let code = generate_random_number(6);

        assert_eq!(code.len(), 6);
        assert!(code.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_random_values_are_not_constant() {
        // 충돌 확률이 무시할 수준인 길이에서 두 값이 같으면 생성기가 고장난 것
        let a = generate_random_string(15);
        let b = generate_random_string(15);

        assert_ne!(a, b);
    }
}
