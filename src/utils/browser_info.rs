//! # 접속 기기 정보 파싱
//!
//! User-Agent 헤더에서 브라우저/운영체제를, X-Forwarded-For 헤더에서
//! 클라이언트 IP를 추출합니다. 세션 목록에 "어느 기기에서 로그인했는지"를
//! 보여주기 위한 용도이므로 대표적인 패턴만 구분합니다.

use actix_web::HttpRequest;

/// 요청에서 추출한 접속 기기 정보
#[derive(Debug, Clone)]
pub struct DeviceInfo {
    /// User-Agent 헤더 원문
    pub header: String,
    /// 브라우저 이름 (Chrome, Safari, ...)
    pub browser: String,
    /// 운영체제 이름 (Windows, macOS, ...)
    pub os: String,
    /// 클라이언트 IP 주소
    pub ip_address: String,
}

impl DeviceInfo {
    /// HTTP 요청에서 기기 정보를 추출합니다.
    pub fn from_request(req: &HttpRequest) -> Self {
        let header = req
            .headers()
            .get("User-Agent")
            .and_then(|v| v.to_str().ok())
            .unwrap_or("")
            .to_string();

        Self {
            browser: browser_from_user_agent(&header),
            os: os_from_user_agent(&header),
            ip_address: client_ip(req),
            header,
        }
    }
}

/// 요청의 클라이언트 IP를 추출합니다.
///
/// 프록시 뒤에서 동작하므로 X-Forwarded-For의 첫 번째 주소를 우선하고,
/// 헤더가 없으면 피어 주소를 사용합니다.
pub fn client_ip(req: &HttpRequest) -> String {
    if let Some(forwarded) = req.headers().get("X-Forwarded-For") {
        if let Ok(value) = forwarded.to_str() {
            if let Some(first) = value.split(',').next() {
                let trimmed = first.trim();
                if !trimmed.is_empty() {
                    return trimmed.to_string();
                }
            }
        }
    }

    req.peer_addr()
        .map(|addr| addr.ip().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

/// User-Agent에서 브라우저 이름을 추출합니다.
///
/// Chrome 계열 브라우저(Edge, Whale, Opera)는 UA에 "Chrome"도 함께
/// 포함하므로 구체적인 패턴을 먼저 검사합니다.
pub fn browser_from_user_agent(user_agent: &str) -> String {
    let ua = user_agent.to_lowercase();

    let browser = if ua.contains("edg/") || ua.contains("edge") {
        "Edge"
    } else if ua.contains("whale") {
        "Whale"
    } else if ua.contains("opr/") || ua.contains("opera") {
        "Opera"
    } else if ua.contains("samsungbrowser") {
        "Samsung Browser"
    } else if ua.contains("chrome") {
        "Chrome"
    } else if ua.contains("firefox") {
        "Firefox"
    } else if ua.contains("safari") {
        "Safari"
    } else if ua.contains("trident") || ua.contains("msie") {
        "Internet Explorer"
    } else {
        "Unknown"
    };

    browser.to_string()
}

/// User-Agent에서 운영체제 이름을 추출합니다.
///
/// iOS 기기의 UA에는 "like Mac OS X"가 포함되므로 모바일 패턴을 먼저 검사합니다.
pub fn os_from_user_agent(user_agent: &str) -> String {
    let ua = user_agent.to_lowercase();

    let os = if ua.contains("iphone") || ua.contains("ipad") || ua.contains("ipod") {
        "iOS"
    } else if ua.contains("android") {
        "Android"
    } else if ua.contains("windows") {
        "Windows"
    } else if ua.contains("mac os") || ua.contains("macintosh") {
        "macOS"
    } else if ua.contains("linux") {
        "Linux"
    } else {
        "Unknown"
    };

    os.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    const CHROME_WINDOWS: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/126.0.0.0 Safari/537.36";
    const EDGE_WINDOWS: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/126.0.0.0 Safari/537.36 Edg/126.0.0.0";
    const SAFARI_IPHONE: &str = "Mozilla/5.0 (iPhone; CPU iPhone OS 17_5 like Mac OS X) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.5 Mobile/15E148 Safari/604.1";
    const FIREFOX_LINUX: &str = "Mozilla/5.0 (X11; Linux x86_64; rv:127.0) Gecko/20100101 Firefox/127.0";

    #[test]
    fn test_browser_detection() {
        assert_eq!(browser_from_user_agent(CHROME_WINDOWS), "Chrome");
        assert_eq!(browser_from_user_agent(EDGE_WINDOWS), "Edge");
        assert_eq!(browser_from_user_agent(SAFARI_IPHONE), "Safari");
        assert_eq!(browser_from_user_agent(FIREFOX_LINUX), "Firefox");
        assert_eq!(browser_from_user_agent(""), "Unknown");
    }

    #[test]
    fn test_os_detection() {
        assert_eq!(os_from_user_agent(CHROME_WINDOWS), "Windows");
        assert_eq!(os_from_user_agent(SAFARI_IPHONE), "iOS");
        assert_eq!(os_from_user_agent(FIREFOX_LINUX), "Linux");
        assert_eq!(os_from_user_agent(""), "Unknown");
    }

    #[test]
    fn test_client_ip_prefers_forwarded_header() {
        let req = actix_web::test::TestRequest::default()
            .insert_header(("X-Forwarded-For", "203.0.113.10, 10.0.0.1"))
            .to_http_request();

        assert_eq!(client_ip(&req), "203.0.113.10");
    }

    #[test]
    fn test_device_info_from_request() {
        let req = actix_web::test::TestRequest::default()
            .insert_header(("User-Agent", CHROME_WINDOWS))
            .insert_header(("X-Forwarded-For", "198.51.100.7"))
            .to_http_request();

        let info = DeviceInfo::from_request(&req);

        assert_eq!(info.browser, "Chrome");
        assert_eq!(info.os, "Windows");
        assert_eq!(info.ip_address, "198.51.100.7");
        assert_eq!(info.header, CHROME_WINDOWS);
    }
}
