//! User-agent sniffing.
//!
//! All checks are case-insensitive substring matches against the raw
//! user-agent string.

use std::fmt;

use crate::config::user_agent::{ANDROID_TOKEN, APPLE_TOKENS, APP_TOKEN, WECHAT_TOKEN};

/// Device family a request originates from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeviceFamily {
    Apple,
    Android,
    Pc,
}

impl DeviceFamily {
    /// Label used by the rest of the application.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Apple => "Apple",
            Self::Android => "Android",
            Self::Pc => "PC",
        }
    }
}

impl fmt::Display for DeviceFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// True when running inside the native app's webview.
pub fn is_app(user_agent: &str) -> bool {
    user_agent.to_ascii_lowercase().contains(APP_TOKEN)
}

/// True when running inside WeChat's in-app browser.
pub fn is_wechat(user_agent: &str) -> bool {
    user_agent.to_ascii_lowercase().contains(WECHAT_TOKEN)
}

/// Classify the device family. Apple tokens are checked before Android.
pub fn user_source(user_agent: &str) -> DeviceFamily {
    let ua = user_agent.to_ascii_lowercase();

    if APPLE_TOKENS.iter().any(|token| ua.contains(token)) {
        DeviceFamily::Apple
    } else if ua.contains(ANDROID_TOKEN) {
        DeviceFamily::Android
    } else {
        DeviceFamily::Pc
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const IPHONE_UA: &str = "Mozilla/5.0 (iPhone; CPU iPhone OS 16_0 like Mac OS X) \
        AppleWebKit/605.1.15 (KHTML, like Gecko) Mobile/15E148";
    const ANDROID_UA: &str = "Mozilla/5.0 (Linux; Android 13; Pixel 7) \
        AppleWebKit/537.36 (KHTML, like Gecko) Chrome/116.0 Mobile Safari/537.36";
    const DESKTOP_UA: &str = "Mozilla/5.0 (X11; Linux x86_64; rv:118.0) Gecko/20100101 Firefox/118.0";
    const WECHAT_UA: &str = "Mozilla/5.0 (Linux; Android 10) MicroMessenger/8.0.40";

    #[test]
    fn test_user_source() {
        assert_eq!(user_source(IPHONE_UA), DeviceFamily::Apple);
        assert_eq!(user_source("Mozilla/5.0 (iPad; CPU OS 15_0)"), DeviceFamily::Apple);
        assert_eq!(user_source(ANDROID_UA), DeviceFamily::Android);
        assert_eq!(user_source(DESKTOP_UA), DeviceFamily::Pc);
        assert_eq!(user_source(""), DeviceFamily::Pc);
    }

    #[test]
    fn test_apple_checked_first() {
        assert_eq!(user_source("android ipod hybrid"), DeviceFamily::Apple);
    }

    #[test]
    fn test_wechat_detection() {
        assert!(is_wechat(WECHAT_UA));
        assert!(is_wechat("micromessenger"));
        assert!(!is_wechat(DESKTOP_UA));
    }

    #[test]
    fn test_app_detection() {
        assert!(is_app("Mozilla/5.0 MyShop/APP 3.2"));
        assert!(is_app("shopapp"));
        assert!(!is_app(DESKTOP_UA));
        // Substring match: WebKit's "AppleWebKit" contains "app".
        assert!(is_app(IPHONE_UA));
    }

    #[test]
    fn test_device_family_labels() {
        assert_eq!(DeviceFamily::Apple.to_string(), "Apple");
        assert_eq!(DeviceFamily::Android.to_string(), "Android");
        assert_eq!(DeviceFamily::Pc.to_string(), "PC");
    }
}
