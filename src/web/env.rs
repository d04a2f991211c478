//! Helpers that read the current browser environment.

use crate::core::{device, url};
use crate::core::device::DeviceFamily;
use crate::host::Host;

/// True when the page runs inside the native app's webview.
pub fn get_run_time_env_is_app<H: Host>(host: &H) -> bool {
    device::is_app(&host.user_agent())
}

/// True when the page runs inside WeChat.
pub fn get_run_time_env_is_wx<H: Host>(host: &H) -> bool {
    device::is_wechat(&host.user_agent())
}

/// Device family of the current visitor.
pub fn user_source<H: Host>(host: &H) -> DeviceFamily {
    device::user_source(&host.user_agent())
}

/// Query string of the current hash route (`?a=1`), or empty.
pub fn get_hash_router_query_string<H: Host>(host: &H) -> String {
    url::hash_router_query_string(&host.location().hash)
}

/// Path, query and fragment of the current location.
pub fn get_full_path<H: Host>(host: &H) -> String {
    host.location().full_path()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::MockHost;

    #[test]
    fn test_reads_user_agent_from_host() {
        let host = MockHost::new()
            .with_user_agent("Mozilla/5.0 (iPhone; CPU iPhone OS 17_0) MicroMessenger/8.0");

        assert!(get_run_time_env_is_wx(&host));
        assert!(!get_run_time_env_is_app(&host));
        assert_eq!(user_source(&host), DeviceFamily::Apple);
    }

    #[test]
    fn test_reads_location_from_host() {
        let host = MockHost::new().with_location("https://m.example.com/shop?ref=1#/cart?coupon=X1");

        assert_eq!(get_hash_router_query_string(&host), "?coupon=X1");
        assert_eq!(get_full_path(&host), "/shop?ref=1#/cart?coupon=X1");
    }
}
