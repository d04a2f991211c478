//! Library configuration.
//!
//! Centralizes the default values and lookup tokens used by the helpers.

// =============================================================================
// Countdown Configuration
// =============================================================================

/// Countdown defaults.
pub mod countdown {
    /// Amount subtracted from the count on every tick.
    pub const DEFAULT_STEP: f64 = 1.0;
    /// Interval between timed ticks in milliseconds.
    pub const DEFAULT_INTERVAL_MS: u32 = 1000;
}

// =============================================================================
// Scroll Animation Configuration
// =============================================================================

/// Scroll animation tuning.
pub mod scroll {
    /// Default scroll speed in pixels per second.
    pub const DEFAULT_SPEED: f64 = 2000.0;
    /// Default scroll target (top of the page).
    pub const DEFAULT_TARGET_Y: f64 = 0.0;
    /// Shortest animation duration in seconds.
    pub const MIN_DURATION_SECS: f64 = 0.1;
    /// Longest animation duration in seconds.
    pub const MAX_DURATION_SECS: f64 = 0.8;
    /// Simulated time advanced per animation frame, in seconds.
    pub const FRAME_STEP_SECS: f64 = 1.0 / 60.0;
}

// =============================================================================
// Date Range Configuration
// =============================================================================

/// Output format labels for each date range period.
pub mod date_format {
    pub const DAYS: &str = "YYYY-MM-DD";
    pub const WEEKS: &str = "YYYY-WW";
    pub const MONTHS: &str = "YYYY-MM";
}

// =============================================================================
// User-Agent Tokens
// =============================================================================

/// Lowercase user-agent tokens used for environment detection.
pub mod user_agent {
    /// Marker injected by the native app's embedded webview.
    pub const APP_TOKEN: &str = "app";
    /// Marker for the WeChat in-app browser.
    pub const WECHAT_TOKEN: &str = "micromessenger";
    /// Any of these identifies an Apple device.
    pub const APPLE_TOKENS: &[&str] = &["iphone", "ipad", "ipod", "ios"];
    /// Identifies an Android device.
    pub const ANDROID_TOKEN: &str = "android";
}

// =============================================================================
// Phone Validation
// =============================================================================

/// Length of a mainland mobile number.
pub const PHONE_LENGTH: usize = 11;
