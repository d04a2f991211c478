//! Mainland China mobile number validation.
//!
//! A number is valid when it is exactly 11 characters after trimming and
//! matches the numbering plan of one of the three carriers.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::config::PHONE_LENGTH;

/// Mobile network operator owning a number prefix.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Carrier {
    /// 134-139, 147, 150-152, 157-159, 178, 182-184, 187, 188, 1705
    ChinaMobile,
    /// 130-132, 145, 155, 156, 171, 175, 176, 185, 186, 1704, 1707-1709
    ChinaUnicom,
    /// 133, 149, 153, 173, 177, 180, 181, 189, 1700-1702
    ChinaTelecom,
}

impl fmt::Display for Carrier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ChinaMobile => write!(f, "China Mobile"),
            Self::ChinaUnicom => write!(f, "China Unicom"),
            Self::ChinaTelecom => write!(f, "China Telecom"),
        }
    }
}

// `[0-9]` rather than `\d`: the regex crate is built without Unicode tables.
static CHINA_MOBILE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:13[4-9]|147|15[0-27-9]|178|18[2-47-8])[0-9]{8}$|^1705[0-9]{7}$")
        .expect("valid China Mobile pattern")
});

static CHINA_UNICOM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:13[0-2]|145|15[56]|17[156]|18[56])[0-9]{8}$|^170[47-9][0-9]{7}$")
        .expect("valid China Unicom pattern")
});

static CHINA_TELECOM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:133|149|153|17[37]|18[019])[0-9]{8}$|^170[0-2][0-9]{7}$")
        .expect("valid China Telecom pattern")
});

/// Find the carrier whose numbering plan matches `phone`.
///
/// Accepts anything printable (`&str`, `String`, integers). Carriers are
/// tried in the order Mobile, Unicom, Telecom.
pub fn carrier_of(phone: impl fmt::Display) -> Option<Carrier> {
    let phone = phone.to_string();
    let phone = phone.trim();

    if phone.chars().count() != PHONE_LENGTH {
        return None;
    }

    [
        (Carrier::ChinaMobile, &*CHINA_MOBILE),
        (Carrier::ChinaUnicom, &*CHINA_UNICOM),
        (Carrier::ChinaTelecom, &*CHINA_TELECOM),
    ]
    .into_iter()
    .find(|(_, pattern)| pattern.is_match(phone))
    .map(|(carrier, _)| carrier)
}

/// Check whether `phone` is a valid mobile number.
pub fn validate_phone(phone: impl fmt::Display) -> bool {
    carrier_of(phone).is_some()
}
