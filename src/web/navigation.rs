//! Page navigation dispatch.

use serde::{Deserialize, Deserializer};

use crate::host::Host;

/// Where and how [`go_h5`] navigates.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoH5Options {
    /// Hash route (e.g. `/orders/7`) or full URL.
    pub url: String,
    /// Open as a new history entry (`true`) or replace the current one.
    #[serde(default = "default_true", deserialize_with = "truthy")]
    pub new_page: bool,
    /// Treat `url` as a hash-router path rather than a full URL.
    #[serde(default = "default_true", deserialize_with = "truthy")]
    pub is_hash_route: bool,
}

impl GoH5Options {
    /// Options with the defaults: new history entry, hash route.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            new_page: true,
            is_hash_route: true,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Accept booleans or numbers (`1`/`0`) with JavaScript truthiness.
fn truthy<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Bool(bool),
        Number(f64),
    }

    Ok(match Flag::deserialize(deserializer)? {
        Flag::Bool(b) => b,
        Flag::Number(n) => n != 0.0 && !n.is_nan(),
    })
}

/// Navigate according to `options`.
///
/// | new_page | is_hash_route | action                              |
/// |----------|---------------|-------------------------------------|
/// | true     | true          | set hash to `#<url>`                |
/// | true     | false         | assign `url`                        |
/// | false    | true          | replace with `<origin>/#<url>`      |
/// | false    | false         | replace with `url`                  |
pub fn go_h5<H: Host>(host: &H, options: &GoH5Options) {
    let url = &options.url;

    match (options.new_page, options.is_hash_route) {
        (true, true) => host.set_hash(&format!("#{}", url)),
        (true, false) => host.assign(url),
        (false, true) => {
            let origin = host.location().origin;
            host.replace(&format!("{}/#{}", origin, url));
        }
        (false, false) => host.replace(url),
    }
}
