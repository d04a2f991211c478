//! JavaScript exports.
//!
//! Mirrors the helper names the front-end already calls (`validatePhone`,
//! `countDown`, ...). Errors surface as thrown `Error`s, async helpers
//! return Promises.

use js_sys::{Array, Function, Promise, Reflect};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::future_to_promise;

use crate::core::{self, Padded, Period};
use crate::core::error::DateRangeError;
use crate::host::{BrowserHost, ImageFailure};
use crate::models::Location;
use crate::utils::{self, dom};
use crate::web::{self, CountDownOptions, Easing, GoH5Options, ScrollOptions, Subscription};

#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

fn host() -> Result<BrowserHost, JsError> {
    BrowserHost::new().map_err(|e| JsError::new(&e.to_string()))
}

// =============================================================================
// Predicates and validation
// =============================================================================

#[wasm_bindgen(js_name = isUndef)]
pub fn is_undef(value: JsValue) -> bool {
    utils::is_undef(&value)
}

#[wasm_bindgen(js_name = isFunc)]
pub fn is_func(value: JsValue) -> bool {
    utils::is_func(&value)
}

/// Accepts a string or a number.
#[wasm_bindgen(js_name = validatePhone)]
pub fn validate_phone(phone: JsValue) -> bool {
    if let Some(n) = phone.as_f64() {
        core::validate_phone(n)
    } else if let Some(s) = phone.as_string() {
        core::validate_phone(s)
    } else {
        false
    }
}

// =============================================================================
// Environment
// =============================================================================

#[wasm_bindgen(js_name = getRunTimeEnvIsApp)]
pub fn get_run_time_env_is_app() -> Result<bool, JsError> {
    Ok(web::get_run_time_env_is_app(&host()?))
}

#[wasm_bindgen(js_name = getRunTimeEnvIsWx)]
pub fn get_run_time_env_is_wx() -> Result<bool, JsError> {
    Ok(web::get_run_time_env_is_wx(&host()?))
}

/// `"Apple"`, `"Android"` or `"PC"`.
#[wasm_bindgen(js_name = userSource)]
pub fn user_source() -> Result<String, JsError> {
    Ok(web::user_source(&host()?).to_string())
}

// =============================================================================
// URL helpers
// =============================================================================

/// Takes any location-like object with `pathname`, `search` and `hash`.
#[wasm_bindgen(js_name = getFullPath)]
pub fn get_full_path(location: JsValue) -> String {
    let field = |name: &str| {
        Reflect::get(&location, &name.into())
            .ok()
            .and_then(|v| v.as_string())
            .unwrap_or_default()
    };

    Location {
        pathname: field("pathname"),
        search: field("search"),
        hash: field("hash"),
        origin: String::new(),
    }
    .full_path()
}

#[wasm_bindgen(js_name = getHashRouterQueryString)]
pub fn get_hash_router_query_string() -> Result<String, JsError> {
    Ok(web::get_hash_router_query_string(&host()?))
}

#[wasm_bindgen(js_name = ensureTailHasSlash)]
pub fn ensure_tail_has_slash(s: &str) -> String {
    core::ensure_tail_has_slash(s)
}

#[wasm_bindgen(js_name = ensureCapitalHasNotSlash)]
pub fn ensure_capital_has_not_slash(s: &str) -> String {
    core::ensure_capital_has_not_slash(s).to_string()
}

#[wasm_bindgen]
pub fn uuid() -> String {
    core::uuid()
}

// =============================================================================
// Loaders
// =============================================================================

/// Resolves with `undefined`; rejects with `undefined`.
#[wasm_bindgen(js_name = insertScript)]
pub fn insert_script(src: String) -> Result<Promise, JsError> {
    let host = host()?;
    Ok(future_to_promise(async move {
        web::insert_script(&host, &src)
            .await
            .map(|()| JsValue::UNDEFINED)
            .map_err(|_| JsValue::UNDEFINED)
    }))
}

/// Resolves with the `HTMLImageElement`; rejects with the image's `error`
/// event.
#[wasm_bindgen(js_name = loadImage)]
pub fn load_image(src: String) -> Result<Promise, JsError> {
    let host = host()?;
    let image = host.fetch_image(&src);
    Ok(future_to_promise(async move {
        image.await.map(JsValue::from).map_err(|failure| match failure {
            ImageFailure::Event { event, .. } => event,
            ImageFailure::Host(e) => JsError::new(&e.to_string()).into(),
        })
    }))
}

// =============================================================================
// Formatting
// =============================================================================

/// `period` is required; see [`core::date_range`].
#[wasm_bindgen(js_name = dateRange)]
pub fn date_range(start: &str, end: &str, period: Option<String>) -> Result<Array, JsError> {
    let period: Period = period
        .ok_or(DateRangeError::MissingPeriod)
        .and_then(|p| p.parse())?;

    Ok(core::date_range_by(start, end, period)?
        .into_iter()
        .map(JsValue::from)
        .collect())
}

/// Returns `"0n"` for numbers below ten, otherwise the number itself.
#[wasm_bindgen(js_name = paddingZero)]
pub fn padding_zero(num: f64) -> JsValue {
    if num.fract() != 0.0 || !num.is_finite() {
        return if num < 10.0 {
            JsValue::from_str(&format!("0{}", num))
        } else {
            JsValue::from_f64(num)
        };
    }

    match core::padding_zero(num as i64) {
        Padded::Text(text) => JsValue::from_str(&text),
        Padded::Number(n) => JsValue::from_f64(n as f64),
    }
}

// =============================================================================
// Timed effects and navigation
// =============================================================================

/// Handle returned by `countDown`.
#[wasm_bindgen]
pub struct CountDown {
    subscription: Subscription<BrowserHost>,
}

#[wasm_bindgen]
impl CountDown {
    pub fn unsubscribe(&self) {
        self.subscription.unsubscribe();
    }
}

#[wasm_bindgen(js_name = countDown)]
pub fn count_down(
    count: f64,
    callback: Option<Function>,
    step: Option<f64>,
    interval: Option<u32>,
) -> Result<CountDown, JsError> {
    let host = host()?;
    let options = count_down_options(step, interval);

    let callback = callback.map(|func| {
        move |n: f64| {
            if let Err(e) = func.call1(&JsValue::NULL, &JsValue::from_f64(n)) {
                web_sys::console::error_1(&e);
            }
        }
    });

    Ok(CountDown {
        subscription: web::count_down(&host, count, callback, options),
    })
}

fn count_down_options(step: Option<f64>, interval: Option<u32>) -> CountDownOptions {
    let defaults = CountDownOptions::default();
    CountDownOptions {
        step: step.unwrap_or(defaults.step),
        interval_ms: interval.unwrap_or(defaults.interval_ms),
    }
}

/// Resolves once the window reaches `targetY`.
#[wasm_bindgen(js_name = scrollToY)]
pub fn scroll_to_y(
    target_y: Option<f64>,
    speed: Option<f64>,
    easing: Option<String>,
) -> Result<Promise, JsError> {
    let defaults = ScrollOptions::default();
    let easing = match easing {
        Some(name) => name.parse::<Easing>().inspect_err(|e| dom::warn(&e.to_string()))?,
        None => defaults.easing,
    };

    let host = host()?;
    let options = ScrollOptions {
        target_y: target_y.unwrap_or(defaults.target_y),
        speed: speed.unwrap_or(defaults.speed),
        easing,
    };

    let animation = web::scroll_to_y(&host, options);
    Ok(future_to_promise(async move {
        animation.await;
        Ok(JsValue::UNDEFINED)
    }))
}

/// `options`: `{ url, newPage = 1, isHashRoute = true }`.
#[wasm_bindgen(js_name = goH5)]
pub fn go_h5(options: JsValue) -> Result<(), JsError> {
    let options = go_h5_options(options)?;
    web::go_h5(&host()?, &options);
    Ok(())
}

fn go_h5_options(options: JsValue) -> Result<GoH5Options, JsError> {
    serde_wasm_bindgen::from_value(options).map_err(|e| JsError::new(&e.to_string()))
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use js_sys::JSON;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::wasm_bindgen_test;

    fn message(err: JsError) -> String {
        JsValue::from(err)
            .dyn_into::<js_sys::Error>()
            .map(|e| String::from(e.message()))
            .unwrap_or_default()
    }

    fn json(text: &str) -> JsValue {
        JSON::parse(text).unwrap()
    }

    #[wasm_bindgen_test]
    fn test_validate_phone_accepts_numbers_and_strings() {
        assert!(validate_phone(JsValue::from_f64(13912345678.0)));
        assert!(validate_phone(JsValue::from_str(" 18612345678 ")));
        assert!(!validate_phone(JsValue::from_f64(1391234567.0)));
        assert!(!validate_phone(JsValue::NULL));
        assert!(!validate_phone(JsValue::UNDEFINED));
    }

    #[wasm_bindgen_test]
    fn test_padding_zero_integers() {
        assert_eq!(padding_zero(5.0).as_string().as_deref(), Some("05"));
        assert_eq!(padding_zero(0.0).as_string().as_deref(), Some("00"));
        assert_eq!(padding_zero(12.0).as_f64(), Some(12.0));
    }

    #[wasm_bindgen_test]
    fn test_padding_zero_non_integers() {
        assert_eq!(padding_zero(2.5).as_string().as_deref(), Some("02.5"));
        assert_eq!(padding_zero(10.5).as_f64(), Some(10.5));
        assert!(padding_zero(f64::NAN).as_f64().is_some_and(f64::is_nan));
    }

    #[wasm_bindgen_test]
    fn test_date_range_requires_period() {
        let err = date_range("2021-01-01", "2021-01-03", None).unwrap_err();
        assert_eq!(message(err), "The argument `period` is Required.");

        let days = date_range("2021-01-01", "2021-01-03", Some("d".to_string())).unwrap();
        assert_eq!(days.length(), 3);
        assert_eq!(days.get(2).as_string().as_deref(), Some("2021-01-03"));
    }

    #[wasm_bindgen_test]
    fn test_date_range_unknown_period_throws() {
        assert!(date_range("2021-01-01", "2021-01-03", Some("years".to_string())).is_err());
    }

    #[wasm_bindgen_test]
    fn test_go_h5_options_truthiness() {
        let options = go_h5_options(json(r#"{"url":"/orders"}"#)).unwrap();
        assert_eq!(options, GoH5Options::new("/orders"));

        let options = go_h5_options(json(r#"{"url":"/a","newPage":0,"isHashRoute":false}"#)).unwrap();
        assert!(!options.new_page);
        assert!(!options.is_hash_route);

        let options = go_h5_options(json(r#"{"url":"/a","newPage":1}"#)).unwrap();
        assert!(options.new_page);

        assert!(go_h5_options(json(r#"{"newPage":1}"#)).is_err());
    }

    #[wasm_bindgen_test]
    fn test_scroll_to_y_unknown_easing_throws() {
        let err = scroll_to_y(None, None, Some("bounce".to_string())).unwrap_err();
        assert_eq!(message(err), "unknown easing 'bounce'");
    }

    #[wasm_bindgen_test]
    fn test_count_down_options_keep_fractional_step() {
        let options = count_down_options(Some(0.5), None);
        assert_eq!(options.step, 0.5);
        assert_eq!(options.interval_ms, 1000);
        assert_eq!(count_down_options(None, Some(250)).step, 1.0);
    }
}
