//! Type checks for values crossing the JavaScript boundary.

use wasm_bindgen::JsValue;

/// True if `value` is `undefined` (not `null`).
pub fn is_undef(value: &JsValue) -> bool {
    value.is_undefined()
}

/// True if `value` is callable.
pub fn is_func(value: &JsValue) -> bool {
    value.is_function()
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::wasm_bindgen_test;

    #[wasm_bindgen_test]
    fn test_is_undef() {
        assert!(is_undef(&JsValue::UNDEFINED));
        assert!(!is_undef(&JsValue::NULL));
        assert!(!is_undef(&JsValue::from_f64(0.0)));
    }

    #[wasm_bindgen_test]
    fn test_is_func() {
        let func = js_sys::Function::new_no_args("return 1");
        assert!(is_func(&func));
        assert!(!is_func(&JsValue::from_str("function")));
    }
}
