//! JavaScript binding.

use crate::genesis::{LayoutOptimizer, OptimizeRequest, RequestLimits};
use wasm_bindgen::prelude::*;

/// Validates and optimizes a request given as a plain JS object.
///
/// The request and result use the camelCase wire format. Requests outside
/// the default [`RequestLimits`] are rejected with an error string.
#[wasm_bindgen(js_name = optimizeLayout)]
pub fn optimize_layout(request: JsValue) -> Result<JsValue, JsValue> {
    let request: OptimizeRequest = serde_wasm_bindgen::from_value(request)?;
    RequestLimits::default()
        .validate(&request)
        .map_err(|err| JsValue::from_str(&err.to_string()))?;
    let result = LayoutOptimizer::optimize(&request);
    Ok(serde_wasm_bindgen::to_value(&result)?)
}
