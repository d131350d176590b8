use wasm_bindgen::prelude::*;

use crate::decoder;
use crate::kind::{CODE_TABLE, ErrorKind};
use crate::types::DecodedError;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = JSON)]
    fn parse(s: &str) -> JsValue;
}

fn to_js(value: &serde_json::Value) -> JsValue {
    match serde_json::to_string(value) {
        Ok(json_str) => parse(&json_str),
        Err(_) => JsValue::NULL,
    }
}

fn describe_link(err: &DecodedError) -> serde_json::Value {
    match err {
        DecodedError::Generic(e) => serde_json::json!({
            "type": "generic",
            "message": e.message(),
        }),
        DecodedError::Structured(e) => serde_json::json!({
            "type": "structured",
            "kind": e.kind().to_string(),
            "code": e.kind().code(),
            "message": e.message(),
        }),
    }
}

fn describe(err: &DecodedError) -> serde_json::Value {
    let chain: Vec<serde_json::Value> = err.chain().map(describe_link).collect();
    serde_json::json!({
        "display": err.to_string(),
        "retriable": err.is_retriable(),
        "httpStatus": err.kind().map(ErrorKind::http_status_code),
        "chain": chain,
    })
}

/// Decode a JSON error payload. Returns `null` when the payload carries no error.
#[wasm_bindgen]
pub fn decode_error(json: &str) -> JsValue {
    match decoder::decode_json(json) {
        Ok(Some(err)) => to_js(&describe(&err)),
        Ok(None) => JsValue::NULL,
        Err(_) => error_result("Invalid JSON"),
    }
}

/// Kind identifier (e.g. `"not_found"`) for a textual error code.
#[wasm_bindgen]
pub fn classify_code(code: &str) -> String {
    ErrorKind::from_code(code).to_string()
}

/// Returns the code classification table as `[{code, kind}]`.
#[wasm_bindgen]
pub fn get_code_table() -> JsValue {
    let rows: Vec<serde_json::Value> = CODE_TABLE
        .iter()
        .map(|(code, kind)| {
            serde_json::json!({
                "code": code,
                "kind": kind.to_string(),
            })
        })
        .collect();
    to_js(&serde_json::Value::Array(rows))
}

fn error_result(msg: &str) -> JsValue {
    let obj = serde_json::json!({"error": msg});
    to_js(&obj)
}
