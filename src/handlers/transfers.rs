use axum::{http::StatusCode, Json};
use serde_json::{json, Value};

// ─── POST /transfer ──────────────────────────────────────────────

/// Accepts any JSON object and validates it by hand: `from`, `to` and
/// `amount` must all be present and truthy (JS semantics — `null`, `false`,
/// `0` and `""` all count as missing). The raw body is kept around so the
/// warn event can carry it verbatim.
pub async fn post_transfer(Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
    let from = body.get("from");
    let to = body.get("to");
    let amount = body.get("amount");

    if !(is_truthy(from) && is_truthy(to) && is_truthy(amount)) {
        tracing::warn!(body = %body, "invalid_transfer_request");
        return (StatusCode::BAD_REQUEST, Json(json!({ "error": "invalid" })));
    }

    // Simulated transfer — nothing is stored, the event *is* the effect.
    tracing::info!(
        from = %from.unwrap_or(&serde_json::Value::Null),
        to = %to.unwrap_or(&serde_json::Value::Null),
        amount = %amount.unwrap_or(&serde_json::Value::Null),
        "transfer"
    );
    (StatusCode::OK, Json(json!({ "status": "success" })))
}

/// JavaScript truthiness for a JSON value that may be absent.
fn is_truthy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(_)) | Some(Value::Object(_)) => true,
    }
}

// ─── Tests ───────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_and_null_are_falsy() {
        assert!(!is_truthy(None));
        assert!(!is_truthy(Some(&serde_json::Value::Null)));
    }

    #[test]
    fn zero_false_and_empty_string_are_falsy() {
        assert!(!is_truthy(Some(&json!(0))));
        assert!(!is_truthy(Some(&json!(0.0))));
        assert!(!is_truthy(Some(&json!(false))));
        assert!(!is_truthy(Some(&json!(""))));
    }

    #[test]
    fn nonzero_values_are_truthy() {
        assert!(is_truthy(Some(&json!(10))));
        assert!(is_truthy(Some(&json!(-1.5))));
        assert!(is_truthy(Some(&json!("alice"))));
        assert!(is_truthy(Some(&json!(true))));
        assert!(is_truthy(Some(&json!([])))); // arrays are objects in JS
        assert!(is_truthy(Some(&json!({}))));
    }
}
