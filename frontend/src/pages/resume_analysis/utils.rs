use serde_json::Value;

const SCORE_KEYS: [&str; 2] = ["match_score", "score"];

/// Numeric score the analysis service reports, if any.
pub fn headline_score(payload: &Value) -> Option<f64> {
    SCORE_KEYS
        .iter()
        .find_map(|key| payload.get(*key).and_then(Value::as_f64))
}

pub fn pretty_payload(payload: &Value) -> String {
    serde_json::to_string_pretty(payload).unwrap_or_else(|_| payload.to_string())
}
