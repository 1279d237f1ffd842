use calculator_sdk::{OperationRequest, RawValue};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Body of `POST /api/calculate`.
///
/// Fields keep their raw JSON value so that "absent" and "null" stay distinct.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CalculateRequest {
    #[serde(default, deserialize_with = "present")]
    pub operation: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub a: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub b: Option<Value>,
}

/// Successful calculation.
#[derive(Debug, Clone, Serialize)]
pub struct CalculateResponse {
    #[serde(serialize_with = "poc_api::number::serialize_number")]
    pub result: f64,
}

/// A field that appears in the payload is `Some`, even when it is `null`.
fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

fn raw_value(value: Value) -> RawValue {
    match value {
        Value::Null => RawValue::Null,
        Value::Bool(b) => RawValue::Bool(b),
        Value::Number(n) => RawValue::Number(n.as_f64().unwrap_or(f64::NAN)),
        Value::String(s) => RawValue::Text(s),
        Value::Array(_) | Value::Object(_) => RawValue::Structured,
    }
}

impl From<CalculateRequest> for OperationRequest {
    fn from(req: CalculateRequest) -> Self {
        OperationRequest::new(
            req.operation.map(raw_value),
            req.a.map(raw_value),
            req.b.map(raw_value),
        )
    }
}
