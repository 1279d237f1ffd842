use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};
use users_info_sdk::{User, UserId};

/// REST representation of a user.
#[derive(Debug, Clone, Serialize)]
pub struct UserDto {
    pub id: UserId,
    pub name: String,
    pub email: String,
}

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
        }
    }
}

/// Body of `POST /api/users`. Fields are kept loose so that any falsy value
/// (`null`, `false`, `0`, `""`) reads as "not provided".
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateUserRequest {
    #[serde(default)]
    pub name: Option<Value>,
    #[serde(default)]
    pub email: Option<Value>,
}

impl CreateUserRequest {
    /// Name and email as sent, or `None` when either is missing or falsy.
    #[must_use]
    pub fn into_fields(self) -> Option<(Value, Value)> {
        let name = self.name.filter(is_truthy)?;
        let email = self.email.filter(is_truthy)?;
        Some((name, email))
    }
}

/// Response of `POST /api/users`. Name and email are echoed exactly as they
/// were submitted, whatever their JSON type.
#[derive(Debug, Clone, Serialize)]
pub struct CreatedUserDto {
    pub id: UserId,
    pub name: Value,
    pub email: Value,
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null | Value::Bool(false) => false,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Bool(true) | Value::Array(_) | Value::Object(_) => true,
    }
}

/// Text form of a loosely typed value, as matched against the email pattern:
/// strings as-is, integral numbers without a fraction, array elements joined
/// with commas (`null` elements empty), objects as `[object Object]`.
#[must_use]
pub fn as_text(value: &Value) -> String {
    match value {
        Value::Null => "null".to_owned(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => number_text(n),
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::Null => String::new(),
                other => as_text(other),
            })
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_owned(),
    }
}

fn number_text(n: &Number) -> String {
    match n.as_f64() {
        Some(f) if n.is_f64() && f == 0.0 => "0".to_owned(),
        Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() < 1e21 => format!("{f:.0}"),
        _ => n.to_string(),
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]

    use super::*;
    use serde_json::json;

    fn parse(body: Value) -> Option<(Value, Value)> {
        serde_json::from_value::<CreateUserRequest>(body)
            .unwrap()
            .into_fields()
    }

    #[test]
    fn string_fields_pass_through() {
        let (name, email) = parse(json!({"name": "Alice", "email": "alice@example.com"})).unwrap();
        assert_eq!(name, "Alice");
        assert_eq!(email, "alice@example.com");
    }

    #[test]
    fn falsy_fields_are_missing() {
        for body in [
            json!({}),
            json!({"name": "Alice"}),
            json!({"email": "a@b.co"}),
            json!({"name": "", "email": "a@b.co"}),
            json!({"name": null, "email": "a@b.co"}),
            json!({"name": 0, "email": "a@b.co"}),
            json!({"name": 0.0, "email": "a@b.co"}),
            json!({"name": false, "email": "a@b.co"}),
        ] {
            assert!(parse(body.clone()).is_none(), "{body}");
        }
    }

    #[test]
    fn truthy_non_strings_keep_their_type() {
        let (name, email) = parse(json!({"name": 42, "email": ["a@b.co"]})).unwrap();
        assert_eq!(name, json!(42));
        assert_eq!(email, json!(["a@b.co"]));

        let (name, _) = parse(json!({"name": [], "email": "a@b.co"})).unwrap();
        assert_eq!(name, json!([]));
    }

    #[test]
    fn text_form_of_values() {
        assert_eq!(as_text(&json!("a@b.co")), "a@b.co");
        assert_eq!(as_text(&json!(true)), "true");
        assert_eq!(as_text(&json!(42)), "42");
        assert_eq!(as_text(&json!(1.0)), "1");
        assert_eq!(as_text(&json!(2.5)), "2.5");
        assert_eq!(as_text(&json!(["a@b.co"])), "a@b.co");
        assert_eq!(as_text(&json!(["a", null, 1, ["b", "c"]])), "a,,1,b,c");
        assert_eq!(as_text(&json!({"x": 1})), "[object Object]");
    }

    #[test]
    fn created_dto_echoes_values() {
        let dto = CreatedUserDto {
            id: 7,
            name: json!(42),
            email: json!(["a@b.co"]),
        };
        assert_eq!(
            serde_json::to_string(&dto).unwrap(),
            r#"{"id":7,"name":42,"email":["a@b.co"]}"#
        );
    }

    #[test]
    fn dto_serializes_in_field_order() {
        let dto = UserDto::from(User {
            id: 1,
            name: "John Doe".to_owned(),
            email: "john@example.com".to_owned(),
        });
        assert_eq!(
            serde_json::to_string(&dto).unwrap(),
            r#"{"id":1,"name":"John Doe","email":"john@example.com"}"#
        );
    }
}
