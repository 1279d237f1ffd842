//! Number rendering for JSON responses.
//!
//! Results are computed as `f64`, but clients expect integral values to come
//! back as integers (`8`, not `8.0`) and non-finite values as `null`.

use serde::Serializer;

/// Largest integer an `f64` represents exactly (2^53 - 1).
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// Serialize an `f64` the way a JSON client reads numbers:
/// integral values within the exact range as integers, `NaN`/`±inf` as `null`.
///
/// # Errors
/// Propagates serializer errors.
#[allow(clippy::trivially_copy_pass_by_ref)] // serde requires &T signature
pub fn serialize_number<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let v = *value;
    if !v.is_finite() {
        return serializer.serialize_unit();
    }
    if v.fract() == 0.0 && v.abs() <= MAX_SAFE_INTEGER {
        #[allow(clippy::cast_possible_truncation)] // integral and within i64 range
        return serializer.serialize_i64(v as i64);
    }
    serializer.serialize_f64(v)
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]

    use serde::Serialize;

    #[derive(Serialize)]
    struct Out {
        #[serde(serialize_with = "super::serialize_number")]
        result: f64,
    }

    fn render(result: f64) -> String {
        serde_json::to_string(&Out { result }).unwrap()
    }

    #[test]
    fn integral_values_render_as_integers() {
        assert_eq!(render(8.0), r#"{"result":8}"#);
        assert_eq!(render(-12.0), r#"{"result":-12}"#);
        assert_eq!(render(999_998_000_001.0), r#"{"result":999998000001}"#);
    }

    #[test]
    fn negative_zero_renders_as_zero() {
        assert_eq!(render(-0.0), r#"{"result":0}"#);
    }

    #[test]
    fn fractional_values_render_as_floats() {
        assert_eq!(render(2.5), r#"{"result":2.5}"#);
    }

    #[test]
    fn non_finite_values_render_as_null() {
        assert_eq!(render(f64::INFINITY), r#"{"result":null}"#);
        assert_eq!(render(f64::NAN), r#"{"result":null}"#);
    }
}
