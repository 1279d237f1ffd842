#![allow(clippy::unwrap_used, clippy::expect_used)]

use calculator_sdk::{CalculatorError, OperationRequest, RawValue};
use proptest::prelude::*;

use super::service::{Service, evaluate};

fn raw(v: impl Into<RawValue>) -> Option<RawValue> {
    Some(v.into())
}

fn eval(op: &str, a: impl Into<RawValue>, b: impl Into<RawValue>) -> Result<f64, CalculatorError> {
    evaluate(raw(op).as_ref(), raw(a).as_ref(), raw(b).as_ref())
}

// ---------- concrete scenarios ----------

#[test]
fn scenarios_from_client_contract() {
    assert_eq!(eval("add", 5_i64, 3_i64), Ok(8.0));
    assert_eq!(eval("subtract", 10_i64, 3_i64), Ok(7.0));
    assert_eq!(eval("multiply", 4_i64, 5_i64), Ok(20.0));
    assert_eq!(eval("divide", 15_i64, 3_i64), Ok(5.0));
    assert_eq!(
        eval("divide", 10_i64, 0_i64),
        Err(CalculatorError::DivisionByZero)
    );
}

#[test]
fn large_product_is_exact() {
    assert_eq!(
        eval("multiply", 999_999_i64, 999_999_i64),
        Ok(999_998_000_001.0)
    );
}

#[test]
fn decimal_addition_within_tolerance() {
    let got = eval("add", 2.5, 3.7).unwrap();
    assert!((got - 6.2).abs() < 1e-9, "got {got}");
}

#[test]
fn numeric_strings_and_numbers_are_interchangeable() {
    assert_eq!(eval("add", "10", 20_i64), Ok(30.0));
    assert_eq!(eval("add", 10_i64, 20_i64), Ok(30.0));
    assert_eq!(eval("add", "10", "20"), Ok(30.0));
    assert_eq!(eval("add", " 10", "20px"), Ok(30.0));
}

// ---------- validation order ----------

#[test]
fn missing_fields() {
    let cases = [
        (None, raw(1_i64), raw(2_i64)),
        (raw("add"), None, raw(2_i64)),
        (raw("add"), raw(1_i64), None),
        (raw(""), raw(1_i64), raw(2_i64)),
        (Some(RawValue::Null), raw(1_i64), raw(2_i64)),
        (Some(RawValue::Bool(false)), raw(1_i64), raw(2_i64)),
        (raw(0_i64), raw(1_i64), raw(2_i64)),
        (None, None, None),
    ];
    for (op, a, b) in cases {
        assert_eq!(
            evaluate(op.as_ref(), a.as_ref(), b.as_ref()),
            Err(CalculatorError::MissingField),
            "op={op:?} a={a:?} b={b:?}"
        );
    }
}

#[test]
fn zero_operands_are_present() {
    assert_eq!(eval("add", 0_i64, 0_i64), Ok(0.0));
    assert_eq!(eval("multiply", 0_i64, 7_i64), Ok(0.0));
}

#[test]
fn missing_field_wins_over_invalid_operand() {
    assert_eq!(
        evaluate(raw("add").as_ref(), raw("abc").as_ref(), None),
        Err(CalculatorError::MissingField)
    );
}

#[test]
fn invalid_operands() {
    assert_eq!(
        eval("add", "not_a_number", 5_i64),
        Err(CalculatorError::InvalidOperand)
    );
    assert_eq!(eval("add", 5_i64, "abc"), Err(CalculatorError::InvalidOperand));
    assert_eq!(eval("add", "", 5_i64), Err(CalculatorError::InvalidOperand));
    assert_eq!(
        evaluate(raw("add").as_ref(), Some(&RawValue::Null), raw(1_i64).as_ref()),
        Err(CalculatorError::InvalidOperand)
    );
    assert_eq!(
        evaluate(
            raw("add").as_ref(),
            Some(&RawValue::Structured),
            raw(1_i64).as_ref()
        ),
        Err(CalculatorError::InvalidOperand)
    );
    assert_eq!(eval("add", true, 1_i64), Err(CalculatorError::InvalidOperand));
}

#[test]
fn invalid_operand_wins_over_unknown_operation() {
    assert_eq!(
        eval("power", "x", 2_i64),
        Err(CalculatorError::InvalidOperand)
    );
}

#[test]
fn unknown_operations() {
    assert_eq!(eval("invalid", 5_i64, 3_i64), Err(CalculatorError::UnknownOperation));
    assert_eq!(eval("ADD", 5_i64, 3_i64), Err(CalculatorError::UnknownOperation));
    assert_eq!(
        evaluate(raw(1_i64).as_ref(), raw(5_i64).as_ref(), raw(3_i64).as_ref()),
        Err(CalculatorError::UnknownOperation)
    );
    assert_eq!(
        evaluate(
            Some(&RawValue::Structured),
            raw(5_i64).as_ref(),
            raw(3_i64).as_ref()
        ),
        Err(CalculatorError::UnknownOperation)
    );
}

#[test]
fn unknown_operation_with_zero_divisor() {
    assert_eq!(
        eval("modulo", 1_i64, 0_i64),
        Err(CalculatorError::UnknownOperation)
    );
}

#[test]
fn infinity_operands_compute() {
    assert_eq!(eval("add", "Infinity", 1_i64), Ok(f64::INFINITY));
    assert!(eval("subtract", "Infinity", "Infinity").unwrap().is_nan());
}

#[test]
fn service_delegates_to_evaluate() {
    let service = Service::new();
    let request = OperationRequest::new(raw("divide"), raw("9"), raw(3_i64));
    assert_eq!(service.evaluate(&request), Ok(3.0));
    assert_eq!(
        service.evaluate(&OperationRequest::default()),
        Err(CalculatorError::MissingField)
    );
}

// ---------- properties ----------

fn operand() -> impl Strategy<Value = f64> {
    -1.0e12..1.0e12_f64
}

proptest! {
    #[test]
    fn add_subtract_multiply_match_ieee(a in operand(), b in operand()) {
        prop_assert_eq!(eval("add", a, b), Ok(a + b));
        prop_assert_eq!(eval("subtract", a, b), Ok(a - b));
        prop_assert_eq!(eval("multiply", a, b), Ok(a * b));
    }

    #[test]
    fn divide_matches_ieee_for_nonzero_divisor(a in operand(), b in operand()) {
        prop_assume!(b != 0.0);
        prop_assert_eq!(eval("divide", a, b), Ok(a / b));
    }

    #[test]
    fn numeric_strings_coerce_like_numbers(a in operand(), b in operand()) {
        let a_text = a.to_string();
        let b_text = b.to_string();
        for op in ["add", "subtract", "multiply"] {
            prop_assert_eq!(eval(op, a_text.as_str(), b_text.as_str()), eval(op, a, b));
        }
    }

    #[test]
    fn non_numeric_text_is_rejected(word in "[a-zA-Z_]{1,12}", b in operand()) {
        prop_assume!(!word.starts_with("Infinity"));
        prop_assert_eq!(eval("add", word.as_str(), b), Err(CalculatorError::InvalidOperand));
    }
}
