//! Numeric and array helpers for the embed widget.

use serde_json::Value;

/// True iff the prop value is a JSON number. Numeric strings do not count.
pub fn is_number(value: &Value) -> bool {
    value.is_number()
}

/// Round `value` to `digits` decimal places.
///
/// Computed as `(value * 10^digits).round() / 10^digits`, so IEEE-754 double
/// behavior shows through: `round(1.005, 2)` is `1.0` because `1.005 * 100.0`
/// is `100.49999999999999`.
pub fn round(value: f64, digits: u32) -> f64 {
    let factor = 10f64.powi(digits as i32);

    (value * factor).round() / factor
}

/// `round` with the widget's default of two decimal places.
pub fn round2(value: f64) -> f64 {
    round(value, 2)
}

/// Normalize a volume prop to the `[0, 1]` scale the player expects.
///
/// Missing or non-numeric values mean full volume. Values above 1 are read
/// as percentages and divided by 100; everything else passes through
/// unchanged, including negatives and percentages above 100 (which divide
/// to more than 1). Downstream callers rely on this exact policy.
pub fn parse_volume(value: Option<&Value>) -> f64 {
    let Some(number) = value.and_then(Value::as_f64) else {
        return 1.0;
    };

    if number > 1.0 {
        number / 100.0
    } else {
        number
    }
}

/// Legacy array comparison.
///
/// This is NOT elementwise equality: after the length check it compares
/// every element of `a` against every element of `b` and keeps only the
/// last comparison, so for non-empty inputs the result is just
/// `a.last() == b.last()`. Kept bug-for-bug because existing callers
/// depend on it; use [`slices_equal`] for real positional equality.
pub fn is_equal_array<T: PartialEq>(a: &[T], b: &[T]) -> bool {
    if a.len() != b.len() {
        return false;
    }

    let mut result = true;
    for left in a {
        for right in b {
            result = left == right;
        }
    }

    result
}

/// Positional equality: same length and equal elements at every index.
pub fn slices_equal<T: PartialEq>(a: &[T], b: &[T]) -> bool {
    a == b
}
