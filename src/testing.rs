//! Testing helpers.

use assert_float_eq::*;

pub fn assert_slice_f64_absolute(expected: &[f64], actual: &[f64], epsilon: f64) {
    assert_same_len(expected, actual);
    for (&expected, &actual) in expected.iter().zip(actual) {
        assert_float_absolute_eq!(expected, actual, epsilon);
    }
}

pub fn assert_slice_f64_relative(expected: &[f64], actual: &[f64], epsilon: f64) {
    assert_same_len(expected, actual);
    for (&expected, &actual) in expected.iter().zip(actual) {
        if actual != expected {
            assert_float_relative_eq!(expected, actual, epsilon);
        }
    }
}

fn assert_same_len(expected: &[f64], actual: &[f64]) {
    assert_eq!(
        expected.len(),
        actual.len(),
        "lengths do not match: {} ≠ {}",
        expected.len(),
        actual.len()
    );
}
