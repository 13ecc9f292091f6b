//! Integration tests for hello-ops-core.
//!
//! These tests exercise the public API the way the binary does:
//! - Arithmetic on the demo operands and edge values
//! - String length and in-place reversal on terminated buffers
//! - The full report written into memory

use hello_ops_common::{DemoConfig, OpsError};
use hello_ops_core::{TerminatedBuffer, add, multiply, report, reverse_string, string_length, subtract};

const EXPECTED_REPORT: &str = "\
Math Operations:
10 + 5 = 15
10 - 5 = 5
10 * 5 = 50

String Operations:
Original: Hello Android
Length: 13
Reversed: adiordnA olleH
";

fn terminated(text: &str) -> Vec<u8> {
    TerminatedBuffer::new(text).unwrap().into_bytes()
}

// ============================================================================
// Test: Arithmetic
// ============================================================================

#[test]
fn test_arithmetic_matches_native_operators() {
    for (a, b) in [(10, 5), (0, 0), (-10, 5), (10, -5), (-10, -5), (7, 0)] {
        assert_eq!(add(a, b), a + b);
        assert_eq!(subtract(a, b), a - b);
        assert_eq!(multiply(a, b), a * b);
    }
}

// ============================================================================
// Test: String operations
// ============================================================================

#[test]
fn test_length_of_demo_literal() {
    assert_eq!(string_length(&terminated("Hello Android")).unwrap(), 13);
}

#[test]
fn test_reverse_is_involution() {
    for text in ["", "a", "ab", "abc", "Hello Android", "racecar"] {
        let original = terminated(text);
        let mut buf = original.clone();

        reverse_string(&mut buf).unwrap();
        reverse_string(&mut buf).unwrap();

        assert_eq!(buf, original, "double reversal of {text:?}");
    }
}

#[test]
fn test_reverse_preserves_length_and_sentinel() {
    for text in ["", "abc", "Hello Android"] {
        let mut buf = TerminatedBuffer::with_capacity(text, 16).unwrap().into_bytes();
        let before = string_length(&buf).unwrap();

        reverse_string(&mut buf).unwrap();

        assert_eq!(string_length(&buf).unwrap(), before);
        assert_eq!(buf[before], 0);
        assert_eq!(buf.len(), 16);
    }
}

#[test]
fn test_unterminated_slice_is_an_error() {
    let mut raw = *b"no terminator";

    assert!(matches!(
        string_length(&raw),
        Err(OpsError::MissingTerminator { capacity: 13 })
    ));
    assert!(reverse_string(&mut raw).is_err());
}

// ============================================================================
// Test: Full report
// ============================================================================

#[test]
fn test_default_report_output() {
    let mut out = Vec::new();
    report::run(&mut out, &DemoConfig::default()).unwrap();

    assert_eq!(String::from_utf8(out).unwrap(), EXPECTED_REPORT);
}

#[test]
fn test_report_from_toml() {
    let config = DemoConfig::from_toml(
        r#"
            [math]
            lhs = 6
            rhs = 7

            [text]
            value = "abc"
        "#,
    )
    .unwrap();

    let mut out = Vec::new();
    report::run(&mut out, &config).unwrap();
    let text = String::from_utf8(out).unwrap();

    assert!(text.contains("6 * 7 = 42\n"));
    assert!(text.contains("Length: 3\n"));
    assert!(text.ends_with("Reversed: cba\n"));
}
