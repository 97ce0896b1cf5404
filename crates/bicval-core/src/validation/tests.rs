#![allow(clippy::expect_used)]

use super::*;

fn assert_rejected(result: &ValidationResult) {
    assert!(!result.is_valid());
    let annotation = result.annotation().expect("rejection annotation");
    assert_eq!(annotation.check_name(), "ISO_9362 check");
    assert_eq!(annotation.level(), AnnotationLevel::Reject);
    assert_eq!(annotation.message(), "BIC is not valid.");
}

// -- validate: concrete scenarios ----------------------------------------------

#[test]
fn deutdeff_is_valid_without_annotation() {
    let result = validate("DEUTDEFF");
    assert!(result.is_valid());
    assert!(result.annotation().is_none());
    assert_eq!(result.candidate(), "DEUTDEFF");
}

#[test]
fn deutdeff500_is_valid() {
    let result = validate("DEUTDEFF500");
    assert!(result.is_valid());
    assert!(result.annotation().is_none());
}

#[test]
fn digit_in_country_code_is_rejected() {
    assert_rejected(&validate("DEUT1DFF"));
}

#[test]
fn empty_string_is_rejected() {
    let result = validate("");
    assert_rejected(&result);
    assert_eq!(result.candidate(), "");
}

#[test]
fn nine_chars_is_rejected() {
    assert_rejected(&validate("DEUTDEFFX"));
}

/// The candidate is echoed as supplied, not normalised.
#[test]
fn lowercase_is_valid_and_candidate_preserved() {
    let result = validate("deutdeff");
    assert!(result.is_valid());
    assert_eq!(result.candidate(), "deutdeff");
}

#[test]
fn absent_candidate_is_rejected_with_empty_value() {
    let result = validate_opt(None);
    assert_rejected(&result);
    assert_eq!(result.candidate(), "");
}

#[test]
fn present_optional_candidate_delegates() {
    assert_eq!(validate_opt(Some("DEUTDEFF")), validate("DEUTDEFF"));
    assert_eq!(validate_opt(Some("DEUT1DFF")), validate("DEUT1DFF"));
}

#[test]
fn annotation_present_iff_invalid() {
    for candidate in [
        "DEUTDEFF",
        "DEUTDEFF500",
        "DEUT1DFF",
        "",
        "DEUTDEFFX",
        "deutdeff",
        "DEUT DEFF",
        "ÄÖÜÄÖÜÄÖ",
    ] {
        let result = validate(candidate);
        assert_eq!(
            result.is_valid(),
            result.annotation().is_none(),
            "invariant broken for {candidate:?}"
        );
    }
}

// -- AnnotationLevel -------------------------------------------------------------

#[test]
fn level_display_is_upper_case() {
    assert_eq!(AnnotationLevel::Reject.to_string(), "REJECT");
    assert_eq!(AnnotationLevel::Warn.to_string(), "WARN");
    assert_eq!(AnnotationLevel::Info.to_string(), "INFO");
}

#[test]
fn level_orders_by_severity() {
    assert!(AnnotationLevel::Reject < AnnotationLevel::Warn);
    assert!(AnnotationLevel::Warn < AnnotationLevel::Info);
}

// -- ValidationAnnotation ----------------------------------------------------------

#[test]
fn annotation_display_format() {
    let a = ValidationAnnotation::iso_9362_rejection();
    assert_eq!(a.to_string(), "[REJECT] ISO_9362 check: BIC is not valid.");
    assert!(a.is_rejection());
}

#[test]
fn warn_annotation_is_not_rejection() {
    let a = ValidationAnnotation::new("x", AnnotationLevel::Warn, "y");
    assert!(!a.is_rejection());
}

// -- serde -----------------------------------------------------------------------

#[test]
fn valid_result_serializes_without_annotation() {
    let json = serde_json::to_value(validate("DEUTDEFF")).expect("serialize");
    assert_eq!(
        json,
        serde_json::json!({ "candidate": "DEUTDEFF", "valid": true })
    );
}

#[test]
fn rejected_result_serializes_annotation() {
    let json = serde_json::to_value(validate("DEUT1DFF")).expect("serialize");
    assert_eq!(
        json,
        serde_json::json!({
            "candidate": "DEUT1DFF",
            "valid": false,
            "annotation": {
                "check_name": "ISO_9362 check",
                "severity": "REJECT",
                "message": "BIC is not valid."
            }
        })
    );
}

#[test]
fn annotation_round_trips_through_json() {
    let a = ValidationAnnotation::new("ISO_3166 country check", AnnotationLevel::Warn, "msg");
    let json = serde_json::to_string(&a).expect("serialize");
    let back: ValidationAnnotation = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(a, back);
}

// -- Validator -------------------------------------------------------------------

#[test]
fn bic_validator_matches_free_function() {
    let validator = BicValidator;
    assert_eq!(validator.check_name(), ISO_9362_CHECK);
    for candidate in ["DEUTDEFF", "DEUT1DFF", ""] {
        assert_eq!(validator.validate(candidate), validate(candidate));
        assert_eq!(BicValidator::is_valid(candidate), is_valid_format(candidate));
    }
}

#[test]
fn bic_validator_usable_as_trait_object() {
    let checks: Vec<Box<dyn Validator>> = vec![Box::new(BicValidator)];
    let results: Vec<ValidationResult> = checks.iter().map(|c| c.validate("COBADEFF")).collect();
    assert!(results.iter().all(ValidationResult::is_valid));
}

#[test]
fn results_are_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ValidationResult>();
    assert_send_sync::<ValidationAnnotation>();
    assert_send_sync::<BicValidator>();
}

#[test]
fn concurrent_callers_agree() {
    let candidates = ["DEUTDEFF", "DEUT1DFF", "deutdeff500", ""];
    let expected: Vec<bool> = candidates.iter().map(|c| validate(c).is_valid()).collect();
    std::thread::scope(|s| {
        let handles: Vec<_> = (0..8)
            .map(|_| {
                s.spawn(|| {
                    candidates
                        .iter()
                        .map(|c| validate(c).is_valid())
                        .collect::<Vec<bool>>()
                })
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().expect("thread"), expected);
        }
    });
}
