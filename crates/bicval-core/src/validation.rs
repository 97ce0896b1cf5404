//! Validation outcome types and the BIC result builder.
//!
//! This module defines [`AnnotationLevel`], [`ValidationAnnotation`] and
//! [`ValidationResult`], the values handed back to a calling pipeline, plus
//! the [`validate`] entry point that wraps [`is_valid_format`] into a result.
//!
//! A malformed BIC is an expected outcome, not an error: [`validate`] is
//! total over every input and reports rejection only through the result.
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::format::is_valid_format;

#[cfg(test)]
mod tests;

/// Check name carried by the rejection annotation.
pub const ISO_9362_CHECK: &str = "ISO_9362 check";

/// Message carried by the rejection annotation.
pub const BIC_NOT_VALID: &str = "BIC is not valid.";

// ---------------------------------------------------------------------------
// AnnotationLevel
// ---------------------------------------------------------------------------

/// Severity of a [`ValidationAnnotation`].
///
/// Only [`AnnotationLevel::Reject`] makes a candidate invalid. `Warn` and
/// `Info` are produced by the advisory checks in [`crate::advisory`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AnnotationLevel {
    /// The candidate must not be accepted.
    Reject,
    /// The candidate is structurally valid but suspect.
    Warn,
    /// An observation with no bearing on acceptance.
    Info,
}

impl AnnotationLevel {
    /// Upper-case wire name, matching the serde representation.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Reject => "REJECT",
            Self::Warn => "WARN",
            Self::Info => "INFO",
        }
    }
}

impl fmt::Display for AnnotationLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ValidationAnnotation
// ---------------------------------------------------------------------------

/// A structured finding attached to a checked value.
///
/// The level is serialized under the key `severity`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationAnnotation {
    check_name: String,
    #[serde(rename = "severity")]
    level: AnnotationLevel,
    message: String,
}

impl ValidationAnnotation {
    /// Constructs a new [`ValidationAnnotation`].
    pub fn new(
        check_name: impl Into<String>,
        level: AnnotationLevel,
        message: impl Into<String>,
    ) -> Self {
        Self {
            check_name: check_name.into(),
            level,
            message: message.into(),
        }
    }

    /// The annotation produced for any candidate that fails the ISO 9362
    /// structure check.
    pub fn iso_9362_rejection() -> Self {
        Self::new(ISO_9362_CHECK, AnnotationLevel::Reject, BIC_NOT_VALID)
    }

    /// Name of the check that produced this annotation.
    pub fn check_name(&self) -> &str {
        &self.check_name
    }

    /// Severity of the finding.
    pub fn level(&self) -> AnnotationLevel {
        self.level
    }

    /// Human-readable explanation.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns `true` if the level is [`AnnotationLevel::Reject`].
    pub fn is_rejection(&self) -> bool {
        self.level == AnnotationLevel::Reject
    }
}

impl fmt::Display for ValidationAnnotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.level, self.check_name, self.message)
    }
}

// ---------------------------------------------------------------------------
// ValidationResult
// ---------------------------------------------------------------------------

/// Outcome of validating one candidate.
///
/// The annotation is present if and only if the candidate is invalid. The
/// fields are private and the only constructors are [`ValidationResult::valid`]
/// and [`ValidationResult::rejected`], so the pairing always holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    candidate: String,
    valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    annotation: Option<ValidationAnnotation>,
}

impl ValidationResult {
    /// A passing result for `candidate`.
    pub fn valid(candidate: impl Into<String>) -> Self {
        Self {
            candidate: candidate.into(),
            valid: true,
            annotation: None,
        }
    }

    /// A failing result for `candidate` carrying `annotation`.
    pub fn rejected(candidate: impl Into<String>, annotation: ValidationAnnotation) -> Self {
        Self {
            candidate: candidate.into(),
            valid: false,
            annotation: Some(annotation),
        }
    }

    /// The value that was checked, exactly as supplied.
    pub fn candidate(&self) -> &str {
        &self.candidate
    }

    /// Returns `true` if the candidate passed.
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// The rejection annotation, present only for invalid candidates.
    pub fn annotation(&self) -> Option<&ValidationAnnotation> {
        self.annotation.as_ref()
    }
}

// ---------------------------------------------------------------------------
// Validator
// ---------------------------------------------------------------------------

/// A stateless single-value check that a payment-validation pipeline can
/// hold next to its other checks.
///
/// The trait is object-safe; pipelines may store `Box<dyn Validator>`.
pub trait Validator {
    /// Name carried by annotations this validator produces.
    fn check_name(&self) -> &'static str;

    /// Checks `candidate`, never failing.
    fn validate(&self, candidate: &str) -> ValidationResult;
}

/// The ISO 9362 structure check as a zero-sized [`Validator`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BicValidator;

impl BicValidator {
    /// Same as [`is_valid_format`].
    pub fn is_valid(candidate: &str) -> bool {
        is_valid_format(candidate)
    }
}

impl Validator for BicValidator {
    fn check_name(&self) -> &'static str {
        ISO_9362_CHECK
    }

    fn validate(&self, candidate: &str) -> ValidationResult {
        validate(candidate)
    }
}

// ---------------------------------------------------------------------------
// validate
// ---------------------------------------------------------------------------

/// Checks `candidate` against the ISO 9362 structure and wraps the outcome.
///
/// Returns a passing result with no annotation, or a failing result whose
/// annotation is `ISO_9362 check` / `REJECT` / `BIC is not valid.`.
///
/// ```
/// use bicval_core::validation::{AnnotationLevel, validate};
///
/// assert!(validate("DEUTDEFF").is_valid());
///
/// let rejected = validate("DEUT1DFF");
/// assert!(!rejected.is_valid());
/// let annotation = rejected.annotation().expect("rejection annotation");
/// assert_eq!(annotation.level(), AnnotationLevel::Reject);
/// assert_eq!(annotation.message(), "BIC is not valid.");
/// ```
pub fn validate(candidate: &str) -> ValidationResult {
    let valid = is_valid_format(candidate);
    tracing::trace!(candidate, valid, "ISO 9362 format check");
    if valid {
        ValidationResult::valid(candidate)
    } else {
        ValidationResult::rejected(candidate, ValidationAnnotation::iso_9362_rejection())
    }
}

/// Same as [`validate`], treating an absent candidate as invalid.
///
/// The result for `None` carries an empty candidate string.
pub fn validate_opt(candidate: Option<&str>) -> ValidationResult {
    match candidate {
        Some(candidate) => validate(candidate),
        None => {
            tracing::trace!("ISO 9362 format check on absent candidate");
            ValidationResult::rejected(String::new(), ValidationAnnotation::iso_9362_rejection())
        }
    }
}
