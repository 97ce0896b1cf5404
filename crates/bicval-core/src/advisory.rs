//! Non-rejecting advisory checks on structurally valid BICs.
//!
//! These checks look at conventions layered on top of ISO 9362 that do not
//! affect structural validity: whether the country segment is an assigned
//! ISO 3166-1 code, what the location code says about network participation,
//! and the reserved `X` branch prefix. They produce [`AnnotationLevel::Warn`]
//! or [`AnnotationLevel::Info`] annotations only, so a [`BicReport`] is valid
//! exactly when its [`ValidationResult`] is.
use serde::Serialize;

use crate::bic::{Bic, LocationKind, PRIMARY_OFFICE_BRANCH};
use crate::country::is_bic_country;
use crate::validation::{AnnotationLevel, ValidationAnnotation, ValidationResult, validate};

/// Check name for the country code table lookup.
pub const COUNTRY_CHECK: &str = "ISO_3166 country check";

/// Check name for location code conventions.
pub const LOCATION_CHECK: &str = "ISO_9362 location check";

/// Check name for branch code conventions.
pub const BRANCH_CHECK: &str = "ISO_9362 branch check";

/// Controls which advisory checks run.
///
/// ```
/// # use bicval_core::AdvisoryConfig;
/// let cfg = AdvisoryConfig::default();
/// assert!(cfg.country_codes);
/// assert!(cfg.location_conventions);
/// assert!(cfg.branch_conventions);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdvisoryConfig {
    /// Warn when the country segment is not an assigned ISO 3166-1 code.
    pub country_codes: bool,
    /// Note test, passive-participant and reverse-billing location codes.
    pub location_conventions: bool,
    /// Note branch codes starting with `X` other than `XXX`.
    pub branch_conventions: bool,
}

impl Default for AdvisoryConfig {
    fn default() -> Self {
        Self {
            country_codes: true,
            location_conventions: true,
            branch_conventions: true,
        }
    }
}

impl AdvisoryConfig {
    /// A configuration with every advisory check disabled.
    pub fn none() -> Self {
        Self {
            country_codes: false,
            location_conventions: false,
            branch_conventions: false,
        }
    }
}

/// Runs the enabled advisory checks on `bic`.
///
/// Returns annotations in check order: country, location, branch.
pub fn advise(bic: &Bic, config: &AdvisoryConfig) -> Vec<ValidationAnnotation> {
    let mut out = Vec::new();

    if config.country_codes && !is_bic_country(bic.country()) {
        out.push(ValidationAnnotation::new(
            COUNTRY_CHECK,
            AnnotationLevel::Warn,
            format!(
                "country code \"{}\" is not an assigned ISO 3166-1 alpha-2 code",
                bic.country()
            ),
        ));
    }

    if config.location_conventions {
        let note = match bic.location_kind() {
            LocationKind::Standard => None,
            LocationKind::Test => Some("location code ends in '0': typically a test BIC"),
            LocationKind::PassiveParticipant => {
                Some("location code ends in '1': passive participant in the SWIFT network")
            }
            LocationKind::ReverseBilling => {
                Some("location code ends in '2': reverse billing, the recipient pays")
            }
        };
        if let Some(message) = note {
            out.push(ValidationAnnotation::new(
                LOCATION_CHECK,
                AnnotationLevel::Info,
                message,
            ));
        }
    }

    if config.branch_conventions {
        if let Some(branch) = bic.branch() {
            if branch.starts_with('X') && branch != PRIMARY_OFFICE_BRANCH {
                out.push(ValidationAnnotation::new(
                    BRANCH_CHECK,
                    AnnotationLevel::Info,
                    format!(
                        "branch code \"{branch}\" starts with 'X', which is reserved for \
                         the primary office \"{PRIMARY_OFFICE_BRANCH}\""
                    ),
                ));
            }
        }
    }

    if !out.is_empty() {
        tracing::debug!(bic = %bic, count = out.len(), "advisory findings");
    }
    out
}

/// Structural result plus advisory findings for one candidate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BicReport {
    /// The ISO 9362 structure check outcome.
    pub result: ValidationResult,
    /// Advisory annotations. Always empty for an invalid candidate.
    pub advisories: Vec<ValidationAnnotation>,
}

impl BicReport {
    /// Returns `true` if the structure check passed.
    pub fn is_valid(&self) -> bool {
        self.result.is_valid()
    }

    /// Returns an iterator over the rejection annotation (if any) followed by
    /// the advisories.
    pub fn annotations(&self) -> impl Iterator<Item = &ValidationAnnotation> {
        self.result.annotation().into_iter().chain(&self.advisories)
    }

    /// Returns an iterator over the advisories with [`AnnotationLevel::Warn`].
    pub fn warnings(&self) -> impl Iterator<Item = &ValidationAnnotation> {
        self.advisories
            .iter()
            .filter(|a| a.level() == AnnotationLevel::Warn)
    }

    /// Returns an iterator over the advisories with [`AnnotationLevel::Info`].
    pub fn infos(&self) -> impl Iterator<Item = &ValidationAnnotation> {
        self.advisories
            .iter()
            .filter(|a| a.level() == AnnotationLevel::Info)
    }
}

/// Validates `candidate` and, when it passes, runs the advisory checks.
pub fn check(candidate: &str, config: &AdvisoryConfig) -> BicReport {
    let result = validate(candidate);
    let advisories = match Bic::try_from(candidate) {
        Ok(bic) if result.is_valid() => advise(&bic, config),
        Ok(_) | Err(_) => Vec::new(),
    };
    BicReport { result, advisories }
}
