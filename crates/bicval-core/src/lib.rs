#![deny(clippy::print_stdout, clippy::print_stderr)]

pub mod advisory;
pub mod bic;
pub mod country;
pub mod format;
pub mod validation;

pub use advisory::{AdvisoryConfig, BicReport, advise, check};
pub use bic::{Bic, BicError, LocationKind, Segment};
pub use country::{is_bic_country, is_valid_iso3166_alpha2};
pub use format::{is_valid_format, is_valid_format_opt};
pub use validation::{
    AnnotationLevel, BicValidator, ValidationAnnotation, ValidationResult, Validator, validate,
    validate_opt,
};

/// Returns the current version of the bicval-core library.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
