//! Validated [`Bic`] newtype with segment accessors.
//!
//! [`Bic`] enforces the same structure as [`crate::format::is_valid_format`]
//! at construction time via [`TryFrom<&str>`], but reports *why* a candidate
//! was rejected through [`BicError`]. The stored value is always upper-case.
//! Serde `Deserialize` re-runs validation so invalid data cannot enter the
//! type system from untrusted JSON.
use std::fmt;
use std::ops::Deref;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

use crate::format::{BIC8_LEN, BIC11_LEN};


/// Branch code conventionally denoting the primary office.
pub const PRIMARY_OFFICE_BRANCH: &str = "XXX";

// ---------------------------------------------------------------------------
// Segment
// ---------------------------------------------------------------------------

/// One of the four fixed-position segments of a BIC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Segment {
    /// Positions 1–4, letters only.
    Institution,
    /// Positions 5–6, letters only (ISO 3166-1 alpha-2).
    Country,
    /// Positions 7–8, letters or digits.
    Location,
    /// Positions 9–11, letters or digits. Absent in 8-character BICs.
    Branch,
}

impl Segment {
    /// Returns the segment covering the zero-based character index `index`.
    pub fn at(index: usize) -> Self {
        match index {
            0..=3 => Self::Institution,
            4..=5 => Self::Country,
            6..=7 => Self::Location,
            _ => Self::Branch,
        }
    }

    /// Returns `true` if `c` is allowed in this segment (upper-case input).
    fn accepts(self, c: char) -> bool {
        match self {
            Self::Institution | Self::Country => c.is_ascii_uppercase(),
            Self::Location | Self::Branch => c.is_ascii_uppercase() || c.is_ascii_digit(),
        }
    }

    fn expected(self) -> &'static str {
        match self {
            Self::Institution | Self::Country => "a letter",
            Self::Location | Self::Branch => "a letter or digit",
        }
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Institution => f.write_str("institution code"),
            Self::Country => f.write_str("country code"),
            Self::Location => f.write_str("location code"),
            Self::Branch => f.write_str("branch code"),
        }
    }
}

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

/// Errors produced when constructing a [`Bic`] from an invalid string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BicError {
    /// The candidate was not 8 or 11 characters long.
    InvalidLength {
        /// Character count of the rejected input.
        got: usize,
    },
    /// A character is not permitted in the segment it falls in.
    InvalidCharacter {
        /// One-based character position.
        position: usize,
        /// The offending character, after case normalisation.
        found: char,
        /// The segment the position belongs to.
        segment: Segment,
    },
}

impl fmt::Display for BicError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength { got } => {
                write!(f, "invalid BIC: expected 8 or 11 characters, got {got}")
            }
            Self::InvalidCharacter {
                position,
                found,
                segment,
            } => write!(
                f,
                "invalid BIC: {found:?} at position {position} ({segment}) must be {}",
                segment.expected()
            ),
        }
    }
}

impl std::error::Error for BicError {}

// ---------------------------------------------------------------------------
// LocationKind
// ---------------------------------------------------------------------------

/// Classification derived from the second character of the location code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LocationKind {
    /// An ordinary production BIC.
    Standard,
    /// `0`: typically a test BIC.
    Test,
    /// `1`: a passive participant in the SWIFT network.
    PassiveParticipant,
    /// `2`: reverse billing, the recipient pays for the message.
    ReverseBilling,
}

impl fmt::Display for LocationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Standard => f.write_str("standard"),
            Self::Test => f.write_str("test"),
            Self::PassiveParticipant => f.write_str("passive participant"),
            Self::ReverseBilling => f.write_str("reverse billing"),
        }
    }
}

// ---------------------------------------------------------------------------
// Bic
// ---------------------------------------------------------------------------

/// A structurally valid ISO 9362 Business Identifier Code.
///
/// Construction normalises to upper case, so `"deutdeff"` and `"DEUTDEFF"`
/// produce equal values. Only the structure is checked; the institution is
/// not looked up in any directory.
///
/// ```
/// use bicval_core::bic::{Bic, LocationKind};
///
/// let bic = Bic::try_from("deutdeff500").expect("valid BIC");
/// assert_eq!(&*bic, "DEUTDEFF500");
/// assert_eq!(bic.institution(), "DEUT");
/// assert_eq!(bic.country(), "DE");
/// assert_eq!(bic.location(), "FF");
/// assert_eq!(bic.branch(), Some("500"));
/// assert_eq!(bic.location_kind(), LocationKind::Standard);
/// assert!(!bic.is_primary_office());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Bic(String);

impl TryFrom<&str> for Bic {
    type Error = BicError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let upper = s.to_ascii_uppercase();
        let len = upper.chars().count();
        if !(len == BIC8_LEN || len == BIC11_LEN) {
            tracing::debug!(len, "BIC rejected: wrong length");
            return Err(BicError::InvalidLength { got: len });
        }

        for (index, c) in upper.chars().enumerate() {
            let segment = Segment::at(index);
            if !segment.accepts(c) {
                tracing::debug!(position = index + 1, %segment, "BIC rejected: bad character");
                return Err(BicError::InvalidCharacter {
                    position: index + 1,
                    found: c,
                    segment,
                });
            }
        }

        Ok(Self(upper))
    }
}

impl FromStr for Bic {
    type Err = BicError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s)
    }
}

// All accessors slice by byte offset; a constructed Bic is pure ASCII.
impl Bic {
    /// Positions 1–4.
    pub fn institution(&self) -> &str {
        &self.0[0..4]
    }

    /// Positions 5–6, the ISO 3166-1 alpha-2 country code.
    pub fn country(&self) -> &str {
        &self.0[4..6]
    }

    /// Positions 7–8.
    pub fn location(&self) -> &str {
        &self.0[6..8]
    }

    /// Positions 9–11, or `None` for an 8-character BIC.
    pub fn branch(&self) -> Option<&str> {
        self.0.get(8..BIC11_LEN)
    }

    /// The first eight characters, i.e. the BIC without its branch code.
    pub fn bic8(&self) -> &str {
        &self.0[..BIC8_LEN]
    }

    /// The 11-character form. An 8-character BIC refers to the primary
    /// office, so `XXX` is appended.
    pub fn to_bic11(&self) -> String {
        match self.branch() {
            Some(_) => self.0.clone(),
            None => format!("{}{PRIMARY_OFFICE_BRANCH}", self.0),
        }
    }

    /// Returns `true` for an 8-character BIC or branch code `XXX`.
    pub fn is_primary_office(&self) -> bool {
        self.branch().is_none_or(|b| b == PRIMARY_OFFICE_BRANCH)
    }

    /// Classifies the BIC from the second character of its location code.
    pub fn location_kind(&self) -> LocationKind {
        match self.0.as_bytes().get(7) {
            Some(b'0') => LocationKind::Test,
            Some(b'1') => LocationKind::PassiveParticipant,
            Some(b'2') => LocationKind::ReverseBilling,
            Some(_) | None => LocationKind::Standard,
        }
    }

    /// Returns the normalised string, consuming `self`.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Deref for Bic {
    type Target = str;
    fn deref(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Bic {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Bic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for Bic {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Bic {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let s = String::deserialize(d)?;
        Self::try_from(s.as_str()).map_err(de::Error::custom)
    }
}
