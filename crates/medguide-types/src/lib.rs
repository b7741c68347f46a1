//! Validated value types shared by the MedGuide crates.
//!
//! Each type enforces its invariant at construction so downstream code never re-checks it.

use std::str::FromStr;

/// Errors that can occur when creating validated text types.
#[derive(Debug, thiserror::Error)]
pub enum TextError {
    /// The input text had no characters at all
    #[error("Text cannot be empty")]
    Empty,
}

/// Errors raised when constructing an [`Age`].
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum AgeError {
    #[error("age must be between 0 and {max}, got {value}")]
    OutOfRange { value: i64, max: u8 },
}

/// Errors raised when parsing a [`Gender`].
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum GenderError {
    #[error("unknown gender: {0}")]
    Unknown(String),
}

/// A string type that guarantees non-empty content.
///
/// This type wraps a `String` and ensures it contains at least one character. The content is
/// kept exactly as given, so whitespace-only text is accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NonEmptyText(String);

impl NonEmptyText {
    /// Creates a new `NonEmptyText` from the given input.
    ///
    /// # Errors
    ///
    /// Returns `Err(TextError::Empty)` if the input has zero length.
    pub fn new(input: impl Into<String>) -> Result<Self, TextError> {
        let text = input.into();
        if text.is_empty() {
            return Err(TextError::Empty);
        }
        Ok(Self(text))
    }

    /// Returns the inner string as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for NonEmptyText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Patient age in whole years, bounded to `0..=Age::MAX`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, serde::Serialize)]
#[serde(transparent)]
pub struct Age(u8);

impl Age {
    /// Upper bound accepted by the form.
    pub const MAX: u8 = 120;

    /// Default age pre-filled in the form.
    pub const DEFAULT: Age = Age(30);

    /// Creates an `Age` from a possibly negative or oversized integer.
    ///
    /// # Errors
    ///
    /// Returns `AgeError::OutOfRange` if `value` is negative or above [`Age::MAX`].
    pub fn new(value: i64) -> Result<Self, AgeError> {
        if (0..=i64::from(Self::MAX)).contains(&value) {
            Ok(Self(value as u8))
        } else {
            Err(AgeError::OutOfRange {
                value,
                max: Self::MAX,
            })
        }
    }

    pub fn years(&self) -> u8 {
        self.0
    }
}

impl Default for Age {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl std::fmt::Display for Age {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl<'de> serde::Deserialize<'de> for Age {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = i64::deserialize(deserializer)?;
        Age::new(value).map_err(serde::de::Error::custom)
    }
}

/// Gender as collected by the form.
///
/// `Unspecified` corresponds to the untouched "Select" option. Deserialisation goes through
/// [`FromStr`], so JSON accepts the same case-insensitive spellings as the form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Gender {
    #[default]
    Unspecified,
    Male,
    Female,
    Other,
}

impl Gender {
    /// All variants in form display order.
    pub const ALL: [Gender; 4] = [
        Gender::Unspecified,
        Gender::Male,
        Gender::Female,
        Gender::Other,
    ];

    /// Stable lowercase value used in forms and JSON.
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Unspecified => "unspecified",
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::Other => "other",
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Gender::Unspecified => "Not specified",
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Other => "Other",
        }
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Gender {
    type Err = GenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "select" | "unspecified" => Ok(Gender::Unspecified),
            "male" => Ok(Gender::Male),
            "female" => Ok(Gender::Female),
            "other" => Ok(Gender::Other),
            _ => Err(GenderError::Unknown(s.to_string())),
        }
    }
}

impl TryFrom<String> for Gender {
    type Error = GenderError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
