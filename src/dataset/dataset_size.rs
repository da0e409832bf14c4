// src/dataset/dataset_size.rs

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;
use std::str::FromStr;

/// Problem size class shared by every kernel in a run.
///
/// A run selects exactly one class; each kernel looks up its own array
/// dimensions for that class when it is invoked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum DatasetSize {
    #[default]
    Mini,
    Small,
    Medium,
    Large,
    ExtraLarge,
}

impl DatasetSize {
    /// All size classes, smallest first.
    pub const ALL: [DatasetSize; 5] = [
        DatasetSize::Mini,
        DatasetSize::Small,
        DatasetSize::Medium,
        DatasetSize::Large,
        DatasetSize::ExtraLarge,
    ];

    /// Position of this class in [`DatasetSize::ALL`].
    pub fn index(self) -> usize {
        match self {
            DatasetSize::Mini => 0,
            DatasetSize::Small => 1,
            DatasetSize::Medium => 2,
            DatasetSize::Large => 3,
            DatasetSize::ExtraLarge => 4,
        }
    }

    /// Pick the entry for this class out of a per-class table laid out
    /// MINI, SMALL, MEDIUM, LARGE, EXTRALARGE.
    pub fn pick<T: Copy>(self, table: [T; 5]) -> T {
        table[self.index()]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DatasetSize::Mini => "MINI",
            DatasetSize::Small => "SMALL",
            DatasetSize::Medium => "MEDIUM",
            DatasetSize::Large => "LARGE",
            DatasetSize::ExtraLarge => "EXTRALARGE",
        }
    }
}

impl fmt::Display for DatasetSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseDatasetSizeError {
    pub input: String,
}

impl fmt::Display for ParseDatasetSizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown dataset size '{}' (expected one of MINI, SMALL, MEDIUM, LARGE, EXTRALARGE)",
            self.input
        )
    }
}

impl Error for ParseDatasetSizeError {}

impl FromStr for DatasetSize {
    type Err = ParseDatasetSizeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        let normalized = normalized.strip_suffix("_dataset").unwrap_or(&normalized);
        match normalized {
            "mini" => Ok(DatasetSize::Mini),
            "small" => Ok(DatasetSize::Small),
            "medium" => Ok(DatasetSize::Medium),
            "large" => Ok(DatasetSize::Large),
            "extralarge" | "extra_large" | "extra-large" | "xl" => Ok(DatasetSize::ExtraLarge),
            _ => Err(ParseDatasetSizeError { input: s.to_string() }),
        }
    }
}

impl TryFrom<String> for DatasetSize {
    type Error = ParseDatasetSizeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<DatasetSize> for String {
    fn from(size: DatasetSize) -> Self {
        size.as_str().to_string()
    }
}
