//! Binary label inference from a file's base name.
//!
//! The rule is plain substring containment, case-insensitive: a name is TEL
//! when it contains `tel` and does not contain `non_tel`. Names such as
//! `hotel.txt` or `intel.txt` therefore count as TEL as well.

use serde::{Deserialize, Serialize};

const TEL_MARKER: &str = "tel";
const NON_TEL_MARKER: &str = "non_tel";

/// Dataset label, written to CSV as `1` (TEL) or `0` (non-TEL).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Label {
    NonTel,
    Tel,
}

impl Label {
    pub fn as_u8(self) -> u8 {
        match self {
            Label::NonTel => 0,
            Label::Tel => 1,
        }
    }
}

impl From<Label> for u8 {
    fn from(label: Label) -> Self {
        label.as_u8()
    }
}

impl TryFrom<u8> for Label {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Label::NonTel),
            1 => Ok(Label::Tel),
            other => Err(format!("label must be 0 or 1, got {}", other)),
        }
    }
}

impl std::fmt::Display for Label {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_u8())
    }
}

/// Classify a file by its base name.
pub fn classify(file_name: &str) -> Label {
    let lower = file_name.to_lowercase();
    if lower.contains(TEL_MARKER) && !lower.contains(NON_TEL_MARKER) {
        Label::Tel
    } else {
        Label::NonTel
    }
}
