use std::fmt;

use serde_derive::{Deserialize, Serialize};

/// Decoded product identity of a Raspberry Pi board: a numbered generation
/// (1-5) or a named family such as "Zero" or "Pico".
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(untagged)]
pub enum ModelLabel {
    Numbered(u8),
    Named(String),
}

impl fmt::Display for ModelLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelLabel::Numbered(generation) => write!(f, "{}", generation),
            ModelLabel::Named(name) => write!(f, "{}", name),
        }
    }
}
