use serde_derive::{Deserialize, Serialize};

use crate::enums::model_label::ModelLabel;
use crate::enums::platform_kind::PlatformKind;

/// Result of one identification pass. `model` is populated for Raspberry Pi
/// results only.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Detection {
    pub kind: PlatformKind,
    pub model: Option<ModelLabel>,
}

impl Detection {
    pub fn unknown() -> Self {
        Detection {
            kind: PlatformKind::Unknown,
            model: None,
        }
    }
}
