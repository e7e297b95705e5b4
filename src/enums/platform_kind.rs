use serde_derive::{Deserialize, Serialize};

/// Coarse classification of the host board.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlatformKind {
    Unknown,
    RaspberryPi,
    BeagleBoneBlack,
    MinnowBoard,
}
