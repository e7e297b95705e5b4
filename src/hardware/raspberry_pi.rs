use std::collections::HashMap;
use std::fs;
use std::path::Path;

use lazy_static::lazy_static;
use log::debug;
use regex::Regex;

use crate::common::error::ProbeError;
use crate::enums::model_label::ModelLabel;

/// Conventional location of the kernel's hardware info pseudo-file.
pub const CPUINFO_PATH: &str = "/proc/cpuinfo";

fn numbered(generation: u8) -> ModelLabel {
    ModelLabel::Numbered(generation)
}

fn named(name: &str) -> ModelLabel {
    ModelLabel::Named(name.to_string())
}

lazy_static! {
    // Matches a line of the form "Revision : a020d3"
    static ref REVISION_LINE: Regex = Regex::new(r"(?i)^Revision\s+:\s+(\w+)").unwrap();

    // Revision list available at: http://elinux.org/RPi_HardwareHistory#Board_Revision_History
    static ref REVISION_TABLE: HashMap<&'static str, ModelLabel> = {
        let entries = [
            // Raspberry Pi 1
            ("0002", numbered(1)),   // Model B Rev 1
            ("0003", numbered(1)),   // Model B Rev 1 (ECN0001)
            ("0004", numbered(1)),   // Model B Rev 2
            ("0005", numbered(1)),   // Model B Rev 2
            ("0006", numbered(1)),   // Model B Rev 2
            ("0007", numbered(1)),   // Model A
            ("0008", numbered(1)),   // Model A
            ("0009", numbered(1)),   // Model A
            ("000d", numbered(1)),   // Model B Rev 2
            ("000e", numbered(1)),   // Model B Rev 2
            ("000f", numbered(1)),   // Model B Rev 2
            ("0010", numbered(1)),   // Model B+
            ("0011", numbered(1)),   // Compute Module 1
            ("0012", numbered(1)),   // Model A+
            ("0013", numbered(1)),   // Model B+
            ("0014", numbered(1)),   // Compute Module 1
            ("0015", numbered(1)),   // Model A+
            // Raspberry Pi 2
            ("a01041", numbered(2)), // Pi 2 Model B v1.1
            ("a21041", numbered(2)), // Pi 2 Model B v1.1
            ("a22042", numbered(2)), // Pi 2 Model B v1.2
            // Raspberry Pi 3
            ("a02082", numbered(3)), // Pi 3 Model B
            ("a22082", numbered(3)), // Pi 3 Model B
            ("a32082", numbered(3)), // Pi 3 Model B (Sony, Japan)
            ("a020d3", numbered(3)), // Pi 3 Model B+
            ("9020e0", numbered(3)), // Pi 3 Model A+
            // Raspberry Pi 4
            ("a03111", numbered(4)), // Pi 4 Model B
            ("b03111", numbered(4)), // Pi 4 Model B
            ("b03112", numbered(4)), // Pi 4 Model B
            ("c03111", numbered(4)), // Pi 4 Model B
            ("c03112", numbered(4)), // Pi 4 Model B
            ("a03140", numbered(4)), // Pi 400
            ("a020a0", numbered(4)), // Compute Module 4
            // Raspberry Pi 5
            ("9023e0", numbered(5)), // Pi 5 Model B
            // Raspberry Pi Zero
            ("900092", named("Zero")),     // Pi Zero v1.2
            ("900093", named("Zero")),     // Pi Zero v1.3
            ("9000c1", named("Zero")),     // Pi Zero W
            ("902120", named("Zero 2 W")), // Pi Zero 2 W
            // Raspberry Pi Pico
            ("e31a", named("Pico")), // Pico
            ("e31b", named("Pico")), // Pico W
            ("e31c", named("Pico")), // Pico 2
        ];

        let mut table = HashMap::with_capacity(entries.len());
        for (code, model) in entries {
            let previous = table.insert(code, model);
            assert!(previous.is_none(), "Duplicate revision code {}", code);
        }
        table
    };
}

/// Read the revision code of the board from the hardware info source.
pub fn pi_revision(path: &Path) -> Result<String, ProbeError> {
    let cpuinfo = fs::read_to_string(path).map_err(ProbeError::SourceUnavailable)?;

    match parse_revision(&cpuinfo) {
        Some(revision) => {
            debug!("Detected Pi revision: {}", revision);
            Ok(revision)
        }
        None => Err(ProbeError::RevisionNotFound),
    }
}

// First matching line wins; later Revision lines are ignored.
fn parse_revision(cpuinfo: &str) -> Option<String> {
    for line in cpuinfo.lines() {
        if let Some(captures) = REVISION_LINE.captures(line) {
            return Some(captures[1].to_string());
        }
    }

    None
}

/// Look up a revision code in the revision table. Case-insensitive; `None`
/// for codes the table does not know.
pub fn lookup_revision(code: &str) -> Option<ModelLabel> {
    REVISION_TABLE.get(code.to_lowercase().as_str()).cloned()
}

/// Decode the host's revision code into a Raspberry Pi model. `Ok(None)`
/// means the source reported a revision the table does not know.
pub fn pi_model(path: &Path) -> Result<Option<ModelLabel>, ProbeError> {
    let revision = pi_revision(path)?;

    match lookup_revision(&revision) {
        Some(model) => {
            debug!("Detected Raspberry Pi model: {}", model);
            Ok(Some(model))
        }
        None => {
            debug!("Unknown Raspberry Pi revision: {}", revision);
            Ok(None)
        }
    }
}
