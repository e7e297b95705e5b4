use std::path::PathBuf;

use log::{debug, info};

use crate::common::utils;
use crate::config::DetectConf;
use crate::enums::platform_kind::PlatformKind;
use crate::hardware::beaglebone;
use crate::hardware::minnowboard::{self, NoVendorLibrary, PlatformQuery, VendorLibrary};
use crate::hardware::raspberry_pi;
use crate::models::detection::Detection;

/// Runs the board probes in fixed priority order. The fields are the probe
/// inputs; swap them out to point the detector at a different environment.
pub struct Detector {
    pub cpuinfo_path: PathBuf,
    pub platform: String,
    pub vendor: Box<dyn PlatformQuery>,
}

impl Detector {
    /// Detector over the ambient host environment.
    pub fn new() -> Self {
        Detector {
            cpuinfo_path: PathBuf::from(raspberry_pi::CPUINFO_PATH),
            platform: utils::platform_descriptor(),
            vendor: open_vendor_library(),
        }
    }

    /// Detector with the configured hardware info source.
    pub fn with_conf(conf: &DetectConf) -> Self {
        let mut detector = Self::new();
        detector.cpuinfo_path = PathBuf::from(&conf.cpuinfo);
        detector
    }

    /// Classify the host. Each probe runs at most once; a probe failure
    /// counts as abstention and the next probe still runs.
    pub fn identify(&self) -> Detection {
        match raspberry_pi::pi_model(&self.cpuinfo_path) {
            Ok(Some(model)) => {
                info!("Detected Raspberry Pi model: {}", model);
                return Detection {
                    kind: PlatformKind::RaspberryPi,
                    model: Some(model),
                };
            }
            Ok(None) => debug!("Revision code not in the table, not a known Raspberry Pi"),
            Err(error) => debug!("Raspberry Pi probe abstained: {}", error),
        }

        if beaglebone::is_beaglebone_black(&self.platform) {
            info!("Detected BeagleBone Black");
            return Detection {
                kind: PlatformKind::BeagleBoneBlack,
                model: None,
            };
        }

        if minnowboard::is_minnowboard(self.vendor.as_ref()) {
            info!("Detected MinnowBoard MAX");
            return Detection {
                kind: PlatformKind::MinnowBoard,
                model: None,
            };
        }

        debug!("Platform detection failed: unknown platform");
        Detection::unknown()
    }
}

impl Default for Detector {
    fn default() -> Self {
        Self::new()
    }
}

fn open_vendor_library() -> Box<dyn PlatformQuery> {
    match VendorLibrary::open() {
        Some(library) => Box::new(library),
        None => Box::new(NoVendorLibrary),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::model_label::ModelLabel;
    use std::io::Write;

    const BBB_PLATFORM: &str = "Linux-4.14.71-ti-r80-armv7l-with-debian-9.5";
    const X86_PLATFORM: &str = "Linux-5.4.0-x86_64-with-glibc2.31";

    struct FixedName(&'static str);

    impl PlatformQuery for FixedName {
        fn platform_name(&self) -> Option<String> {
            Some(self.0.to_string())
        }
    }

    fn cpuinfo_file(contents: &[u8]) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents).unwrap();
        file
    }

    #[test]
    fn pi_probe_wins_over_matching_platform_string() {
        let cpuinfo = cpuinfo_file(b"Hardware\t: BCM2835\nRevision\t: a020d3\n");
        let detector = Detector {
            cpuinfo_path: cpuinfo.path().to_path_buf(),
            platform: BBB_PLATFORM.to_string(),
            vendor: Box::new(NoVendorLibrary),
        };

        let detection = detector.identify();
        assert_eq!(detection.kind, PlatformKind::RaspberryPi);
        assert_eq!(detection.model, Some(ModelLabel::Numbered(3)));
    }

    #[test]
    fn beaglebone_platform_string_matches() {
        let detector = Detector {
            cpuinfo_path: PathBuf::from("/nonexistent/cpuinfo"),
            platform: BBB_PLATFORM.to_string(),
            vendor: Box::new(NoVendorLibrary),
        };

        let detection = detector.identify();
        assert_eq!(detection.kind, PlatformKind::BeagleBoneBlack);
        assert_eq!(detection.model, None);
    }

    #[test]
    fn vendor_library_identifies_minnowboard() {
        let detector = Detector {
            cpuinfo_path: PathBuf::from("/nonexistent/cpuinfo"),
            platform: X86_PLATFORM.to_string(),
            vendor: Box::new(FixedName("MinnowBoard MAX")),
        };

        assert_eq!(detector.identify().kind, PlatformKind::MinnowBoard);
    }

    #[test]
    fn no_probe_matching_returns_unknown() {
        let detector = Detector {
            cpuinfo_path: PathBuf::from("/nonexistent/cpuinfo"),
            platform: X86_PLATFORM.to_string(),
            vendor: Box::new(NoVendorLibrary),
        };

        let detection = detector.identify();
        assert_eq!(detection.kind, PlatformKind::Unknown);
        assert_eq!(detection.model, None);
    }

    #[test]
    fn unknown_revision_falls_through_to_later_probes() {
        let cpuinfo = cpuinfo_file(b"Revision\t: deadbeef\n");
        let detector = Detector {
            cpuinfo_path: cpuinfo.path().to_path_buf(),
            platform: BBB_PLATFORM.to_string(),
            vendor: Box::new(NoVendorLibrary),
        };

        assert_eq!(detector.identify().kind, PlatformKind::BeagleBoneBlack);
    }

    #[test]
    fn missing_cpuinfo_falls_through_to_vendor_probe() {
        let detector = Detector {
            cpuinfo_path: PathBuf::from("/nonexistent/cpuinfo"),
            platform: X86_PLATFORM.to_string(),
            vendor: Box::new(FixedName("MinnowBoard MAX")),
        };

        assert_eq!(detector.identify().kind, PlatformKind::MinnowBoard);
    }
}
