use log::debug;

// Substrings seen in the OS platform descriptor of BeagleBone Black images.
const PLATFORM_PATTERNS: [&str; 3] = [
    "armv7l-with-debian",
    "armv7l-with-ubuntu",
    "armv7l-with-glibc2.4",
];

/// Test whether an OS platform descriptor belongs to a BeagleBone Black.
/// Pure substring check, no I/O.
pub fn is_beaglebone_black(platform: &str) -> bool {
    let platform = platform.to_lowercase();

    for pattern in PLATFORM_PATTERNS {
        if platform.contains(pattern) {
            debug!("Platform descriptor matches BeagleBone Black: {}", pattern);
            return true;
        }
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debian_descriptor_matches() {
        assert!(is_beaglebone_black("Linux-5.4.0-armv7l-with-debian-10.3"));
    }

    #[test]
    fn ubuntu_and_old_glibc_descriptors_match() {
        assert!(is_beaglebone_black("Linux-4.14.71-ti-r80-armv7l-with-ubuntu-18.04"));
        assert!(is_beaglebone_black("Linux-3.8.13-armv7l-with-glibc2.4"));
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert!(is_beaglebone_black("Linux-5.4.0-ARMV7L-with-Debian-10.3"));
    }

    #[test]
    fn other_descriptors_do_not_match() {
        assert!(!is_beaglebone_black("Linux-5.4.0-x86_64-with-glibc2.31"));
        assert!(!is_beaglebone_black("Linux-6.1.21-v8+-aarch64-with-debian-12"));
        assert!(!is_beaglebone_black(""));
    }
}
