use std::ffi::CStr;
use std::fs;
use std::ptr;

/// Build a platform descriptor for the running host in the conventional
/// `{sysname}-{release}-{machine}-with-{distro}` shape, e.g.
/// "Linux-4.14.71-ti-r80-armv7l-with-debian-9.5". Best-effort; parts that
/// cannot be determined are left off.
pub fn platform_descriptor() -> String {
    let mut descriptor = match uname_triple() {
        Some(triple) => triple,
        None => return String::new(),
    };

    // Prefer the distro id from os-release, fall back to the libc version
    if let Some(suffix) = os_release_id().or_else(libc_version) {
        descriptor.push_str("-with-");
        descriptor.push_str(&suffix);
    }

    descriptor
}

fn uname_triple() -> Option<String> {
    let mut info: libc::utsname = unsafe { std::mem::zeroed() };
    if unsafe { libc::uname(&mut info) } != 0 {
        return None;
    }

    Some(format!(
        "{}-{}-{}",
        cstr_field(&info.sysname),
        cstr_field(&info.release),
        cstr_field(&info.machine)
    ))
}

fn cstr_field(raw: &[libc::c_char]) -> String {
    unsafe { CStr::from_ptr(raw.as_ptr()) }
        .to_string_lossy()
        .into_owned()
}

fn os_release_id() -> Option<String> {
    let contents = fs::read_to_string("/etc/os-release").ok()?;
    parse_os_release(&contents)
}

// "ID=debian" plus "VERSION_ID=\"12\"" become "debian-12"
fn parse_os_release(contents: &str) -> Option<String> {
    let mut id = None;
    let mut version = None;

    for line in contents.lines() {
        if let Some(value) = line.strip_prefix("ID=") {
            id = Some(value.trim_matches('"').to_string());
        } else if let Some(value) = line.strip_prefix("VERSION_ID=") {
            version = Some(value.trim_matches('"').to_string());
        }
    }

    match (id, version) {
        (Some(id), Some(version)) => Some(format!("{}-{}", id, version)),
        (Some(id), None) => Some(id),
        _ => None,
    }
}

// confstr reports e.g. "glibc 2.31"
fn libc_version() -> Option<String> {
    let len = unsafe { libc::confstr(libc::_CS_GNU_LIBC_VERSION, ptr::null_mut(), 0) };
    if len == 0 {
        return None;
    }

    let mut buf = vec![0u8; len];
    unsafe {
        libc::confstr(
            libc::_CS_GNU_LIBC_VERSION,
            buf.as_mut_ptr() as *mut libc::c_char,
            len,
        )
    };

    let value = CStr::from_bytes_until_nul(&buf).ok()?;
    Some(value.to_string_lossy().replace(' ', ""))
}
