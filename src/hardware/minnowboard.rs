use std::ffi::CStr;

use log::debug;

/// Platform name the mraa library reports on a MinnowBoard MAX.
const MINNOWBOARD_NAME: &str = "MinnowBoard MAX";

const MRAA_LIBRARY: &[u8] = b"libmraa.so\0";
const MRAA_PLATFORM_NAME: &[u8] = b"mraa_get_platform_name\0";

/// Provider of the vendor library's platform name query. Hosts without the
/// library installed get [`NoVendorLibrary`] and the probe abstains.
pub trait PlatformQuery {
    fn platform_name(&self) -> Option<String>;
}

/// Query provider for hosts where the vendor library is absent.
pub struct NoVendorLibrary;

impl PlatformQuery for NoVendorLibrary {
    fn platform_name(&self) -> Option<String> {
        None
    }
}

/// Runtime binding to the optional mraa vendor library. The handle is
/// closed again on drop.
pub struct VendorLibrary {
    handle: *mut libc::c_void,
}

impl VendorLibrary {
    /// Load the vendor library, or `None` if it is not installed on this
    /// host.
    pub fn open() -> Option<Self> {
        let handle = unsafe {
            libc::dlopen(
                MRAA_LIBRARY.as_ptr() as *const libc::c_char,
                libc::RTLD_LAZY | libc::RTLD_LOCAL,
            )
        };

        if handle.is_null() {
            debug!("mraa library not installed");
            return None;
        }

        Some(VendorLibrary { handle })
    }
}

impl PlatformQuery for VendorLibrary {
    fn platform_name(&self) -> Option<String> {
        let symbol = unsafe {
            libc::dlsym(self.handle, MRAA_PLATFORM_NAME.as_ptr() as *const libc::c_char)
        };
        if symbol.is_null() {
            return None;
        }

        let get_platform_name: unsafe extern "C" fn() -> *const libc::c_char =
            unsafe { std::mem::transmute(symbol) };

        let name = unsafe { get_platform_name() };
        if name.is_null() {
            return None;
        }

        Some(unsafe { CStr::from_ptr(name) }.to_string_lossy().into_owned())
    }
}

impl Drop for VendorLibrary {
    fn drop(&mut self) {
        unsafe { libc::dlclose(self.handle) };
    }
}

/// Ask the provider for its platform name and compare against the
/// MinnowBoard MAX product name. Exact match only.
pub fn is_minnowboard(query: &dyn PlatformQuery) -> bool {
    match query.platform_name() {
        Some(name) => {
            debug!("Vendor library reports platform: {}", name);
            name == MINNOWBOARD_NAME
        }
        None => false,
    }
}
