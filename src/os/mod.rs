//! Platform selection for the dynamic-loader primitives.

mod traits;

cfg_if::cfg_if! {
    if #[cfg(windows)] {
        mod windows;
        pub use windows::SysLoader;
    } else {
        mod unix;
        pub use unix::SysLoader;
    }
}

pub use traits::{DynLoader, LibHandle};

use core::ffi::CStr;

cfg_if::cfg_if! {
    if #[cfg(windows)] {
        /// Expected in the system search path, no directory needed.
        pub(crate) const DEFAULT_LIBRARY: &CStr = c"SDL.dll";
    } else if #[cfg(target_os = "macos")] {
        /// Default installation path.
        pub(crate) const DEFAULT_LIBRARY: &CStr = c"/usr/local/lib/libSDL.dylib";
    } else {
        pub(crate) const DEFAULT_LIBRARY: &CStr = c"libSDL.so";
    }
}
