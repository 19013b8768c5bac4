use core::ffi::{CStr, c_void};
use core::ptr::NonNull;

use crate::Result;
use crate::hook_error;
use crate::os::{DynLoader, LibHandle};

/// An implementation of the [`DynLoader`] trait over the POSIX `dlfcn`
/// interface.
pub struct SysLoader;

impl DynLoader for SysLoader {
    fn open(&self, path: &CStr) -> Option<LibHandle> {
        // RTLD_NOW so an unresolvable image fails here rather than at the
        // first call; RTLD_LOCAL keeps it out of the global lookup scope.
        let handle = unsafe { libc::dlopen(path.as_ptr(), libc::RTLD_NOW | libc::RTLD_LOCAL) };
        #[cfg(feature = "log")]
        if handle.is_null() {
            log::debug!("dlopen({:?}) failed: {}", path, last_dl_error());
        }
        LibHandle::new(handle)
    }

    fn find(&self, lib: LibHandle, symbol: &CStr) -> Option<NonNull<c_void>> {
        NonNull::new(unsafe { libc::dlsym(lib.as_ptr(), symbol.as_ptr()) })
    }

    fn close(&self, lib: LibHandle) {
        unsafe { libc::dlclose(lib.as_ptr()) };
    }

    fn register_exit_hook(&self, hook: extern "C" fn()) -> Result<()> {
        if unsafe { libc::atexit(hook) } != 0 {
            return Err(hook_error("atexit refused the callback"));
        }
        Ok(())
    }
}

#[cfg(feature = "log")]
fn last_dl_error() -> std::string::String {
    let err = unsafe { libc::dlerror() };
    if err.is_null() {
        "unknown error".into()
    } else {
        unsafe { CStr::from_ptr(err) }.to_string_lossy().into_owned()
    }
}
