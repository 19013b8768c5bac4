use core::ffi::{CStr, c_int, c_void};
use core::ptr::NonNull;

use windows_sys::Win32::Foundation::{FreeLibrary, HMODULE};
use windows_sys::Win32::System::LibraryLoader::{GetProcAddress, LoadLibraryA};

use crate::Result;
use crate::hook_error;
use crate::os::{DynLoader, LibHandle};

// windows-sys does not bind the C runtime; the exit hook goes through CRT
// atexit, same as the loader on the other platforms.
unsafe extern "C" {
    fn atexit(callback: extern "C" fn()) -> c_int;
}

/// An implementation of the [`DynLoader`] trait over the Win32 library
/// loader.
pub struct SysLoader;

impl DynLoader for SysLoader {
    fn open(&self, path: &CStr) -> Option<LibHandle> {
        let module = unsafe { LoadLibraryA(path.as_ptr().cast()) };
        #[cfg(feature = "log")]
        if module.is_null() {
            let err_code = unsafe { windows_sys::Win32::Foundation::GetLastError() };
            log::debug!("LoadLibraryA({:?}) failed with error: {}", path, err_code);
        }
        LibHandle::new(module.cast())
    }

    fn find(&self, lib: LibHandle, symbol: &CStr) -> Option<NonNull<c_void>> {
        let proc = unsafe { GetProcAddress(lib.as_ptr() as HMODULE, symbol.as_ptr().cast()) }?;
        NonNull::new(proc as *mut c_void)
    }

    fn close(&self, lib: LibHandle) {
        unsafe { FreeLibrary(lib.as_ptr() as HMODULE) };
    }

    fn register_exit_hook(&self, hook: extern "C" fn()) -> Result<()> {
        if unsafe { atexit(hook) } != 0 {
            return Err(hook_error("atexit refused the callback"));
        }
        Ok(())
    }
}
