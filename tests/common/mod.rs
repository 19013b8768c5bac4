use core::ffi::c_void;
use std::collections::{HashMap, HashSet};
use std::ffi::CStr;
use std::ptr::NonNull;
use std::sync::atomic::{AtomicUsize, Ordering};

use sdl_wrangler::os::{DynLoader, LibHandle};
use sdl_wrangler::{Error, Result};

/// Handle value the mock reports for a successful open.
pub const MOCK_HANDLE: usize = 0x1;

/// Scripted stand-in for the platform loader, counting every primitive
/// call.
#[derive(Default)]
pub struct MockLoader {
    /// Pretend the library is absent.
    pub fail_open: bool,
    /// Pretend the C runtime refuses the exit hook.
    pub fail_hook: bool,
    /// Names `find` pretends the image does not export.
    pub missing: HashSet<&'static str>,
    /// Explicit addresses per name; every other found symbol gets a
    /// distinct synthetic address.
    pub addresses: HashMap<&'static str, usize>,
    pub opens: AtomicUsize,
    pub finds: AtomicUsize,
    pub closes: AtomicUsize,
    pub hooks: AtomicUsize,
}

impl DynLoader for MockLoader {
    fn open(&self, _path: &CStr) -> Option<LibHandle> {
        self.opens.fetch_add(1, Ordering::SeqCst);
        if self.fail_open {
            None
        } else {
            LibHandle::new(MOCK_HANDLE as *mut c_void)
        }
    }

    fn find(&self, _lib: LibHandle, symbol: &CStr) -> Option<NonNull<c_void>> {
        let serial = self.finds.fetch_add(1, Ordering::SeqCst);
        let name = symbol.to_str().unwrap();
        if self.missing.contains(name) {
            return None;
        }
        let addr = self
            .addresses
            .get(name)
            .copied()
            .unwrap_or(0x1000 + serial * 0x10);
        NonNull::new(addr as *mut c_void)
    }

    fn close(&self, _lib: LibHandle) {
        self.closes.fetch_add(1, Ordering::SeqCst);
    }

    fn register_exit_hook(&self, _hook: extern "C" fn()) -> Result<()> {
        self.hooks.fetch_add(1, Ordering::SeqCst);
        if self.fail_hook {
            Err(Error::ExitHook {
                msg: "scripted failure".into(),
            })
        } else {
            Ok(())
        }
    }
}
