use core::ffi::{CStr, c_void};
use core::ptr::NonNull;

use crate::Result;

/// Opaque OS-level reference to a shared library image loaded into this
/// process.
#[repr(transparent)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LibHandle(NonNull<c_void>);

impl LibHandle {
    /// Wraps a raw loader handle. `None` when the loader reported failure.
    #[inline]
    pub fn new(ptr: *mut c_void) -> Option<Self> {
        NonNull::new(ptr).map(LibHandle)
    }

    /// The raw handle, for passing back to the loader.
    #[inline]
    pub fn as_ptr(self) -> *mut c_void {
        self.0.as_ptr()
    }
}

// The handle names a process-global loader resource; any thread may pass it
// back to the loader.
unsafe impl Send for LibHandle {}
unsafe impl Sync for LibHandle {}

/// A trait for the platform dynamic-loading primitives.
///
/// This trait presents one open/find/close triplet regardless of host
/// platform, plus registration of the process-exit cleanup callback so the
/// whole initialization transition can be driven against a test double.
/// Implementations are thin, stateless adapters over the OS primitives: no
/// retries, no caching, no partial-load guarantees.
///
/// # Example
/// ```rust,ignore
/// struct NullLoader;
///
/// impl DynLoader for NullLoader {
///     fn open(&self, _path: &CStr) -> Option<LibHandle> {
///         None
///     }
///
///     // Implement other required methods...
/// }
/// ```
pub trait DynLoader {
    /// Loads the shared object at `path` into the process.
    ///
    /// A `None` result means the library was not found or failed to
    /// initialize at the OS level; nothing distinguishes the two here.
    fn open(&self, path: &CStr) -> Option<LibHandle>;

    /// Case-sensitive exact-name symbol lookup within the loaded image.
    ///
    /// A `None` result means the symbol does not exist in this build or
    /// version of the library. This is an expected, non-fatal condition the
    /// caller must tolerate (library version skew).
    fn find(&self, lib: LibHandle, symbol: &CStr) -> Option<NonNull<c_void>>;

    /// Unloads the image. Errors are ignored: this is best-effort cleanup
    /// during process exit.
    fn close(&self, lib: LibHandle);

    /// Registers `hook` to run at process exit via the C runtime.
    ///
    /// The hook must be registered before any slot is populated, so a
    /// failure here leaves the binding table untouched.
    fn register_exit_hook(&self, hook: extern "C" fn()) -> Result<()>;
}
