//! The initialization state machine and the process-wide context.

use core::fmt::Display;
use core::sync::atomic::{AtomicBool, Ordering};
use std::borrow::Cow;
use std::ffi::{CStr, CString};
use std::sync::OnceLock;

use crate::os::{DEFAULT_LIBRARY, DynLoader, LibHandle, SysLoader};
use crate::table::SdlApi;
use crate::{Result, hook_error, open_error};

/// Discrete outcome of the one-time initialization transition.
///
/// Whatever the first call produces is cached and returned unchanged by
/// every later call; none of the failures is retried within the same
/// process run.
#[repr(i32)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InitStatus {
    /// The library was opened, the exit hook registered and the table
    /// resolved.
    Ready = 0,

    /// The OS loader could not find or open the library.
    OpenFailed = -1,

    /// The exit-time cleanup callback could not be registered.
    ///
    /// The already-open handle is deliberately leaked on this path: with no
    /// exit hook in place there is no owner left to release it, and closing
    /// it eagerly would invalidate any slot a caller reads while ignoring
    /// the failed status. The table is left untouched (every slot null).
    ExitHookFailed = -2,
}

impl InitStatus {
    /// The C-compatible status code: 0, -1 or -2.
    #[inline]
    pub const fn code(self) -> i32 {
        self as i32
    }

    /// Whether the binding table is usable.
    #[inline]
    pub const fn is_ready(self) -> bool {
        matches!(self, InitStatus::Ready)
    }
}

impl Display for InitStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            InitStatus::Ready => write!(f, "ready"),
            InitStatus::OpenFailed => write!(f, "library open failed"),
            InitStatus::ExitHookFailed => write!(f, "exit hook registration failed"),
        }
    }
}

/// Terminal state of one context.
struct InitState {
    status: InitStatus,
    /// `Some` iff `status` is [`InitStatus::Ready`].
    handle: Option<LibHandle>,
    table: SdlApi,
}

/// A binding context: the library handle, the cached status and the slot
/// table, behind a one-time-initialization guard.
///
/// The process-wide instance behind [`init`]/[`api`] is the normal way in;
/// constructing a context directly exists so tests can inject a fresh
/// instance with a mock loader instead of sharing hidden static state.
pub struct Wrangler<D = SysLoader> {
    loader: D,
    library: Cow<'static, CStr>,
    state: OnceLock<InitState>,
    unloaded: AtomicBool,
}

impl Wrangler<SysLoader> {
    /// A context over the platform loader and the platform default library
    /// location.
    pub const fn new() -> Self {
        Self::with_loader(SysLoader)
    }
}

impl Default for Wrangler<SysLoader> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: DynLoader> Wrangler<D> {
    /// A context over `loader` and the platform default library location.
    pub const fn with_loader(loader: D) -> Self {
        Wrangler {
            loader,
            library: Cow::Borrowed(DEFAULT_LIBRARY),
            state: OnceLock::new(),
            unloaded: AtomicBool::new(false),
        }
    }

    /// A context bound to an explicit library location instead of the
    /// platform default. The fixture-driven tests load their stub library
    /// through this; observable behavior is otherwise identical.
    pub fn with_library(loader: D, library: CString) -> Self {
        Wrangler {
            loader,
            library: Cow::Owned(library),
            state: OnceLock::new(),
            unloaded: AtomicBool::new(false),
        }
    }

    /// The library location this context opens.
    #[inline]
    pub fn library(&self) -> &CStr {
        &self.library
    }

    /// The loader this context drives.
    #[inline]
    pub fn loader(&self) -> &D {
        &self.loader
    }

    /// Runs the initialization transition once and returns its outcome.
    ///
    /// Idempotent: the first call performs the open, hook registration and
    /// resolution pass; every later call (from any thread) returns the
    /// cached status without touching the OS loader again.
    pub fn init(&self) -> InitStatus {
        self.state.get_or_init(|| self.transition()).status
    }

    /// The cached status, or `None` when initialization has not run yet.
    #[inline]
    pub fn status(&self) -> Option<InitStatus> {
        self.state.get().map(|state| state.status)
    }

    /// The resolved table. `None` unless [`Wrangler::init`] has reached
    /// [`InitStatus::Ready`].
    #[inline]
    pub fn api(&self) -> Option<&SdlApi> {
        self.state
            .get()
            .filter(|state| state.status.is_ready())
            .map(|state| &state.table)
    }

    fn transition(&self) -> InitState {
        let Some(handle) = self.loader.open(&self.library) else {
            return InitState {
                status: InitStatus::OpenFailed,
                handle: None,
                table: SdlApi::EMPTY,
            };
        };
        if self.loader.register_exit_hook(release_process_library).is_err() {
            // Deliberate leak of `handle`; see `InitStatus::ExitHookFailed`.
            return InitState {
                status: InitStatus::ExitHookFailed,
                handle: None,
                table: SdlApi::EMPTY,
            };
        }
        let table = SdlApi::resolve(&self.loader, handle);
        #[cfg(feature = "log")]
        log::debug!(
            "resolved {} of {} symbols from {:?}",
            SdlApi::LEN - table.missing().count(),
            SdlApi::LEN,
            self.library
        );
        InitState {
            status: InitStatus::Ready,
            handle: Some(handle),
            table,
        }
    }

    /// Releases the library handle.
    ///
    /// Safe to call at any time and any number of times: only the first
    /// call after a successful initialization issues a close, everything
    /// else is a no-op. Slots are not cleared, so this belongs at process
    /// exit and nowhere earlier; the registered hook calls it there.
    pub fn unload(&self) {
        let Some(state) = self.state.get() else {
            return;
        };
        let Some(handle) = state.handle else {
            return;
        };
        if !self.unloaded.swap(true, Ordering::AcqRel) {
            self.loader.close(handle);
        }
    }
}

/// The process-wide context behind [`init`], [`api`] and [`try_init`].
static PROCESS: Wrangler = Wrangler::new();

/// Exit-time release of the process-wide handle, registered through the
/// loader adapter during initialization. Runs at most one close and stays
/// a no-op when initialization never reached `Ready`.
pub(crate) extern "C" fn release_process_library() {
    PROCESS.unload();
}

/// Initializes the process-wide binding table.
///
/// The first call probes for the library; later calls return the cached
/// [`InitStatus`] unchanged.
#[inline]
pub fn init() -> InitStatus {
    PROCESS.init()
}

/// The process-wide table, initializing it on first use.
///
/// `None` when the library is absent or initialization failed; the slots
/// of a returned table may still individually be `None` on older library
/// builds.
#[inline]
pub fn api() -> Option<&'static SdlApi> {
    PROCESS.init();
    PROCESS.api()
}

/// Result-flavored [`init`]: the resolved table, or the failure as an
/// [`crate::Error`] naming the attempted library.
pub fn try_init() -> Result<&'static SdlApi> {
    match PROCESS.init() {
        InitStatus::Ready => Ok(PROCESS.api().unwrap()),
        InitStatus::OpenFailed => Err(open_error(format!(
            "could not open {:?}",
            PROCESS.library()
        ))),
        InitStatus::ExitHookFailed => {
            Err(hook_error("could not register the exit-time cleanup callback"))
        }
    }
}
