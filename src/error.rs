use core::fmt::Display;
use std::borrow::Cow;

/// Error types used throughout the `sdl_wrangler` library.
/// Initialization reports its outcome through [`crate::InitStatus`]; these
/// errors are the `Result`-flavored view of the two fatal outcomes.
#[derive(Debug)]
pub enum Error {
    /// The shared library could not be found or opened by the OS loader.
    ///
    /// This is terminal for the current process run: the open is never
    /// retried.
    Open {
        /// A descriptive message naming the attempted library.
        msg: Cow<'static, str>,
    },

    /// The exit-time cleanup callback could not be registered with the C
    /// runtime.
    ///
    /// Also terminal; see [`crate::InitStatus::ExitHookFailed`] for the
    /// handle-leak policy on this path.
    ExitHook {
        /// A descriptive message about the registration failure.
        msg: Cow<'static, str>,
    },
}

impl Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::Open { msg } => write!(f, "library open error: {msg}"),
            Error::ExitHook { msg } => write!(f, "exit hook error: {msg}"),
        }
    }
}

impl core::error::Error for Error {}

/// Creates an open error with the specified message.
#[cold]
#[inline(never)]
pub(crate) fn open_error(msg: impl Into<Cow<'static, str>>) -> Error {
    Error::Open { msg: msg.into() }
}

/// Creates an exit-hook registration error with the specified message.
#[cold]
#[inline(never)]
pub(crate) fn hook_error(msg: impl Into<Cow<'static, str>>) -> Error {
    Error::ExitHook { msg: msg.into() }
}
