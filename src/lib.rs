//! # sdl_wrangler
//! A lazy runtime binding layer for the SDL 1.2 shared library.
//! ## Usage
//! Nothing links against SDL at build time. The first call to [`init`]
//! locates the library through the platform dynamic loader, resolves every
//! known entry point into a typed function-pointer slot and registers an
//! exit-time release of the handle. The outcome is memoized for the rest of
//! the process, so a host without SDL installed costs one failed open and a
//! cached status afterwards.
//! ## Example
//! ```no_run
//! use sdl_wrangler::abi::InitFlags;
//!
//! let Some(sdl) = sdl_wrangler::api() else {
//!     eprintln!("SDL-1.2 was not found");
//!     return;
//! };
//! // Slots for symbols the installed build lacks are `None`; callers
//! // check before dereferencing.
//! if let Some(sdl_init) = sdl.SDL_Init {
//!     unsafe { sdl_init(InitFlags::TIMER.bits()) };
//! }
//! ```

pub mod abi;
mod error;
pub mod os;
mod table;
mod wrangler;

pub use error::Error;
pub use table::{SdlApi, Symbol};
pub use wrangler::{InitStatus, Wrangler, api, init, try_init};

pub(crate) use error::{hook_error, open_error};

pub type Result<T> = core::result::Result<T, Error>;
