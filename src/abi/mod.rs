//! Declarations mirroring the SDL 1.2 published ABI.
//!
//! Everything in this module reproduces the wrapped library's struct
//! layouts, signatures and constant values bit for bit. The semantics
//! behind them belong to SDL itself; nothing here is interpreted by the
//! binding layer.
#![allow(non_camel_case_types, non_snake_case)]

mod consts;
mod events;
mod keys;
mod types;

pub use consts::*;
pub use events::*;
pub use keys::*;
pub use types::*;
