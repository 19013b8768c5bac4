//! The SDL event union and its per-event structures.

use core::ffi::{c_int, c_void};

use crate::abi::{SDL_keysym, Sint16, Uint8, Uint16, Uint32};

pub const SDL_NOEVENT: Uint8 = 0;
pub const SDL_ACTIVEEVENT: Uint8 = 1;
pub const SDL_KEYDOWN: Uint8 = 2;
pub const SDL_KEYUP: Uint8 = 3;
pub const SDL_MOUSEMOTION: Uint8 = 4;
pub const SDL_MOUSEBUTTONDOWN: Uint8 = 5;
pub const SDL_MOUSEBUTTONUP: Uint8 = 6;
pub const SDL_JOYAXISMOTION: Uint8 = 7;
pub const SDL_JOYBALLMOTION: Uint8 = 8;
pub const SDL_JOYHATMOTION: Uint8 = 9;
pub const SDL_JOYBUTTONDOWN: Uint8 = 10;
pub const SDL_JOYBUTTONUP: Uint8 = 11;
pub const SDL_QUIT: Uint8 = 12;
pub const SDL_SYSWMEVENT: Uint8 = 13;
pub const SDL_EVENT_RESERVEDA: Uint8 = 14;
pub const SDL_EVENT_RESERVEDB: Uint8 = 15;
pub const SDL_VIDEORESIZE: Uint8 = 16;
pub const SDL_VIDEOEXPOSE: Uint8 = 17;
/// Events `SDL_USEREVENT` through `SDL_NUMEVENTS - 1` are for application use.
pub const SDL_USEREVENT: Uint8 = 24;
pub const SDL_NUMEVENTS: Uint8 = 32;

/// Mask covering one event type, for `SDL_PeepEvents`.
pub const fn SDL_EVENTMASK(ty: Uint8) -> Uint32 {
    1 << ty
}
pub const SDL_ALLEVENTS: Uint32 = 0xFFFF_FFFF;

pub type SDL_eventaction = c_int;
pub const SDL_ADDEVENT: SDL_eventaction = 0;
pub const SDL_PEEKEVENT: SDL_eventaction = 1;
pub const SDL_GETEVENT: SDL_eventaction = 2;

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct SDL_ActiveEvent {
    pub type_: Uint8,
    /// Whether the given states were gained or lost.
    pub gain: Uint8,
    /// A mask of app-state values (see [`crate::abi::AppState`]).
    pub state: Uint8,
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct SDL_KeyboardEvent {
    pub type_: Uint8,
    /// The keyboard device index.
    pub which: Uint8,
    pub state: Uint8,
    pub keysym: SDL_keysym,
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct SDL_MouseMotionEvent {
    pub type_: Uint8,
    pub which: Uint8,
    /// The current button state.
    pub state: Uint8,
    pub x: Uint16,
    pub y: Uint16,
    pub xrel: Sint16,
    pub yrel: Sint16,
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct SDL_MouseButtonEvent {
    pub type_: Uint8,
    pub which: Uint8,
    pub button: Uint8,
    pub state: Uint8,
    pub x: Uint16,
    pub y: Uint16,
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct SDL_JoyAxisEvent {
    pub type_: Uint8,
    pub which: Uint8,
    pub axis: Uint8,
    pub value: Sint16,
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct SDL_JoyBallEvent {
    pub type_: Uint8,
    pub which: Uint8,
    pub ball: Uint8,
    pub xrel: Sint16,
    pub yrel: Sint16,
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct SDL_JoyHatEvent {
    pub type_: Uint8,
    pub which: Uint8,
    pub hat: Uint8,
    pub value: Uint8,
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct SDL_JoyButtonEvent {
    pub type_: Uint8,
    pub which: Uint8,
    pub button: Uint8,
    pub state: Uint8,
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct SDL_ResizeEvent {
    pub type_: Uint8,
    pub w: c_int,
    pub h: c_int,
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct SDL_ExposeEvent {
    pub type_: Uint8,
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct SDL_QuitEvent {
    pub type_: Uint8,
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct SDL_UserEvent {
    pub type_: Uint8,
    pub code: c_int,
    pub data1: *mut c_void,
    pub data2: *mut c_void,
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct SDL_SysWMEvent {
    pub type_: Uint8,
    /// Driver-dependent message, opaque at this boundary.
    pub msg: *mut c_void,
}

/// General event structure: a C union discriminated by `type_`.
#[repr(C)]
#[derive(Clone, Copy)]
pub union SDL_Event {
    pub type_: Uint8,
    pub active: SDL_ActiveEvent,
    pub key: SDL_KeyboardEvent,
    pub motion: SDL_MouseMotionEvent,
    pub button: SDL_MouseButtonEvent,
    pub jaxis: SDL_JoyAxisEvent,
    pub jball: SDL_JoyBallEvent,
    pub jhat: SDL_JoyHatEvent,
    pub jbutton: SDL_JoyButtonEvent,
    pub resize: SDL_ResizeEvent,
    pub expose: SDL_ExposeEvent,
    pub quit: SDL_QuitEvent,
    pub user: SDL_UserEvent,
    pub syswm: SDL_SysWMEvent,
}

pub type SDL_EventFilter = Option<unsafe extern "C" fn(event: *const SDL_Event) -> c_int>;
