//! Constant tables and flag types for the bound entry points.

use core::ffi::{c_int, c_uint};

use crate::abi::{Uint8, Uint16, Uint32};

bitflags::bitflags! {
    /// Subsystem flags for `SDL_Init`, `SDL_InitSubSystem`, `SDL_WasInit`.
    #[repr(transparent)]
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct InitFlags: Uint32 {
        const TIMER = 0x0000_0001;
        const AUDIO = 0x0000_0010;
        const VIDEO = 0x0000_0020;
        const CDROM = 0x0000_0100;
        const JOYSTICK = 0x0000_0200;
        const NOPARACHUTE = 0x0010_0000;
        const EVENTTHREAD = 0x0100_0000;
        const EVERYTHING = 0x0000_FFFF;
    }
}

bitflags::bitflags! {
    /// Surface and video-mode flags.
    #[repr(transparent)]
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct SurfaceFlags: Uint32 {
        const SWSURFACE = 0x0000_0000;
        const HWSURFACE = 0x0000_0001;
        const OPENGL = 0x0000_0002;
        const ASYNCBLIT = 0x0000_0004;
        const OPENGLBLIT = 0x0000_000A;
        const RESIZABLE = 0x0000_0010;
        const NOFRAME = 0x0000_0020;
        const HWACCEL = 0x0000_0100;
        const SRCCOLORKEY = 0x0000_1000;
        const RLEACCELOK = 0x0000_2000;
        const RLEACCEL = 0x0000_4000;
        const SRCALPHA = 0x0001_0000;
        const PREALLOC = 0x0100_0000;
        const ANYFORMAT = 0x1000_0000;
        const HWPALETTE = 0x2000_0000;
        const DOUBLEBUF = 0x4000_0000;
        const FULLSCREEN = 0x8000_0000;
    }
}

bitflags::bitflags! {
    /// Application state mask, as reported by `SDL_GetAppState` and in
    /// active events.
    #[repr(transparent)]
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct AppState: Uint8 {
        const MOUSEFOCUS = 0x01;
        const INPUTFOCUS = 0x02;
        const ACTIVE = 0x04;
    }
}

// Audio format constants: bits 0-7 are the sample width, bit 12 marks
// big-endian, bit 15 marks signed samples.
pub const AUDIO_U8: Uint16 = 0x0008;
pub const AUDIO_S8: Uint16 = 0x8008;
pub const AUDIO_U16LSB: Uint16 = 0x0010;
pub const AUDIO_S16LSB: Uint16 = 0x8010;
pub const AUDIO_U16MSB: Uint16 = 0x1010;
pub const AUDIO_S16MSB: Uint16 = 0x9010;
pub const AUDIO_U16: Uint16 = AUDIO_U16LSB;
pub const AUDIO_S16: Uint16 = AUDIO_S16LSB;

pub type SDL_audiostatus = c_int;
pub const SDL_AUDIO_STOPPED: SDL_audiostatus = 0;
pub const SDL_AUDIO_PLAYING: SDL_audiostatus = 1;
pub const SDL_AUDIO_PAUSED: SDL_audiostatus = 2;

/// Maximum volume for `SDL_MixAudio`.
pub const SDL_MIX_MAXVOLUME: c_int = 128;

pub type SDL_errorcode = c_int;
pub const SDL_ENOMEM: SDL_errorcode = 0;
pub const SDL_EFREAD: SDL_errorcode = 1;
pub const SDL_EFWRITE: SDL_errorcode = 2;
pub const SDL_EFSEEK: SDL_errorcode = 3;
pub const SDL_UNSUPPORTED: SDL_errorcode = 4;
pub const SDL_LASTERROR: SDL_errorcode = 5;

pub type SDL_GLattr = c_int;
pub const SDL_GL_RED_SIZE: SDL_GLattr = 0;
pub const SDL_GL_GREEN_SIZE: SDL_GLattr = 1;
pub const SDL_GL_BLUE_SIZE: SDL_GLattr = 2;
pub const SDL_GL_ALPHA_SIZE: SDL_GLattr = 3;
pub const SDL_GL_BUFFER_SIZE: SDL_GLattr = 4;
pub const SDL_GL_DOUBLEBUFFER: SDL_GLattr = 5;
pub const SDL_GL_DEPTH_SIZE: SDL_GLattr = 6;
pub const SDL_GL_STENCIL_SIZE: SDL_GLattr = 7;
pub const SDL_GL_ACCUM_RED_SIZE: SDL_GLattr = 8;
pub const SDL_GL_ACCUM_GREEN_SIZE: SDL_GLattr = 9;
pub const SDL_GL_ACCUM_BLUE_SIZE: SDL_GLattr = 10;
pub const SDL_GL_ACCUM_ALPHA_SIZE: SDL_GLattr = 11;
pub const SDL_GL_STEREO: SDL_GLattr = 12;
pub const SDL_GL_MULTISAMPLEBUFFERS: SDL_GLattr = 13;
pub const SDL_GL_MULTISAMPLESAMPLES: SDL_GLattr = 14;
pub const SDL_GL_ACCELERATED_VISUAL: SDL_GLattr = 15;
pub const SDL_GL_SWAP_CONTROL: SDL_GLattr = 16;

pub type SDL_GrabMode = c_int;
pub const SDL_GRAB_QUERY: SDL_GrabMode = -1;
pub const SDL_GRAB_OFF: SDL_GrabMode = 0;
pub const SDL_GRAB_ON: SDL_GrabMode = 1;

// Button and key state reports.
pub const SDL_RELEASED: Uint8 = 0;
pub const SDL_PRESSED: Uint8 = 1;

pub const SDL_BUTTON_LEFT: Uint8 = 1;
pub const SDL_BUTTON_MIDDLE: Uint8 = 2;
pub const SDL_BUTTON_RIGHT: Uint8 = 3;
pub const SDL_BUTTON_WHEELUP: Uint8 = 4;
pub const SDL_BUTTON_WHEELDOWN: Uint8 = 5;

/// Mask covering one mouse button in a button-state report.
pub const fn SDL_BUTTON(button: Uint8) -> Uint8 {
    1 << (button - 1)
}

pub const SDL_HAT_CENTERED: Uint8 = 0x00;
pub const SDL_HAT_UP: Uint8 = 0x01;
pub const SDL_HAT_RIGHT: Uint8 = 0x02;
pub const SDL_HAT_DOWN: Uint8 = 0x04;
pub const SDL_HAT_LEFT: Uint8 = 0x08;
pub const SDL_HAT_RIGHTUP: Uint8 = SDL_HAT_RIGHT | SDL_HAT_UP;
pub const SDL_HAT_RIGHTDOWN: Uint8 = SDL_HAT_RIGHT | SDL_HAT_DOWN;
pub const SDL_HAT_LEFTUP: Uint8 = SDL_HAT_LEFT | SDL_HAT_UP;
pub const SDL_HAT_LEFTDOWN: Uint8 = SDL_HAT_LEFT | SDL_HAT_DOWN;

// Toggle arguments shared by `SDL_ShowCursor`, `SDL_EventState` and the
// per-device event-state calls.
pub const SDL_QUERY: c_int = -1;
pub const SDL_IGNORE: c_int = 0;
pub const SDL_DISABLE: c_int = 0;
pub const SDL_ENABLE: c_int = 1;

pub const SDL_ALPHA_OPAQUE: Uint8 = 255;
pub const SDL_ALPHA_TRANSPARENT: Uint8 = 0;

pub const SDL_MUTEX_TIMEDOUT: c_int = 1;
pub const SDL_MUTEX_MAXWAIT: Uint32 = !0;

/// YUV overlay pixel formats (fourcc codes).
pub const SDL_YV12_OVERLAY: Uint32 = 0x3231_5659;
pub const SDL_IYUV_OVERLAY: Uint32 = 0x5655_5949;
pub const SDL_YUY2_OVERLAY: Uint32 = 0x3259_5559;
pub const SDL_UYVY_OVERLAY: Uint32 = 0x5956_5955;
pub const SDL_YVYU_OVERLAY: Uint32 = 0x5559_5659;

/// Timer granularity, in milliseconds.
pub const SDL_TIMESLICE: c_uint = 10;
