//! Core SDL data types: integers, surfaces, audio, CD-ROM, RWops, threads.

use core::ffi::{c_int, c_uint, c_void};

use super::keys::{SDLKey, SDLMod};

pub type Uint8 = u8;
pub type Sint8 = i8;
pub type Uint16 = u16;
pub type Sint16 = i16;
pub type Uint32 = u32;
pub type Sint32 = i32;
pub type Uint64 = u64;
pub type Sint64 = i64;

/// SDL's boolean, an `int` on the wire.
pub type SDL_bool = c_int;
pub const SDL_FALSE: SDL_bool = 0;
pub const SDL_TRUE: SDL_bool = 1;

/// Platform `va_list`, opaque at this boundary.
pub type va_list = *mut c_void;

pub type SDL_iconv_t = *mut c_void;

/// Compiled library version, as returned by `SDL_Linked_Version`.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SDL_version {
    pub major: Uint8,
    pub minor: Uint8,
    pub patch: Uint8,
}

#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SDL_Rect {
    pub x: Sint16,
    pub y: Sint16,
    pub w: Uint16,
    pub h: Uint16,
}

#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SDL_Color {
    pub r: Uint8,
    pub g: Uint8,
    pub b: Uint8,
    pub unused: Uint8,
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct SDL_Palette {
    pub ncolors: c_int,
    pub colors: *mut SDL_Color,
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct SDL_PixelFormat {
    pub palette: *mut SDL_Palette,
    pub BitsPerPixel: Uint8,
    pub BytesPerPixel: Uint8,
    pub Rloss: Uint8,
    pub Gloss: Uint8,
    pub Bloss: Uint8,
    pub Aloss: Uint8,
    pub Rshift: Uint8,
    pub Gshift: Uint8,
    pub Bshift: Uint8,
    pub Ashift: Uint8,
    pub Rmask: Uint32,
    pub Gmask: Uint32,
    pub Bmask: Uint32,
    pub Amask: Uint32,
    /// RGB color key information.
    pub colorkey: Uint32,
    /// Alpha value information (per-surface alpha).
    pub alpha: Uint8,
}

#[repr(C)]
pub struct SDL_Surface {
    pub flags: Uint32,
    pub format: *mut SDL_PixelFormat,
    pub w: c_int,
    pub h: c_int,
    pub pitch: Uint16,
    pub pixels: *mut c_void,
    pub offset: c_int,
    /// Hardware-specific surface info, private to the library.
    pub hwdata: *mut c_void,
    pub clip_rect: SDL_Rect,
    pub unused1: Uint32,
    pub locked: Uint32,
    /// Blit mapping info, private to the library.
    pub map: *mut c_void,
    pub format_version: c_uint,
    pub refcount: c_int,
}

/// Video hardware description.
///
/// The leading block is a C bitfield set (`hw_available` .. `UnusedBits3`)
/// that packs into a single 32-bit unit; it is exposed here as one word.
#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct SDL_VideoInfo {
    pub flags: Uint32,
    /// Total amount of video memory, in kilobytes.
    pub video_mem: Uint32,
    pub vfmt: *mut SDL_PixelFormat,
    pub current_w: c_int,
    pub current_h: c_int,
}

/// YUV video overlay.
///
/// The trailing `hw_overlay`/`UnusedBits` bitfields pack into the final
/// 32-bit word.
#[repr(C)]
pub struct SDL_Overlay {
    pub format: Uint32,
    pub w: c_int,
    pub h: c_int,
    pub planes: c_int,
    pub pitches: *mut Uint16,
    pub pixels: *mut *mut Uint8,
    pub hwfuncs: *mut c_void,
    pub hwdata: *mut c_void,
    pub flags: Uint32,
}

#[repr(C)]
pub struct SDL_Cursor {
    pub area: SDL_Rect,
    pub hot_x: Sint16,
    pub hot_y: Sint16,
    pub data: *mut Uint8,
    pub mask: *mut Uint8,
    pub save: [*mut Uint8; 2],
    /// Window-manager cursor, private to the library.
    pub wm_cursor: *mut c_void,
}

pub type SDL_AudioCallback =
    Option<unsafe extern "C" fn(userdata: *mut c_void, stream: *mut Uint8, len: c_int)>;

#[repr(C)]
pub struct SDL_AudioSpec {
    pub freq: c_int,
    pub format: Uint16,
    pub channels: Uint8,
    pub silence: Uint8,
    pub samples: Uint16,
    pub padding: Uint16,
    pub size: Uint32,
    pub callback: SDL_AudioCallback,
    pub userdata: *mut c_void,
}

pub type SDL_AudioFilter = Option<unsafe extern "C" fn(cvt: *mut SDL_AudioCVT, format: Uint16)>;

#[repr(C)]
pub struct SDL_AudioCVT {
    pub needed: c_int,
    pub src_format: Uint16,
    pub dst_format: Uint16,
    pub rate_incr: f64,
    pub buf: *mut Uint8,
    pub len: c_int,
    pub len_cvt: c_int,
    pub len_mult: c_int,
    pub len_ratio: f64,
    pub filters: [SDL_AudioFilter; 10],
    pub filter_index: c_int,
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct SDL_CDtrack {
    pub id: Uint8,
    pub type_: Uint8,
    pub unused: Uint16,
    /// Length of the track, in frames.
    pub length: Uint32,
    /// Offset of the track from the beginning of the disc, in frames.
    pub offset: Uint32,
}

#[repr(C)]
pub struct SDL_CD {
    pub id: c_int,
    pub status: CDstatus,
    pub numtracks: c_int,
    pub cur_track: c_int,
    pub cur_frame: c_int,
    pub track: [SDL_CDtrack; SDL_MAX_TRACKS as usize + 1],
}

pub type CDstatus = c_int;
pub const CD_TRAYEMPTY: CDstatus = 0;
pub const CD_STOPPED: CDstatus = 1;
pub const CD_PLAYING: CDstatus = 2;
pub const CD_PAUSED: CDstatus = 3;
pub const CD_ERROR: CDstatus = -1;

pub const SDL_MAX_TRACKS: c_int = 99;
/// Frames per second on a CD.
pub const CD_FPS: c_int = 75;
pub const SDL_AUDIO_TRACK: Uint8 = 0x00;
pub const SDL_DATA_TRACK: Uint8 = 0x04;

#[repr(C)]
#[derive(Clone, Copy)]
pub struct SDL_RWopsMem {
    pub base: *mut Uint8,
    pub here: *mut Uint8,
    pub stop: *mut Uint8,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub struct SDL_RWopsUnknown {
    pub data1: *mut c_void,
}

#[repr(C)]
pub union SDL_RWopsHidden {
    pub mem: SDL_RWopsMem,
    pub unknown: SDL_RWopsUnknown,
}

/// Read/write operation structure.
#[repr(C)]
pub struct SDL_RWops {
    pub seek:
        Option<unsafe extern "C" fn(context: *mut SDL_RWops, offset: c_int, whence: c_int) -> c_int>,
    pub read: Option<
        unsafe extern "C" fn(
            context: *mut SDL_RWops,
            ptr: *mut c_void,
            size: c_int,
            maxnum: c_int,
        ) -> c_int,
    >,
    pub write: Option<
        unsafe extern "C" fn(
            context: *mut SDL_RWops,
            ptr: *const c_void,
            size: c_int,
            num: c_int,
        ) -> c_int,
    >,
    pub close: Option<unsafe extern "C" fn(context: *mut SDL_RWops) -> c_int>,
    pub type_: Uint32,
    pub hidden: SDL_RWopsHidden,
}

pub const RW_SEEK_SET: c_int = 0;
pub const RW_SEEK_CUR: c_int = 1;
pub const RW_SEEK_END: c_int = 2;

pub type SDL_TimerCallback = Option<unsafe extern "C" fn(interval: Uint32) -> Uint32>;
pub type SDL_NewTimerCallback =
    Option<unsafe extern "C" fn(interval: Uint32, param: *mut c_void) -> Uint32>;
/// Opaque timer identifier.
pub type SDL_TimerID = *mut c_void;

pub type SDL_ThreadFn = Option<unsafe extern "C" fn(data: *mut c_void) -> c_int>;

/// Keyboard symbol: scancode, translated key, modifier state and the
/// UNICODE translation (populated when `SDL_EnableUNICODE` is on).
#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct SDL_keysym {
    pub scancode: Uint8,
    pub sym: SDLKey,
    pub mod_: SDLMod,
    pub unicode: Uint16,
}

// Handles the library never defines publicly.
#[repr(C)]
pub struct SDL_mutex {
    _opaque: [u8; 0],
}

#[repr(C)]
pub struct SDL_sem {
    _opaque: [u8; 0],
}

#[repr(C)]
pub struct SDL_cond {
    _opaque: [u8; 0],
}

#[repr(C)]
pub struct SDL_Thread {
    _opaque: [u8; 0],
}

#[repr(C)]
pub struct SDL_Joystick {
    _opaque: [u8; 0],
}

/// Window-manager info record for `SDL_GetWMInfo`.
///
/// The layout is platform-conditional in the original headers; it is kept
/// opaque here. Allocate it through the platform headers and cast.
#[repr(C)]
pub struct SDL_SysWMinfo {
    _opaque: [u8; 0],
}
