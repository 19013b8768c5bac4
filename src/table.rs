//! The binding table: one typed function-pointer slot per exported SDL
//! symbol, populated in a single best-effort pass by the initializer.

use core::ffi::{CStr, c_char, c_int, c_long, c_ulong, c_void};
use core::mem;
use core::ptr::NonNull;

use crate::abi::*;
use crate::os::{DynLoader, LibHandle};

/// Descriptor for one table entry.
#[derive(Clone, Copy, Debug)]
pub struct Symbol {
    /// Exact exported name, as handed to the loader.
    pub name: &'static str,
    /// Required symbols exist in every supported build of the library and
    /// trip a debug assertion when absent; optional ones are silently left
    /// null (version skew is expected and tolerated).
    pub required: bool,
}

fn lookup<D: DynLoader>(
    loader: &D,
    lib: LibHandle,
    name: &'static CStr,
    required: bool,
) -> Option<NonNull<c_void>> {
    let addr = loader.find(lib, name);
    if addr.is_none() {
        debug_assert!(
            !required,
            "required symbol {name:?} missing from the loaded library"
        );
        #[cfg(feature = "log")]
        log::trace!("symbol {:?} not exported by the loaded library", name);
    }
    addr
}

macro_rules! required_flag {
    (required) => {
        true
    };
    (optional) => {
        false
    };
}

/// Declares the binding table.
///
/// One invocation produces the slot struct, the compile-time descriptor
/// list and the single resolution pass, so a symbol is listed in exactly
/// one place.
macro_rules! sdl_table {
    ($($(#[$attr:meta])* $tier:ident $sym:ident: $fnty:ty;)+) => {
        /// Every SDL entry point the wrangler binds.
        ///
        /// Field names are the exported symbol names. A slot is `None`
        /// until the initializer populates it and stays `None` when the
        /// loaded build does not export the symbol; callers check before
        /// dereferencing. Once resolved the table is never written again,
        /// so sharing it across threads for reads is safe.
        #[allow(non_snake_case)]
        pub struct SdlApi {
            $($(#[$attr])* pub $sym: Option<$fnty>,)+
        }

        impl SdlApi {
            /// Exported names, in table order.
            pub const NAMES: &'static [&'static str] = &[$(stringify!($sym)),+];

            /// Number of slots in the table.
            pub const LEN: usize = Self::NAMES.len();

            /// The compile-time descriptor list the resolver iterates.
            pub const SYMBOLS: &'static [Symbol] = &[
                $(Symbol { name: stringify!($sym), required: required_flag!($tier) },)+
            ];

            /// A table with every slot null.
            pub(crate) const EMPTY: SdlApi = SdlApi { $($sym: None,)+ };

            /// Resolves every slot against `lib` in one pass.
            ///
            /// Best effort per symbol: a missing name leaves its slot null
            /// and never fails the pass.
            pub(crate) fn resolve<D: DynLoader>(loader: &D, lib: LibHandle) -> Self {
                SdlApi {
                    $($sym: {
                        const NAME: &CStr = match CStr::from_bytes_with_nul(
                            concat!(stringify!($sym), "\0").as_bytes(),
                        ) {
                            Ok(name) => name,
                            Err(_) => panic!("symbol name contains NUL"),
                        };
                        lookup(loader, lib, NAME, required_flag!($tier))
                            .map(|addr| unsafe {
                                mem::transmute::<NonNull<c_void>, $fnty>(addr)
                            })
                    },)+
                }
            }

            /// Names of the slots the loaded build did not provide, in
            /// table order.
            pub fn missing(&self) -> impl Iterator<Item = &'static str> {
                let absent = [$(self.$sym.is_none()),+];
                Self::NAMES
                    .iter()
                    .copied()
                    .zip(absent)
                    .filter_map(|(name, none)| none.then_some(name))
            }
        }
    };
}

sdl_table! {
    // SDL.h
    required SDL_Init: unsafe extern "C" fn(flags: Uint32) -> c_int;
    required SDL_InitSubSystem: unsafe extern "C" fn(flags: Uint32) -> c_int;
    required SDL_QuitSubSystem: unsafe extern "C" fn(flags: Uint32);
    required SDL_WasInit: unsafe extern "C" fn(flags: Uint32) -> Uint32;
    required SDL_Quit: unsafe extern "C" fn();

    // SDL_error.h
    required SDL_GetError: unsafe extern "C" fn() -> *mut c_char;
    required SDL_SetError: unsafe extern "C" fn(fmt: *const c_char, ...);
    required SDL_ClearError: unsafe extern "C" fn();
    optional SDL_Error: unsafe extern "C" fn(code: SDL_errorcode);

    // SDL_version.h
    required SDL_Linked_Version: unsafe extern "C" fn() -> *const SDL_version;

    // SDL_active.h
    optional SDL_GetAppState: unsafe extern "C" fn() -> Uint8;

    // SDL_timer.h
    required SDL_GetTicks: unsafe extern "C" fn() -> Uint32;
    required SDL_Delay: unsafe extern "C" fn(ms: Uint32);
    optional SDL_SetTimer: unsafe extern "C" fn(interval: Uint32, callback: SDL_TimerCallback) -> c_int;
    optional SDL_AddTimer: unsafe extern "C" fn(interval: Uint32, callback: SDL_NewTimerCallback, param: *mut c_void) -> SDL_TimerID;
    optional SDL_RemoveTimer: unsafe extern "C" fn(id: SDL_TimerID) -> SDL_bool;

    // SDL_events.h
    required SDL_PumpEvents: unsafe extern "C" fn();
    optional SDL_PeepEvents: unsafe extern "C" fn(events: *mut SDL_Event, numevents: c_int, action: SDL_eventaction, mask: Uint32) -> c_int;
    required SDL_PollEvent: unsafe extern "C" fn(event: *mut SDL_Event) -> c_int;
    required SDL_WaitEvent: unsafe extern "C" fn(event: *mut SDL_Event) -> c_int;
    required SDL_PushEvent: unsafe extern "C" fn(event: *mut SDL_Event) -> c_int;
    optional SDL_SetEventFilter: unsafe extern "C" fn(filter: SDL_EventFilter);
    optional SDL_GetEventFilter: unsafe extern "C" fn() -> SDL_EventFilter;
    optional SDL_EventState: unsafe extern "C" fn(type_: Uint8, state: c_int) -> Uint8;

    // SDL_video.h
    optional SDL_VideoInit: unsafe extern "C" fn(driver_name: *const c_char, flags: Uint32) -> c_int;
    optional SDL_VideoQuit: unsafe extern "C" fn();
    optional SDL_VideoDriverName: unsafe extern "C" fn(namebuf: *mut c_char, maxlen: c_int) -> *mut c_char;
    optional SDL_GetVideoSurface: unsafe extern "C" fn() -> *mut SDL_Surface;
    optional SDL_GetVideoInfo: unsafe extern "C" fn() -> *const SDL_VideoInfo;
    optional SDL_VideoModeOK: unsafe extern "C" fn(width: c_int, height: c_int, bpp: c_int, flags: Uint32) -> c_int;
    optional SDL_ListModes: unsafe extern "C" fn(format: *mut SDL_PixelFormat, flags: Uint32) -> *mut *mut SDL_Rect;
    optional SDL_SetVideoMode: unsafe extern "C" fn(width: c_int, height: c_int, bpp: c_int, flags: Uint32) -> *mut SDL_Surface;
    optional SDL_UpdateRects: unsafe extern "C" fn(screen: *mut SDL_Surface, numrects: c_int, rects: *mut SDL_Rect);
    optional SDL_UpdateRect: unsafe extern "C" fn(screen: *mut SDL_Surface, x: Sint32, y: Sint32, w: Uint32, h: Uint32);
    optional SDL_Flip: unsafe extern "C" fn(screen: *mut SDL_Surface) -> c_int;
    optional SDL_SetGamma: unsafe extern "C" fn(red: f32, green: f32, blue: f32) -> c_int;
    optional SDL_SetGammaRamp: unsafe extern "C" fn(red: *const Uint16, green: *const Uint16, blue: *const Uint16) -> c_int;
    optional SDL_GetGammaRamp: unsafe extern "C" fn(red: *mut Uint16, green: *mut Uint16, blue: *mut Uint16) -> c_int;
    optional SDL_SetColors: unsafe extern "C" fn(surface: *mut SDL_Surface, colors: *mut SDL_Color, firstcolor: c_int, ncolors: c_int) -> c_int;
    optional SDL_SetPalette: unsafe extern "C" fn(surface: *mut SDL_Surface, flags: c_int, colors: *mut SDL_Color, firstcolor: c_int, ncolors: c_int) -> c_int;
    optional SDL_MapRGB: unsafe extern "C" fn(format: *const SDL_PixelFormat, r: Uint8, g: Uint8, b: Uint8) -> Uint32;
    optional SDL_MapRGBA: unsafe extern "C" fn(format: *const SDL_PixelFormat, r: Uint8, g: Uint8, b: Uint8, a: Uint8) -> Uint32;
    optional SDL_GetRGB: unsafe extern "C" fn(pixel: Uint32, fmt: *const SDL_PixelFormat, r: *mut Uint8, g: *mut Uint8, b: *mut Uint8);
    optional SDL_GetRGBA: unsafe extern "C" fn(pixel: Uint32, fmt: *const SDL_PixelFormat, r: *mut Uint8, g: *mut Uint8, b: *mut Uint8, a: *mut Uint8);
    optional SDL_CreateRGBSurface: unsafe extern "C" fn(flags: Uint32, width: c_int, height: c_int, depth: c_int, rmask: Uint32, gmask: Uint32, bmask: Uint32, amask: Uint32) -> *mut SDL_Surface;
    optional SDL_CreateRGBSurfaceFrom: unsafe extern "C" fn(pixels: *mut c_void, width: c_int, height: c_int, depth: c_int, pitch: c_int, rmask: Uint32, gmask: Uint32, bmask: Uint32, amask: Uint32) -> *mut SDL_Surface;
    optional SDL_FreeSurface: unsafe extern "C" fn(surface: *mut SDL_Surface);
    optional SDL_LockSurface: unsafe extern "C" fn(surface: *mut SDL_Surface) -> c_int;
    optional SDL_UnlockSurface: unsafe extern "C" fn(surface: *mut SDL_Surface);
    optional SDL_LoadBMP_RW: unsafe extern "C" fn(src: *mut SDL_RWops, freesrc: c_int) -> *mut SDL_Surface;
    optional SDL_SaveBMP_RW: unsafe extern "C" fn(surface: *mut SDL_Surface, dst: *mut SDL_RWops, freedst: c_int) -> c_int;
    optional SDL_SetColorKey: unsafe extern "C" fn(surface: *mut SDL_Surface, flag: Uint32, key: Uint32) -> c_int;
    optional SDL_SetAlpha: unsafe extern "C" fn(surface: *mut SDL_Surface, flag: Uint32, alpha: Uint8) -> c_int;
    optional SDL_SetClipRect: unsafe extern "C" fn(surface: *mut SDL_Surface, rect: *const SDL_Rect) -> SDL_bool;
    optional SDL_GetClipRect: unsafe extern "C" fn(surface: *mut SDL_Surface, rect: *mut SDL_Rect);
    optional SDL_ConvertSurface: unsafe extern "C" fn(src: *mut SDL_Surface, fmt: *mut SDL_PixelFormat, flags: Uint32) -> *mut SDL_Surface;
    optional SDL_UpperBlit: unsafe extern "C" fn(src: *mut SDL_Surface, srcrect: *mut SDL_Rect, dst: *mut SDL_Surface, dstrect: *mut SDL_Rect) -> c_int;
    optional SDL_LowerBlit: unsafe extern "C" fn(src: *mut SDL_Surface, srcrect: *mut SDL_Rect, dst: *mut SDL_Surface, dstrect: *mut SDL_Rect) -> c_int;
    optional SDL_FillRect: unsafe extern "C" fn(dst: *mut SDL_Surface, dstrect: *mut SDL_Rect, color: Uint32) -> c_int;
    optional SDL_DisplayFormat: unsafe extern "C" fn(surface: *mut SDL_Surface) -> *mut SDL_Surface;
    optional SDL_DisplayFormatAlpha: unsafe extern "C" fn(surface: *mut SDL_Surface) -> *mut SDL_Surface;
    optional SDL_CreateYUVOverlay: unsafe extern "C" fn(width: c_int, height: c_int, format: Uint32, display: *mut SDL_Surface) -> *mut SDL_Overlay;
    optional SDL_LockYUVOverlay: unsafe extern "C" fn(overlay: *mut SDL_Overlay) -> c_int;
    optional SDL_UnlockYUVOverlay: unsafe extern "C" fn(overlay: *mut SDL_Overlay);
    optional SDL_DisplayYUVOverlay: unsafe extern "C" fn(overlay: *mut SDL_Overlay, dstrect: *mut SDL_Rect) -> c_int;
    optional SDL_FreeYUVOverlay: unsafe extern "C" fn(overlay: *mut SDL_Overlay);
    optional SDL_GL_LoadLibrary: unsafe extern "C" fn(path: *const c_char) -> c_int;
    optional SDL_GL_GetProcAddress: unsafe extern "C" fn(proc_name: *const c_char) -> *mut c_void;
    optional SDL_GL_SetAttribute: unsafe extern "C" fn(attr: SDL_GLattr, value: c_int) -> c_int;
    optional SDL_GL_GetAttribute: unsafe extern "C" fn(attr: SDL_GLattr, value: *mut c_int) -> c_int;
    optional SDL_GL_SwapBuffers: unsafe extern "C" fn();
    optional SDL_GL_UpdateRects: unsafe extern "C" fn(numrects: c_int, rects: *mut SDL_Rect);
    optional SDL_GL_Lock: unsafe extern "C" fn();
    optional SDL_GL_Unlock: unsafe extern "C" fn();
    optional SDL_WM_SetCaption: unsafe extern "C" fn(title: *const c_char, icon: *const c_char);
    optional SDL_WM_GetCaption: unsafe extern "C" fn(title: *mut *mut c_char, icon: *mut *mut c_char);
    optional SDL_WM_SetIcon: unsafe extern "C" fn(icon: *mut SDL_Surface, mask: *mut Uint8);
    optional SDL_WM_IconifyWindow: unsafe extern "C" fn() -> c_int;
    optional SDL_WM_ToggleFullScreen: unsafe extern "C" fn(surface: *mut SDL_Surface) -> c_int;
    optional SDL_WM_GrabInput: unsafe extern "C" fn(mode: SDL_GrabMode) -> SDL_GrabMode;
    optional SDL_SoftStretch: unsafe extern "C" fn(src: *mut SDL_Surface, srcrect: *mut SDL_Rect, dst: *mut SDL_Surface, dstrect: *mut SDL_Rect) -> c_int;

    // SDL_syswm.h
    optional SDL_GetWMInfo: unsafe extern "C" fn(info: *mut SDL_SysWMinfo) -> c_int;

    // SDL_mouse.h
    optional SDL_GetMouseState: unsafe extern "C" fn(x: *mut c_int, y: *mut c_int) -> Uint8;
    optional SDL_GetRelativeMouseState: unsafe extern "C" fn(x: *mut c_int, y: *mut c_int) -> Uint8;
    optional SDL_WarpMouse: unsafe extern "C" fn(x: Uint16, y: Uint16);
    optional SDL_CreateCursor: unsafe extern "C" fn(data: *mut Uint8, mask: *mut Uint8, w: c_int, h: c_int, hot_x: c_int, hot_y: c_int) -> *mut SDL_Cursor;
    optional SDL_SetCursor: unsafe extern "C" fn(cursor: *mut SDL_Cursor);
    optional SDL_GetCursor: unsafe extern "C" fn() -> *mut SDL_Cursor;
    optional SDL_FreeCursor: unsafe extern "C" fn(cursor: *mut SDL_Cursor);
    optional SDL_ShowCursor: unsafe extern "C" fn(toggle: c_int) -> c_int;

    // SDL_keyboard.h
    optional SDL_EnableUNICODE: unsafe extern "C" fn(enable: c_int) -> c_int;
    optional SDL_EnableKeyRepeat: unsafe extern "C" fn(delay: c_int, interval: c_int) -> c_int;
    optional SDL_GetKeyRepeat: unsafe extern "C" fn(delay: *mut c_int, interval: *mut c_int);
    optional SDL_GetKeyState: unsafe extern "C" fn(numkeys: *mut c_int) -> *mut Uint8;
    optional SDL_GetModState: unsafe extern "C" fn() -> SDLMod;
    optional SDL_SetModState: unsafe extern "C" fn(modstate: SDLMod);
    optional SDL_GetKeyName: unsafe extern "C" fn(key: SDLKey) -> *mut c_char;

    // SDL_joystick.h
    optional SDL_NumJoysticks: unsafe extern "C" fn() -> c_int;
    optional SDL_JoystickName: unsafe extern "C" fn(device_index: c_int) -> *const c_char;
    optional SDL_JoystickOpen: unsafe extern "C" fn(device_index: c_int) -> *mut SDL_Joystick;
    optional SDL_JoystickOpened: unsafe extern "C" fn(device_index: c_int) -> c_int;
    optional SDL_JoystickIndex: unsafe extern "C" fn(joystick: *mut SDL_Joystick) -> c_int;
    optional SDL_JoystickNumAxes: unsafe extern "C" fn(joystick: *mut SDL_Joystick) -> c_int;
    optional SDL_JoystickNumBalls: unsafe extern "C" fn(joystick: *mut SDL_Joystick) -> c_int;
    optional SDL_JoystickNumHats: unsafe extern "C" fn(joystick: *mut SDL_Joystick) -> c_int;
    optional SDL_JoystickNumButtons: unsafe extern "C" fn(joystick: *mut SDL_Joystick) -> c_int;
    optional SDL_JoystickUpdate: unsafe extern "C" fn();
    optional SDL_JoystickEventState: unsafe extern "C" fn(state: c_int) -> c_int;
    optional SDL_JoystickGetAxis: unsafe extern "C" fn(joystick: *mut SDL_Joystick, axis: c_int) -> Sint16;
    optional SDL_JoystickGetHat: unsafe extern "C" fn(joystick: *mut SDL_Joystick, hat: c_int) -> Uint8;
    optional SDL_JoystickGetBall: unsafe extern "C" fn(joystick: *mut SDL_Joystick, ball: c_int, dx: *mut c_int, dy: *mut c_int) -> c_int;
    optional SDL_JoystickGetButton: unsafe extern "C" fn(joystick: *mut SDL_Joystick, button: c_int) -> Uint8;
    optional SDL_JoystickClose: unsafe extern "C" fn(joystick: *mut SDL_Joystick);

    // SDL_audio.h
    optional SDL_AudioInit: unsafe extern "C" fn(driver_name: *const c_char) -> c_int;
    optional SDL_AudioQuit: unsafe extern "C" fn();
    optional SDL_AudioDriverName: unsafe extern "C" fn(namebuf: *mut c_char, maxlen: c_int) -> *mut c_char;
    optional SDL_OpenAudio: unsafe extern "C" fn(desired: *mut SDL_AudioSpec, obtained: *mut SDL_AudioSpec) -> c_int;
    optional SDL_GetAudioStatus: unsafe extern "C" fn() -> SDL_audiostatus;
    optional SDL_PauseAudio: unsafe extern "C" fn(pause_on: c_int);
    optional SDL_LoadWAV_RW: unsafe extern "C" fn(src: *mut SDL_RWops, freesrc: c_int, spec: *mut SDL_AudioSpec, audio_buf: *mut *mut Uint8, audio_len: *mut Uint32) -> *mut SDL_AudioSpec;
    optional SDL_FreeWAV: unsafe extern "C" fn(audio_buf: *mut Uint8);
    optional SDL_BuildAudioCVT: unsafe extern "C" fn(cvt: *mut SDL_AudioCVT, src_format: Uint16, src_channels: Uint8, src_rate: c_int, dst_format: Uint16, dst_channels: Uint8, dst_rate: c_int) -> c_int;
    optional SDL_ConvertAudio: unsafe extern "C" fn(cvt: *mut SDL_AudioCVT) -> c_int;
    optional SDL_MixAudio: unsafe extern "C" fn(dst: *mut Uint8, src: *const Uint8, len: Uint32, volume: c_int);
    optional SDL_LockAudio: unsafe extern "C" fn();
    optional SDL_UnlockAudio: unsafe extern "C" fn();
    optional SDL_CloseAudio: unsafe extern "C" fn();

    // SDL_cdrom.h
    optional SDL_CDNumDrives: unsafe extern "C" fn() -> c_int;
    optional SDL_CDName: unsafe extern "C" fn(drive: c_int) -> *const c_char;
    optional SDL_CDOpen: unsafe extern "C" fn(drive: c_int) -> *mut SDL_CD;
    optional SDL_CDStatus: unsafe extern "C" fn(cdrom: *mut SDL_CD) -> CDstatus;
    optional SDL_CDPlayTracks: unsafe extern "C" fn(cdrom: *mut SDL_CD, start_track: c_int, start_frame: c_int, ntracks: c_int, nframes: c_int) -> c_int;
    optional SDL_CDPlay: unsafe extern "C" fn(cdrom: *mut SDL_CD, start: c_int, length: c_int) -> c_int;
    optional SDL_CDPause: unsafe extern "C" fn(cdrom: *mut SDL_CD) -> c_int;
    optional SDL_CDResume: unsafe extern "C" fn(cdrom: *mut SDL_CD) -> c_int;
    optional SDL_CDStop: unsafe extern "C" fn(cdrom: *mut SDL_CD) -> c_int;
    optional SDL_CDEject: unsafe extern "C" fn(cdrom: *mut SDL_CD) -> c_int;
    optional SDL_CDClose: unsafe extern "C" fn(cdrom: *mut SDL_CD);

    // SDL_thread.h
    optional SDL_CreateThread: unsafe extern "C" fn(func: SDL_ThreadFn, data: *mut c_void) -> *mut SDL_Thread;
    optional SDL_ThreadID: unsafe extern "C" fn() -> Uint32;
    optional SDL_GetThreadID: unsafe extern "C" fn(thread: *mut SDL_Thread) -> Uint32;
    optional SDL_WaitThread: unsafe extern "C" fn(thread: *mut SDL_Thread, status: *mut c_int);
    optional SDL_KillThread: unsafe extern "C" fn(thread: *mut SDL_Thread);

    // SDL_mutex.h
    optional SDL_CreateMutex: unsafe extern "C" fn() -> *mut SDL_mutex;
    optional SDL_mutexP: unsafe extern "C" fn(mutex: *mut SDL_mutex) -> c_int;
    optional SDL_mutexV: unsafe extern "C" fn(mutex: *mut SDL_mutex) -> c_int;
    optional SDL_DestroyMutex: unsafe extern "C" fn(mutex: *mut SDL_mutex);
    optional SDL_CreateSemaphore: unsafe extern "C" fn(initial_value: Uint32) -> *mut SDL_sem;
    optional SDL_DestroySemaphore: unsafe extern "C" fn(sem: *mut SDL_sem);
    optional SDL_SemWait: unsafe extern "C" fn(sem: *mut SDL_sem) -> c_int;
    optional SDL_SemTryWait: unsafe extern "C" fn(sem: *mut SDL_sem) -> c_int;
    optional SDL_SemWaitTimeout: unsafe extern "C" fn(sem: *mut SDL_sem, ms: Uint32) -> c_int;
    optional SDL_SemPost: unsafe extern "C" fn(sem: *mut SDL_sem) -> c_int;
    optional SDL_SemValue: unsafe extern "C" fn(sem: *mut SDL_sem) -> Uint32;
    optional SDL_CreateCond: unsafe extern "C" fn() -> *mut SDL_cond;
    optional SDL_DestroyCond: unsafe extern "C" fn(cond: *mut SDL_cond);
    optional SDL_CondSignal: unsafe extern "C" fn(cond: *mut SDL_cond) -> c_int;
    optional SDL_CondBroadcast: unsafe extern "C" fn(cond: *mut SDL_cond) -> c_int;
    optional SDL_CondWait: unsafe extern "C" fn(cond: *mut SDL_cond, mutex: *mut SDL_mutex) -> c_int;
    optional SDL_CondWaitTimeout: unsafe extern "C" fn(cond: *mut SDL_cond, mutex: *mut SDL_mutex, ms: Uint32) -> c_int;

    // SDL_rwops.h
    optional SDL_RWFromFile: unsafe extern "C" fn(file: *const c_char, mode: *const c_char) -> *mut SDL_RWops;
    optional SDL_RWFromMem: unsafe extern "C" fn(mem: *mut c_void, size: c_int) -> *mut SDL_RWops;
    optional SDL_RWFromConstMem: unsafe extern "C" fn(mem: *const c_void, size: c_int) -> *mut SDL_RWops;
    optional SDL_AllocRW: unsafe extern "C" fn() -> *mut SDL_RWops;
    optional SDL_FreeRW: unsafe extern "C" fn(area: *mut SDL_RWops);
    optional SDL_ReadLE16: unsafe extern "C" fn(src: *mut SDL_RWops) -> Uint16;
    optional SDL_ReadBE16: unsafe extern "C" fn(src: *mut SDL_RWops) -> Uint16;
    optional SDL_ReadLE32: unsafe extern "C" fn(src: *mut SDL_RWops) -> Uint32;
    optional SDL_ReadBE32: unsafe extern "C" fn(src: *mut SDL_RWops) -> Uint32;
    optional SDL_ReadLE64: unsafe extern "C" fn(src: *mut SDL_RWops) -> Uint64;
    optional SDL_ReadBE64: unsafe extern "C" fn(src: *mut SDL_RWops) -> Uint64;
    optional SDL_WriteLE16: unsafe extern "C" fn(dst: *mut SDL_RWops, value: Uint16) -> c_int;
    optional SDL_WriteBE16: unsafe extern "C" fn(dst: *mut SDL_RWops, value: Uint16) -> c_int;
    optional SDL_WriteLE32: unsafe extern "C" fn(dst: *mut SDL_RWops, value: Uint32) -> c_int;
    optional SDL_WriteBE32: unsafe extern "C" fn(dst: *mut SDL_RWops, value: Uint32) -> c_int;
    optional SDL_WriteLE64: unsafe extern "C" fn(dst: *mut SDL_RWops, value: Uint64) -> c_int;
    optional SDL_WriteBE64: unsafe extern "C" fn(dst: *mut SDL_RWops, value: Uint64) -> c_int;

    // SDL_cpuinfo.h
    optional SDL_HasRDTSC: unsafe extern "C" fn() -> SDL_bool;
    optional SDL_HasMMX: unsafe extern "C" fn() -> SDL_bool;
    optional SDL_HasMMXExt: unsafe extern "C" fn() -> SDL_bool;
    optional SDL_Has3DNow: unsafe extern "C" fn() -> SDL_bool;
    optional SDL_Has3DNowExt: unsafe extern "C" fn() -> SDL_bool;
    optional SDL_HasSSE: unsafe extern "C" fn() -> SDL_bool;
    optional SDL_HasSSE2: unsafe extern "C" fn() -> SDL_bool;
    optional SDL_HasAltiVec: unsafe extern "C" fn() -> SDL_bool;

    // SDL_loadso.h
    optional SDL_LoadObject: unsafe extern "C" fn(sofile: *const c_char) -> *mut c_void;
    optional SDL_LoadFunction: unsafe extern "C" fn(handle: *mut c_void, name: *const c_char) -> *mut c_void;
    optional SDL_UnloadObject: unsafe extern "C" fn(handle: *mut c_void);

    // SDL_stdinc.h
    optional SDL_malloc: unsafe extern "C" fn(size: usize) -> *mut c_void;
    optional SDL_calloc: unsafe extern "C" fn(nmemb: usize, size: usize) -> *mut c_void;
    optional SDL_realloc: unsafe extern "C" fn(mem: *mut c_void, size: usize) -> *mut c_void;
    optional SDL_free: unsafe extern "C" fn(mem: *mut c_void);
    optional SDL_getenv: unsafe extern "C" fn(name: *const c_char) -> *mut c_char;
    optional SDL_putenv: unsafe extern "C" fn(variable: *const c_char) -> c_int;
    optional SDL_qsort: unsafe extern "C" fn(base: *mut c_void, nmemb: usize, size: usize, compare: Option<unsafe extern "C" fn(*const c_void, *const c_void) -> c_int>);
    optional SDL_memset: unsafe extern "C" fn(dst: *mut c_void, c: c_int, len: usize) -> *mut c_void;
    optional SDL_memcpy: unsafe extern "C" fn(dst: *mut c_void, src: *const c_void, len: usize) -> *mut c_void;
    optional SDL_revcpy: unsafe extern "C" fn(dst: *mut c_void, src: *const c_void, len: usize) -> *mut c_void;
    optional SDL_memcmp: unsafe extern "C" fn(s1: *const c_void, s2: *const c_void, len: usize) -> c_int;
    optional SDL_strlen: unsafe extern "C" fn(string: *const c_char) -> usize;
    optional SDL_strlcpy: unsafe extern "C" fn(dst: *mut c_char, src: *const c_char, maxlen: usize) -> usize;
    optional SDL_strlcat: unsafe extern "C" fn(dst: *mut c_char, src: *const c_char, maxlen: usize) -> usize;
    optional SDL_strdup: unsafe extern "C" fn(string: *const c_char) -> *mut c_char;
    optional SDL_strrev: unsafe extern "C" fn(string: *mut c_char) -> *mut c_char;
    optional SDL_strupr: unsafe extern "C" fn(string: *mut c_char) -> *mut c_char;
    optional SDL_strlwr: unsafe extern "C" fn(string: *mut c_char) -> *mut c_char;
    optional SDL_strchr: unsafe extern "C" fn(string: *const c_char, c: c_int) -> *mut c_char;
    optional SDL_strrchr: unsafe extern "C" fn(string: *const c_char, c: c_int) -> *mut c_char;
    optional SDL_strstr: unsafe extern "C" fn(haystack: *const c_char, needle: *const c_char) -> *mut c_char;
    optional SDL_ltoa: unsafe extern "C" fn(value: c_long, string: *mut c_char, radix: c_int) -> *mut c_char;
    optional SDL_ultoa: unsafe extern "C" fn(value: c_ulong, string: *mut c_char, radix: c_int) -> *mut c_char;
    optional SDL_strtol: unsafe extern "C" fn(string: *const c_char, endp: *mut *mut c_char, base: c_int) -> c_long;
    optional SDL_strtoll: unsafe extern "C" fn(string: *const c_char, endp: *mut *mut c_char, base: c_int) -> Sint64;
    optional SDL_strtoull: unsafe extern "C" fn(string: *const c_char, endp: *mut *mut c_char, base: c_int) -> Uint64;
    optional SDL_strtod: unsafe extern "C" fn(string: *const c_char, endp: *mut *mut c_char) -> f64;
    optional SDL_strcmp: unsafe extern "C" fn(str1: *const c_char, str2: *const c_char) -> c_int;
    optional SDL_strncmp: unsafe extern "C" fn(str1: *const c_char, str2: *const c_char, maxlen: usize) -> c_int;
    optional SDL_strcasecmp: unsafe extern "C" fn(str1: *const c_char, str2: *const c_char) -> c_int;
    optional SDL_strncasecmp: unsafe extern "C" fn(str1: *const c_char, str2: *const c_char, maxlen: usize) -> c_int;
    optional SDL_sscanf: unsafe extern "C" fn(text: *const c_char, fmt: *const c_char, ...) -> c_int;
    optional SDL_snprintf: unsafe extern "C" fn(text: *mut c_char, maxlen: usize, fmt: *const c_char, ...) -> c_int;
    optional SDL_vsnprintf: unsafe extern "C" fn(text: *mut c_char, maxlen: usize, fmt: *const c_char, ap: va_list) -> c_int;
    optional SDL_iconv_open: unsafe extern "C" fn(tocode: *const c_char, fromcode: *const c_char) -> SDL_iconv_t;
    optional SDL_iconv_close: unsafe extern "C" fn(cd: SDL_iconv_t) -> c_int;
    optional SDL_iconv: unsafe extern "C" fn(cd: SDL_iconv_t, inbuf: *mut *const c_char, inbytesleft: *mut usize, outbuf: *mut *mut c_char, outbytesleft: *mut usize) -> usize;
    optional SDL_iconv_string: unsafe extern "C" fn(tocode: *const c_char, fromcode: *const c_char, inbuf: *const c_char, inbytesleft: usize) -> *mut c_char;
}
