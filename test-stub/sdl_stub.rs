#![no_std]
#![crate_type = "cdylib"]
#![crate_name = "sdl_stub"]
#![allow(non_snake_case)]

//! Fixture library for the system tests: exports a subset of the SDL 1.2
//! entry points with fixed return values.

use core::ffi::{c_char, c_int, c_void};
use core::panic::PanicInfo;

#[panic_handler]
fn panic(_info: &PanicInfo) -> ! {
    loop {}
}

#[repr(C)]
pub struct SdlVersion {
    major: u8,
    minor: u8,
    patch: u8,
}

static LINKED_VERSION: SdlVersion = SdlVersion {
    major: 1,
    minor: 2,
    patch: 15,
};

static EMPTY_ERROR: [u8; 1] = [0];

#[unsafe(no_mangle)]
extern "C" fn SDL_Init(_flags: u32) -> c_int {
    0
}

#[unsafe(no_mangle)]
extern "C" fn SDL_InitSubSystem(_flags: u32) -> c_int {
    0
}

#[unsafe(no_mangle)]
extern "C" fn SDL_QuitSubSystem(_flags: u32) {}

#[unsafe(no_mangle)]
extern "C" fn SDL_WasInit(flags: u32) -> u32 {
    flags
}

#[unsafe(no_mangle)]
extern "C" fn SDL_Quit() {}

#[unsafe(no_mangle)]
extern "C" fn SDL_GetError() -> *mut c_char {
    EMPTY_ERROR.as_ptr() as *mut c_char
}

// Only resolved by name, never called through; the variadic shape of the
// real entry point does not matter here.
#[unsafe(no_mangle)]
extern "C" fn SDL_SetError(_fmt: *const c_char) {}

#[unsafe(no_mangle)]
extern "C" fn SDL_ClearError() {}

#[unsafe(no_mangle)]
extern "C" fn SDL_Linked_Version() -> *const SdlVersion {
    &LINKED_VERSION
}

#[unsafe(no_mangle)]
extern "C" fn SDL_GetTicks() -> u32 {
    4242
}

#[unsafe(no_mangle)]
extern "C" fn SDL_Delay(_ms: u32) {}

#[unsafe(no_mangle)]
extern "C" fn SDL_PumpEvents() {}

#[unsafe(no_mangle)]
extern "C" fn SDL_PollEvent(_event: *mut c_void) -> c_int {
    0
}

#[unsafe(no_mangle)]
extern "C" fn SDL_WaitEvent(_event: *mut c_void) -> c_int {
    0
}

#[unsafe(no_mangle)]
extern "C" fn SDL_PushEvent(_event: *mut c_void) -> c_int {
    0
}

// A few optional-tier extras so the resolved table is not just the core.
#[unsafe(no_mangle)]
extern "C" fn SDL_GetAppState() -> u8 {
    0x06
}

#[unsafe(no_mangle)]
extern "C" fn SDL_NumJoysticks() -> c_int {
    0
}

#[unsafe(no_mangle)]
extern "C" fn SDL_HasSSE() -> c_int {
    1
}
