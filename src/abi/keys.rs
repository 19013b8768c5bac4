//! Key codes and modifier masks.

use core::ffi::c_int;

/// Translated key code, as delivered in [`crate::abi::SDL_keysym`].
///
/// The values mirror ASCII where a printable mapping exists.
pub type SDLKey = c_int;

pub const SDLK_UNKNOWN: SDLKey = 0;
pub const SDLK_FIRST: SDLKey = 0;
pub const SDLK_BACKSPACE: SDLKey = 8;
pub const SDLK_TAB: SDLKey = 9;
pub const SDLK_CLEAR: SDLKey = 12;
pub const SDLK_RETURN: SDLKey = 13;
pub const SDLK_PAUSE: SDLKey = 19;
pub const SDLK_ESCAPE: SDLKey = 27;
pub const SDLK_SPACE: SDLKey = 32;
pub const SDLK_EXCLAIM: SDLKey = 33;
pub const SDLK_QUOTEDBL: SDLKey = 34;
pub const SDLK_HASH: SDLKey = 35;
pub const SDLK_DOLLAR: SDLKey = 36;
pub const SDLK_AMPERSAND: SDLKey = 38;
pub const SDLK_QUOTE: SDLKey = 39;
pub const SDLK_LEFTPAREN: SDLKey = 40;
pub const SDLK_RIGHTPAREN: SDLKey = 41;
pub const SDLK_ASTERISK: SDLKey = 42;
pub const SDLK_PLUS: SDLKey = 43;
pub const SDLK_COMMA: SDLKey = 44;
pub const SDLK_MINUS: SDLKey = 45;
pub const SDLK_PERIOD: SDLKey = 46;
pub const SDLK_SLASH: SDLKey = 47;
pub const SDLK_0: SDLKey = 48;
pub const SDLK_1: SDLKey = 49;
pub const SDLK_2: SDLKey = 50;
pub const SDLK_3: SDLKey = 51;
pub const SDLK_4: SDLKey = 52;
pub const SDLK_5: SDLKey = 53;
pub const SDLK_6: SDLKey = 54;
pub const SDLK_7: SDLKey = 55;
pub const SDLK_8: SDLKey = 56;
pub const SDLK_9: SDLKey = 57;
pub const SDLK_COLON: SDLKey = 58;
pub const SDLK_SEMICOLON: SDLKey = 59;
pub const SDLK_LESS: SDLKey = 60;
pub const SDLK_EQUALS: SDLKey = 61;
pub const SDLK_GREATER: SDLKey = 62;
pub const SDLK_QUESTION: SDLKey = 63;
pub const SDLK_AT: SDLKey = 64;
// Skip uppercase letters: SDL reports lowercase syms.
pub const SDLK_LEFTBRACKET: SDLKey = 91;
pub const SDLK_BACKSLASH: SDLKey = 92;
pub const SDLK_RIGHTBRACKET: SDLKey = 93;
pub const SDLK_CARET: SDLKey = 94;
pub const SDLK_UNDERSCORE: SDLKey = 95;
pub const SDLK_BACKQUOTE: SDLKey = 96;
pub const SDLK_a: SDLKey = 97;
pub const SDLK_b: SDLKey = 98;
pub const SDLK_c: SDLKey = 99;
pub const SDLK_d: SDLKey = 100;
pub const SDLK_e: SDLKey = 101;
pub const SDLK_f: SDLKey = 102;
pub const SDLK_g: SDLKey = 103;
pub const SDLK_h: SDLKey = 104;
pub const SDLK_i: SDLKey = 105;
pub const SDLK_j: SDLKey = 106;
pub const SDLK_k: SDLKey = 107;
pub const SDLK_l: SDLKey = 108;
pub const SDLK_m: SDLKey = 109;
pub const SDLK_n: SDLKey = 110;
pub const SDLK_o: SDLKey = 111;
pub const SDLK_p: SDLKey = 112;
pub const SDLK_q: SDLKey = 113;
pub const SDLK_r: SDLKey = 114;
pub const SDLK_s: SDLKey = 115;
pub const SDLK_t: SDLKey = 116;
pub const SDLK_u: SDLKey = 117;
pub const SDLK_v: SDLKey = 118;
pub const SDLK_w: SDLKey = 119;
pub const SDLK_x: SDLKey = 120;
pub const SDLK_y: SDLKey = 121;
pub const SDLK_z: SDLKey = 122;
pub const SDLK_DELETE: SDLKey = 127;
// International keysyms occupy SDLK_WORLD_0 .. SDLK_WORLD_95 contiguously.
pub const SDLK_WORLD_0: SDLKey = 160;
pub const SDLK_WORLD_95: SDLKey = 255;
// Numeric keypad.
pub const SDLK_KP0: SDLKey = 256;
pub const SDLK_KP1: SDLKey = 257;
pub const SDLK_KP2: SDLKey = 258;
pub const SDLK_KP3: SDLKey = 259;
pub const SDLK_KP4: SDLKey = 260;
pub const SDLK_KP5: SDLKey = 261;
pub const SDLK_KP6: SDLKey = 262;
pub const SDLK_KP7: SDLKey = 263;
pub const SDLK_KP8: SDLKey = 264;
pub const SDLK_KP9: SDLKey = 265;
pub const SDLK_KP_PERIOD: SDLKey = 266;
pub const SDLK_KP_DIVIDE: SDLKey = 267;
pub const SDLK_KP_MULTIPLY: SDLKey = 268;
pub const SDLK_KP_MINUS: SDLKey = 269;
pub const SDLK_KP_PLUS: SDLKey = 270;
pub const SDLK_KP_ENTER: SDLKey = 271;
pub const SDLK_KP_EQUALS: SDLKey = 272;
// Arrows plus Home/End pad.
pub const SDLK_UP: SDLKey = 273;
pub const SDLK_DOWN: SDLKey = 274;
pub const SDLK_RIGHT: SDLKey = 275;
pub const SDLK_LEFT: SDLKey = 276;
pub const SDLK_INSERT: SDLKey = 277;
pub const SDLK_HOME: SDLKey = 278;
pub const SDLK_END: SDLKey = 279;
pub const SDLK_PAGEUP: SDLKey = 280;
pub const SDLK_PAGEDOWN: SDLKey = 281;
// Function keys.
pub const SDLK_F1: SDLKey = 282;
pub const SDLK_F2: SDLKey = 283;
pub const SDLK_F3: SDLKey = 284;
pub const SDLK_F4: SDLKey = 285;
pub const SDLK_F5: SDLKey = 286;
pub const SDLK_F6: SDLKey = 287;
pub const SDLK_F7: SDLKey = 288;
pub const SDLK_F8: SDLKey = 289;
pub const SDLK_F9: SDLKey = 290;
pub const SDLK_F10: SDLKey = 291;
pub const SDLK_F11: SDLKey = 292;
pub const SDLK_F12: SDLKey = 293;
pub const SDLK_F13: SDLKey = 294;
pub const SDLK_F14: SDLKey = 295;
pub const SDLK_F15: SDLKey = 296;
// Key state modifier keys.
pub const SDLK_NUMLOCK: SDLKey = 300;
pub const SDLK_CAPSLOCK: SDLKey = 301;
pub const SDLK_SCROLLOCK: SDLKey = 302;
pub const SDLK_RSHIFT: SDLKey = 303;
pub const SDLK_LSHIFT: SDLKey = 304;
pub const SDLK_RCTRL: SDLKey = 305;
pub const SDLK_LCTRL: SDLKey = 306;
pub const SDLK_RALT: SDLKey = 307;
pub const SDLK_LALT: SDLKey = 308;
pub const SDLK_RMETA: SDLKey = 309;
pub const SDLK_LMETA: SDLKey = 310;
pub const SDLK_LSUPER: SDLKey = 311;
pub const SDLK_RSUPER: SDLKey = 312;
pub const SDLK_MODE: SDLKey = 313;
pub const SDLK_COMPOSE: SDLKey = 314;
// Miscellaneous function keys.
pub const SDLK_HELP: SDLKey = 315;
pub const SDLK_PRINT: SDLKey = 316;
pub const SDLK_SYSREQ: SDLKey = 317;
pub const SDLK_BREAK: SDLKey = 318;
pub const SDLK_MENU: SDLKey = 319;
pub const SDLK_POWER: SDLKey = 320;
pub const SDLK_EURO: SDLKey = 321;
pub const SDLK_UNDO: SDLKey = 322;
pub const SDLK_LAST: SDLKey = 323;

/// Modifier state, as returned by `SDL_GetModState`.
pub type SDLMod = c_int;

bitflags::bitflags! {
    /// Typed view of an [`SDLMod`] mask.
    #[repr(transparent)]
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct KeyMod: c_int {
        const LSHIFT = 0x0001;
        const RSHIFT = 0x0002;
        const LCTRL = 0x0040;
        const RCTRL = 0x0080;
        const LALT = 0x0100;
        const RALT = 0x0200;
        const LMETA = 0x0400;
        const RMETA = 0x0800;
        const NUM = 0x1000;
        const CAPS = 0x2000;
        const MODE = 0x4000;
        const RESERVED = 0x8000;
        const CTRL = Self::LCTRL.bits() | Self::RCTRL.bits();
        const SHIFT = Self::LSHIFT.bits() | Self::RSHIFT.bits();
        const ALT = Self::LALT.bits() | Self::RALT.bits();
        const META = Self::LMETA.bits() | Self::RMETA.bits();
    }
}
