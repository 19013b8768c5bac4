//! Starts the timer subsystem through the bound slots and measures a
//! delay.

use sdl_wrangler::abi::InitFlags;

fn main() {
    env_logger::init();

    let Some(api) = sdl_wrangler::api() else {
        eprintln!("SDL-1.2 was not found");
        return;
    };
    let (Some(sdl_init), Some(get_ticks), Some(delay), Some(quit)) =
        (api.SDL_Init, api.SDL_GetTicks, api.SDL_Delay, api.SDL_Quit)
    else {
        eprintln!("installed SDL lacks the timer entry points");
        return;
    };

    unsafe {
        if sdl_init(InitFlags::TIMER.bits()) != 0 {
            eprintln!("SDL_Init failed");
            return;
        }
        let before = get_ticks();
        delay(250);
        println!("250ms delay measured as {}ms", get_ticks() - before);
        quit();
    }
}
