//! Probes for the SDL shared library and reports what the installed build
//! exports.

use sdl_wrangler::{InitStatus, SdlApi};

fn main() {
    env_logger::init();

    match sdl_wrangler::init() {
        InitStatus::Ready => {}
        status => {
            println!("SDL-1.2 was not found ({status}, code {})", status.code());
            return;
        }
    }
    let api = sdl_wrangler::api().unwrap();

    println!("SDL found");
    if let Some(linked_version) = api.SDL_Linked_Version {
        let version = unsafe { &*linked_version() };
        println!(
            "version: {}.{}.{}",
            version.major, version.minor, version.patch
        );
    }

    let missing: Vec<_> = api.missing().collect();
    println!(
        "bound {} of {} entry points",
        SdlApi::LEN - missing.len(),
        SdlApi::LEN
    );
    for name in missing {
        println!("  missing: {name}");
    }
}
