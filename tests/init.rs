mod common;

use std::collections::{HashMap, HashSet};
use std::sync::atomic::Ordering;

use common::MockLoader;
use rstest::rstest;
use sdl_wrangler::{InitStatus, SdlApi, Wrangler};

#[rstest]
fn init_is_idempotent() {
    let wrangler = Wrangler::with_loader(MockLoader::default());
    let first = wrangler.init();
    for _ in 0..4 {
        assert_eq!(wrangler.init(), first);
    }
    assert_eq!(first, InitStatus::Ready);
    // One open, one hook registration, one resolution pass over the table.
    assert_eq!(wrangler.loader().opens.load(Ordering::SeqCst), 1);
    assert_eq!(wrangler.loader().hooks.load(Ordering::SeqCst), 1);
    assert_eq!(wrangler.loader().finds.load(Ordering::SeqCst), SdlApi::LEN);
}

#[rstest]
fn missing_symbols_leave_only_their_slots_null() {
    let missing: HashSet<&'static str> =
        ["SDL_iconv_string", "SDL_HasAltiVec", "SDL_CDOpen"].into();
    let wrangler = Wrangler::with_loader(MockLoader {
        missing: missing.clone(),
        ..Default::default()
    });
    assert_eq!(wrangler.init(), InitStatus::Ready);

    let api = wrangler.api().unwrap();
    let absent: Vec<_> = api.missing().collect();
    assert_eq!(absent.len(), missing.len());
    for name in absent {
        assert!(missing.contains(name));
    }
    assert!(api.SDL_Init.is_some());
    assert!(api.SDL_GetTicks.is_some());
    assert!(api.SDL_CDOpen.is_none());
}

#[rstest]
fn open_failure_is_terminal_and_writes_nothing() {
    let wrangler = Wrangler::with_loader(MockLoader {
        fail_open: true,
        ..Default::default()
    });
    for _ in 0..3 {
        assert_eq!(wrangler.init(), InitStatus::OpenFailed);
    }
    assert!(wrangler.api().is_none());
    // The open ran exactly once; nothing was resolved, no hook registered.
    assert_eq!(wrangler.loader().opens.load(Ordering::SeqCst), 1);
    assert_eq!(wrangler.loader().finds.load(Ordering::SeqCst), 0);
    assert_eq!(wrangler.loader().hooks.load(Ordering::SeqCst), 0);
}

#[rstest]
fn hook_failure_leaks_the_handle_and_resolves_nothing() {
    let wrangler = Wrangler::with_loader(MockLoader {
        fail_hook: true,
        ..Default::default()
    });
    assert_eq!(wrangler.init(), InitStatus::ExitHookFailed);
    assert!(wrangler.api().is_none());
    assert_eq!(wrangler.loader().finds.load(Ordering::SeqCst), 0);
    // The open handle is deliberately leaked on this path: even an explicit
    // unload must not close it.
    wrangler.unload();
    assert_eq!(wrangler.loader().closes.load(Ordering::SeqCst), 0);
}

#[rstest]
fn unload_closes_exactly_once() {
    let wrangler = Wrangler::with_loader(MockLoader::default());
    assert_eq!(wrangler.init(), InitStatus::Ready);
    wrangler.unload();
    wrangler.unload();
    assert_eq!(wrangler.loader().closes.load(Ordering::SeqCst), 1);
}

#[rstest]
fn unload_before_init_is_a_no_op() {
    let wrangler = Wrangler::with_loader(MockLoader::default());
    wrangler.unload();
    assert_eq!(wrangler.loader().closes.load(Ordering::SeqCst), 0);
    assert!(wrangler.status().is_none());
}

#[rstest]
fn resolved_slots_carry_the_reported_addresses() {
    let addresses = HashMap::from([("SDL_Init", 0xA1), ("SDL_Quit", 0xA3)]);
    let missing = HashSet::from(["SDL_iconv_string"]);
    let wrangler = Wrangler::with_loader(MockLoader {
        addresses,
        missing,
        ..Default::default()
    });
    assert_eq!(wrangler.init(), InitStatus::Ready);

    let api = wrangler.api().unwrap();
    assert_eq!(api.SDL_Init.map(|f| f as usize), Some(0xA1));
    assert_eq!(api.SDL_Quit.map(|f| f as usize), Some(0xA3));
    assert!(api.SDL_iconv_string.is_none());
}

#[cfg(debug_assertions)]
#[rstest]
#[should_panic(expected = "required symbol")]
fn missing_required_symbol_trips_the_debug_assertion() {
    let wrangler = Wrangler::with_loader(MockLoader {
        missing: HashSet::from(["SDL_Init"]),
        ..Default::default()
    });
    let _ = wrangler.init();
}

#[rstest]
fn descriptor_list_matches_the_table() {
    assert_eq!(SdlApi::NAMES.len(), SdlApi::LEN);
    assert_eq!(SdlApi::SYMBOLS.len(), SdlApi::LEN);
    let unique: HashSet<_> = SdlApi::NAMES.iter().collect();
    assert_eq!(unique.len(), SdlApi::LEN);

    let required = |name| {
        SdlApi::SYMBOLS
            .iter()
            .find(|symbol| symbol.name == name)
            .unwrap()
            .required
    };
    assert!(required("SDL_Init"));
    assert!(required("SDL_GetTicks"));
    assert!(!required("SDL_CDOpen"));
    assert!(!required("SDL_iconv_string"));
}

#[rstest]
fn status_codes_match_the_published_values() {
    assert_eq!(InitStatus::Ready.code(), 0);
    assert_eq!(InitStatus::OpenFailed.code(), -1);
    assert_eq!(InitStatus::ExitHookFailed.code(), -2);
    assert!(InitStatus::Ready.is_ready());
    assert!(!InitStatus::OpenFailed.is_ready());
    assert!(!InitStatus::ExitHookFailed.is_ready());
}

#[rstest]
fn default_context_targets_the_platform_library() {
    let wrangler = Wrangler::new();
    assert!(wrangler.library().to_str().unwrap().contains("SDL"));
    assert!(wrangler.status().is_none());
}
