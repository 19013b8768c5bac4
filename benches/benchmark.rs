use core::ffi::{CStr, c_void};
use core::ptr::NonNull;

use criterion::{Criterion, criterion_group, criterion_main};
use sdl_wrangler::Result;
use sdl_wrangler::os::{DynLoader, LibHandle};
use sdl_wrangler::{InitStatus, Wrangler};

/// Loader that answers every lookup without touching the OS: `find` hands
/// back the address of the queried name itself, a valid pointer that is
/// never called through.
struct BenchLoader;

impl DynLoader for BenchLoader {
    fn open(&self, _path: &CStr) -> Option<LibHandle> {
        LibHandle::new(0x1 as *mut c_void)
    }

    fn find(&self, _lib: LibHandle, symbol: &CStr) -> Option<NonNull<c_void>> {
        NonNull::new(symbol.as_ptr().cast_mut().cast())
    }

    fn close(&self, _lib: LibHandle) {}

    fn register_exit_hook(&self, _hook: extern "C" fn()) -> Result<()> {
        Ok(())
    }
}

fn init_benchmark(c: &mut Criterion) {
    c.bench_function("wrangler:memoized_init", |b| {
        let wrangler = Wrangler::with_loader(BenchLoader);
        assert_eq!(wrangler.init(), InitStatus::Ready);
        b.iter(|| wrangler.init());
    });
    c.bench_function("wrangler:full_resolve", |b| {
        b.iter(|| {
            let wrangler = Wrangler::with_loader(BenchLoader);
            wrangler.init()
        });
    });
}

criterion_group!(benches, init_benchmark);
criterion_main!(benches);
