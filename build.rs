use std::env;

const STUB_FILE_NAME: &str = "sdl_stub.rs";
const STUB_DIR_PATH: &str = "test-stub";

/// Compiles the fixture library the system tests load through the real
/// platform loader. The fixture is a plain cdylib exporting a subset of
/// `SDL_*` symbols with known return values.
fn compile_stub(target: &String) {
    let mut cmd = ::std::process::Command::new("rustc");
    cmd.arg("-O")
        .arg("--target")
        .arg(target)
        .arg("--crate-type")
        .arg("cdylib")
        .arg("-C")
        .arg("panic=abort")
        .arg(format!("{}/{}", STUB_DIR_PATH, STUB_FILE_NAME))
        .arg("--out-dir")
        .arg("target");
    assert!(
        cmd.status()
            .expect("could not compile the stub library!")
            .success()
    );
}

fn main() {
    let ci = env::var("SDL_WRANGLER_CI").is_ok();
    if ci {
        println!("cargo:rerun-if-changed=always_trigger_rebuild");
        let target = env::var("TARGET").unwrap();
        compile_stub(&target);
    }
}
