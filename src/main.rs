#![cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]

mod config;
#[cfg(target_arch = "wasm32")]
mod frontend;
mod gallery;
mod logging;
mod media;
mod rain;
mod random;

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    eprintln!("This project is frontend-only. Run `trunk serve` or `trunk build --release`.");
}

#[cfg(target_arch = "wasm32")]
fn main() {
    frontend::run();
}
