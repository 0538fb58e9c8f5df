use wasm_bindgen::prelude::*;

pub mod ai;
pub mod board;
pub mod error;
pub mod game;
pub mod types;
pub mod wasm_api;

pub use error::GameError;

#[wasm_bindgen]
pub fn wasm_ready() -> bool {
    true
}

/// Forwards Rust panics to the browser console when the
/// `console_error_panic_hook` feature is enabled (default).
#[wasm_bindgen(js_name = initPanicHook)]
pub fn init_panic_hook() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}
