//! Memory Match core crate.
//!
//! A card-pairing game for the browser: the page supplies `.card` elements with
//! a `data-card` pair token, `start_game()` binds them to a [`board::Board`], and
//! once every pair is found a fireworks [`fireworks::Show`] plays on a
//! full-screen canvas until the player hits "play again".
//!
//! Board and fireworks logic are plain Rust and run natively under `cargo test`;
//! only `dom` and `celebration` touch browser APIs.

use wasm_bindgen::prelude::*;

pub mod board;
pub mod config;
pub mod error;
pub mod fireworks;
pub mod logging;
pub mod rng;

mod celebration;
mod dom;

pub use config::GameConfig;
pub use error::GameError;

// Optional small allocator for size (feature gated)
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Bind the page's cards with the default configuration.
#[wasm_bindgen]
pub fn start_game() -> Result<(), JsValue> {
    launch(GameConfig::default())?;
    Ok(())
}

/// Bind the page's cards with a JSON config; omitted fields keep their defaults.
#[cfg(feature = "serde_json")]
#[wasm_bindgen]
pub fn start_game_with_config(json: &str) -> Result<(), JsValue> {
    launch(GameConfig::from_json(json)?)?;
    Ok(())
}

fn launch(config: GameConfig) -> Result<(), GameError> {
    config.validate()?;
    logging::init(logging::parse_level(&config.log_level)?);
    dom::mount(config)
}
