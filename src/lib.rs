use wasm_bindgen::prelude::*;

pub mod board;
pub mod config;
pub mod error;
pub mod game;
pub mod movegen;
pub mod types;
pub mod wasm;

#[wasm_bindgen]
pub fn wasm_ready() -> bool {
    true
}
