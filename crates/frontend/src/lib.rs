//! Folio portfolio - Yew WASM Frontend
//!
//! Renders the project cards and the search/tag filter bar.

mod app;
mod components;
pub mod config;
mod hooks;
mod scroll;
pub mod state;

pub use app::App;

use wasm_bindgen::prelude::*;

/// WASM entry point.
#[wasm_bindgen(start)]
pub fn main() {
    let root = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(config::MOUNT_ID));

    match root {
        Some(root) => yew::Renderer::<App>::with_root(root).render(),
        None => {
            web_sys::console::warn_1(
                &format!("#{} not found, mounting on <body>", config::MOUNT_ID).into(),
            );
            yew::Renderer::<App>::new().render()
        }
    };
}
