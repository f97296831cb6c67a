#![cfg_attr(target_arch = "wasm32", allow(dead_code))]

// Pattern math and option parsing are portable so `cargo test` runs on the
// host; everything that touches the DOM sits behind the wasm32 gate below.

pub mod config;
pub mod pattern;

#[cfg(target_arch = "wasm32")]
mod wasm {
    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;

    use crate::config::{Backend, Options};

    mod hook;
    mod raster;
    mod vector;

    #[wasm_bindgen(start)]
    pub fn main() -> Result<(), JsValue> {
        hook::install();

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;
        let canvas = document
            .get_element_by_id("c")
            .ok_or("canvas not found")?
            .dyn_into::<web_sys::HtmlCanvasElement>()?;

        let opts = Options::from_attrs(
            canvas.get_attribute("data-backend").as_deref(),
            canvas.get_attribute("data-cells").as_deref(),
            canvas.get_attribute("data-frame-ms").as_deref(),
            canvas.get_attribute("data-pattern").as_deref(),
        );
        web_sys::console::log_1(
            &format!(
                "munching squares: {n}x{n} cells, backend={b}, {ms} ms/frame",
                n = opts.cells,
                b = opts.backend.as_str(),
                ms = opts.frame_ms,
            )
            .into(),
        );

        match opts.backend {
            Backend::Raster => raster::start(canvas, opts),
            Backend::Vector => vector::start(canvas, opts),
        }
    }
}

// When compiling for non-wasm targets (e.g., `cargo test` on host),
// provide an empty stub so the crate still builds.
#[cfg(not(target_arch = "wasm32"))]
pub fn main() {}
