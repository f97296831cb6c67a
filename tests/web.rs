#![cfg(target_arch = "wasm32")]

use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn fresh_canvas() -> web_sys::HtmlCanvasElement {
    let document = web_sys::window().unwrap().document().unwrap();
    let canvas = document
        .create_element("canvas")
        .unwrap()
        .dyn_into::<web_sys::HtmlCanvasElement>()
        .unwrap();
    document.body().unwrap().append_child(&canvas).unwrap();
    canvas
}

#[wasm_bindgen_test]
fn canvas_surface_is_available() {
    let canvas = fresh_canvas();
    canvas.set_width(320);
    canvas.set_height(200);
    assert_eq!((canvas.width(), canvas.height()), (320, 200));

    let rect = canvas.get_bounding_client_rect();
    assert!(rect.width() > 0.0 && rect.height() > 0.0);
}

#[wasm_bindgen_test]
fn resize_between_paints_is_safe_and_visible() {
    let canvas = fresh_canvas();
    canvas.set_width(640);
    canvas.set_height(480);

    let context = canvas
        .get_context("2d")
        .unwrap()
        .expect("2D canvas not supported")
        .dyn_into::<web_sys::CanvasRenderingContext2d>()
        .unwrap();

    context.set_fill_style_str("black");
    context.fill_rect(0.0, 0.0, 640.0, 480.0);

    // Shrink the surface mid-run: painting must keep working and the next
    // tick's cell metrics must pick up the new dimensions.
    canvas.set_width(650);
    canvas.set_height(130);
    context.fill_rect(0.0, 0.0, 650.0, 130.0);

    let metrics = munch_wasm::pattern::cell_metrics(canvas.width(), canvas.height(), 64);
    assert_eq!(metrics, (10, 2));
}
