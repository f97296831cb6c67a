use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{window, CanvasRenderingContext2d, HtmlCanvasElement, Window};

use crate::config::Options;
use crate::pattern::{self, FrameCounter};

/// 2D-canvas renderer: one black clear plus one white fill per active cell,
/// advanced at a fixed interval.
pub struct RasterRenderer {
    context: CanvasRenderingContext2d,
    canvas: HtmlCanvasElement,
    counter: FrameCounter,
    opts: Options,
}

impl RasterRenderer {
    pub fn new(canvas: HtmlCanvasElement, opts: Options) -> Result<Self, JsValue> {
        let context = canvas
            .get_context("2d")?
            .ok_or("2D canvas not supported")?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(Self {
            context,
            canvas,
            counter: FrameCounter::for_mode(opts.cells, opts.mode),
            opts,
        })
    }

    /// Paint one frame and advance the counter. Cell size is derived from
    /// the live canvas dimensions, so a resize shows up on the next tick.
    pub fn draw_frame(&mut self) {
        let width = self.canvas.width();
        let height = self.canvas.height();
        let (cell_w, cell_h) = pattern::cell_metrics(width, height, self.opts.cells);

        self.context.set_fill_style_str("black");
        self.context.fill_rect(0.0, 0.0, f64::from(width), f64::from(height));

        self.context.set_fill_style_str("white");
        for cell in pattern::active_cells(self.opts.cells, self.counter.get(), self.opts.mode) {
            self.context.fill_rect(
                f64::from(cell.x * cell_w),
                f64::from(cell.y * cell_h),
                f64::from(cell_w),
                f64::from(cell_h),
            );
        }

        self.counter.advance();
    }
}

/// Acquire the 2D context and run the interval-driven render loop.
pub fn start(canvas: HtmlCanvasElement, opts: Options) -> Result<(), JsValue> {
    let win = window().ok_or("no window")?;
    fit_canvas(&win, &canvas)?;

    // Resize canvas to fit window
    let resize_closure = {
        let canvas = canvas.clone();
        Closure::wrap(Box::new(move || {
            fit_canvas(&window().unwrap(), &canvas).unwrap();
        }) as Box<dyn FnMut()>)
    };
    win.add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref())?;
    resize_closure.forget();

    let interval_ms = opts.frame_ms as i32;
    let mut renderer = RasterRenderer::new(canvas, opts)?;
    let tick = Closure::wrap(Box::new(move || renderer.draw_frame()) as Box<dyn FnMut()>);
    win.set_interval_with_callback_and_timeout_and_arguments_0(
        tick.as_ref().unchecked_ref(),
        interval_ms,
    )?;
    tick.forget();

    Ok(())
}

fn fit_canvas(win: &Window, canvas: &HtmlCanvasElement) -> Result<(), JsValue> {
    let w = win.inner_width()?.as_f64().ok_or("window width not a number")?;
    let h = win.inner_height()?.as_f64().ok_or("window height not a number")?;
    canvas.set_width(w as u32);
    canvas.set_height(h as u32);
    Ok(())
}
