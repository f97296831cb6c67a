use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{
    window, HtmlCanvasElement, WebGl2RenderingContext as GL, WebGlProgram, WebGlShader,
};

use crate::config::Options;
use crate::pattern;

/// Pass-through vertex position plus per-cell translation.
const VERTEX_SHADER: &str = r"
attribute vec2 a_position;
uniform vec2 u_translation;

void main() {
    gl_Position = vec4(a_position + u_translation, 0.0, 1.0);
}
";

/// Solid white cells.
const FRAGMENT_SHADER: &str = r"
precision mediump float;

void main() {
    gl_FragColor = vec4(1.0, 1.0, 1.0, 1.0);
}
";

/// Compile the program, upload the unit-cell mesh and run the
/// animation-frame render loop.
pub fn start(canvas: HtmlCanvasElement, opts: Options) -> Result<(), JsValue> {
    let gl: GL = canvas
        .get_context("webgl2")?
        .ok_or("WebGL2 not supported")?
        .dyn_into()?;

    let program = link_program(&gl, VERTEX_SHADER, FRAGMENT_SHADER)?;
    upload_unit_cell(&gl, &program, opts.cells)?;
    let translation = gl
        .get_uniform_location(&program, "u_translation")
        .ok_or("u_translation uniform not found")?;

    let win = window().ok_or("no window")?;
    fit_viewport(&gl, &canvas, &win)?;

    // Resize canvas and viewport to fit window
    let resize_closure = {
        let canvas = canvas.clone();
        let gl = gl.clone();
        Closure::wrap(Box::new(move || {
            fit_viewport(&gl, &canvas, &window().unwrap()).unwrap();
        }) as Box<dyn FnMut()>)
    };
    win.add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref())?;
    resize_closure.forget();

    let start_time = win.performance().ok_or("no performance clock")?.now();
    let cell_size = 2.0 / opts.cells as f32;
    gl.clear_color(0.0, 0.0, 0.0, 1.0);

    // Animation loop
    // `f` holds the animation-frame closure so that we can keep calling
    // `request_animation_frame` recursively. Storing it inside an `Option`
    // allows us to create the `Closure` first and then obtain a reference to
    // it from within itself.
    let f: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let g = f.clone();
    *g.borrow_mut() = Some(Closure::wrap(Box::new(move |now: f64| {
        // Time drives the pattern here, not a per-tick counter: render rate
        // and pattern-advance rate stay decoupled.
        let frame = pattern::frame_at(now - start_time, opts.frame_ms, opts.cells);
        gl.clear(GL::COLOR_BUFFER_BIT);

        for cell in pattern::active_cells(opts.cells, frame, opts.mode) {
            // Cell position * cell size, normalized to [-1, 1]; the
            // y-coordinate is inverted because the grid origin is top-left.
            gl.uniform2f(
                Some(&translation),
                cell.x as f32 * cell_size - 1.0,
                cell.y as f32 * -cell_size + 1.0,
            );
            gl.draw_arrays(GL::TRIANGLES, 0, 6);
        }

        // schedule next
        window()
            .unwrap()
            .request_animation_frame(f.borrow().as_ref().unwrap().as_ref().unchecked_ref())
            .unwrap();
    }) as Box<dyn FnMut(f64)>));

    win.request_animation_frame(g.borrow().as_ref().unwrap().as_ref().unchecked_ref())?;

    Ok(())
}

fn compile_shader(gl: &GL, shader_type: u32, source: &str) -> Result<WebGlShader, JsValue> {
    let shader = gl
        .create_shader(shader_type)
        .ok_or("could not create shader")?;
    gl.shader_source(&shader, source);
    gl.compile_shader(&shader);

    if gl
        .get_shader_parameter(&shader, GL::COMPILE_STATUS)
        .as_bool()
        .unwrap_or(false)
    {
        Ok(shader)
    } else {
        let log = gl.get_shader_info_log(&shader).unwrap_or_default();
        Err(JsValue::from_str(&format!(
            "could not compile shader:\n{log}"
        )))
    }
}

fn link_program(
    gl: &GL,
    vertex_source: &str,
    fragment_source: &str,
) -> Result<WebGlProgram, JsValue> {
    let vertex_shader = compile_shader(gl, GL::VERTEX_SHADER, vertex_source)?;
    let fragment_shader = compile_shader(gl, GL::FRAGMENT_SHADER, fragment_source)?;

    let program = gl.create_program().ok_or("could not create program")?;
    gl.attach_shader(&program, &vertex_shader);
    gl.attach_shader(&program, &fragment_shader);
    gl.link_program(&program);

    if gl
        .get_program_parameter(&program, GL::LINK_STATUS)
        .as_bool()
        .unwrap_or(false)
    {
        gl.use_program(Some(&program));
        Ok(program)
    } else {
        let log = gl.get_program_info_log(&program).unwrap_or_default();
        Err(JsValue::from_str(&format!("could not link program:\n{log}")))
    }
}

/// Upload the static two-triangle unit cell and bind it to `a_position`.
/// Per-cell placement happens entirely through `u_translation`.
fn upload_unit_cell(gl: &GL, program: &WebGlProgram, cells: u32) -> Result<(), JsValue> {
    let s = 2.0 / cells as f32;
    // y extends downward from the cell origin; the grid starts top-left.
    #[rustfmt::skip]
    let positions: [f32; 12] = [
        0.0, 0.0,   s, 0.0,   0.0, -s,
        0.0, -s,    s, 0.0,   s,   -s,
    ];

    let buffer = gl.create_buffer().ok_or("could not create buffer")?;
    gl.bind_buffer(GL::ARRAY_BUFFER, Some(&buffer));
    let view = js_sys::Float32Array::from(positions.as_slice());
    gl.buffer_data_with_array_buffer_view(GL::ARRAY_BUFFER, &view, GL::STATIC_DRAW);

    let location = gl.get_attrib_location(program, "a_position");
    if location < 0 {
        return Err("a_position attribute not found".into());
    }
    gl.enable_vertex_attrib_array(location as u32);
    gl.vertex_attrib_pointer_with_i32(location as u32, 2, GL::FLOAT, false, 0, 0);
    Ok(())
}

fn fit_viewport(gl: &GL, canvas: &HtmlCanvasElement, win: &web_sys::Window) -> Result<(), JsValue> {
    let w = win.inner_width()?.as_f64().ok_or("window width not a number")?;
    let h = win.inner_height()?.as_f64().ok_or("window height not a number")?;
    canvas.set_width(w as u32);
    canvas.set_height(h as u32);
    gl.viewport(0, 0, w as i32, h as i32);
    Ok(())
}
