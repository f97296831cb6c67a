use std::panic;
use std::sync::Once;

/// Forward panic messages to the browser console. Without this a wasm panic
/// surfaces as an opaque `unreachable` trap.
pub fn install() {
    static ONCE: Once = Once::new();
    ONCE.call_once(|| {
        panic::set_hook(Box::new(|info| {
            let msg = match info.location() {
                Some(loc) => format!(
                    "panic at {}:{}:{}: {info}",
                    loc.file(),
                    loc.line(),
                    loc.column()
                ),
                None => format!("panic: {info}"),
            };
            web_sys::console::error_1(&msg.into());
        }));
    });
}
