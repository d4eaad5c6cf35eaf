//! Browser console logging. Outside wasm (unit tests) there is no console to
//! bind to, so messages are dropped.

#[cfg(target_arch = "wasm32")]
pub fn log(message: &str) {
    gloo_console::log!(message);
}

#[cfg(not(target_arch = "wasm32"))]
pub fn log(_message: &str) {}

#[cfg(target_arch = "wasm32")]
pub fn error(message: &str) {
    gloo_console::error!(message);
}

#[cfg(not(target_arch = "wasm32"))]
pub fn error(_message: &str) {}
