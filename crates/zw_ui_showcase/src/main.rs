//! Binary entrypoint for the browser-hosted component gallery.

#[cfg(all(target_arch = "wasm32", feature = "csr"))]
fn main() {
    zw_ui_showcase::mount();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    eprintln!(
        "This binary is intended for the browser/WASM workflow. Build `zw_ui_showcase_app` for wasm32 with the `csr` feature."
    );
}
