#[cfg(target_arch = "wasm32")]
fn main() {
    kiosk_admin::logging::init();
    log::info!("🚀 Kiosk admin starting...");

    yew::Renderer::<kiosk_admin::components::App>::new().render();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    eprintln!("kiosk-admin runs in the browser: build it for wasm32-unknown-unknown (e.g. `trunk serve`)");
}
