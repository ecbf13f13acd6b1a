use leafscan::app::App;

fn main() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).expect("Failed to initialize logger");

    log::info!("LeafScan starting");
    leptos::mount::mount_to_body(App);
}
