use leptos::*;

fn main() {
    console_error_panic_hook::set_once();
    hirelens_frontend::init_logging();
    log::info!("starting hirelens frontend: initializing runtime config");

    spawn_local(async move {
        hirelens_frontend::config::init().await;
        log::info!("runtime config initialized");
        hirelens_frontend::router::mount_app();
    });
}
