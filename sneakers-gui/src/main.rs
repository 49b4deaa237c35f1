mod app;

use sneakers_core::{StoreConfig, Storefront};

fn init_logging() {
    // Default to info level, but allow override via RUST_LOG
    // Example: RUST_LOG=sneakers_core::listing=debug,sneakers_gui=debug
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sneakers_core=info,sneakers_gui=info".into()),
        )
        .init();
}

fn main() -> iced::Result {
    init_logging();

    let store = match StoreConfig::from_env().and_then(Storefront::new) {
        Ok(store) => store,
        Err(e) => {
            eprintln!("Failed to start storefront: {}", e);
            std::process::exit(1);
        }
    };

    iced::application("Sneakers Store", app::update, app::view)
        .window_size(iced::Size::new(480.0, 860.0))
        .run_with(move || app::initialize(store))
}
