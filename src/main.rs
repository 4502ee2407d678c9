mod client;
mod model;

use client::App;
use dioxus_logger::tracing::Level;

fn main() {
    if let Err(e) = dioxus_logger::init(Level::INFO) {
        eprintln!("Failed to initialize logger: {}", e);
    }

    dioxus::launch(App);
}
