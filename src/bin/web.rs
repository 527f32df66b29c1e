//! `thermonitor-web`: the interactive client, built for the browser.

fn main() {
    dioxus::launch(thermonitor_web::app::App);
}
