use dioxus::prelude::*;

mod api;
mod booking_form;
mod borrow_desk;
mod config;
mod notify;
mod routes;
mod state;
mod user_admin;

#[cfg(test)]
mod testing;

use api::RestClient;
use notify::NotifierHost;
use routes::Route;

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    use_context_provider(|| RestClient::new(&config::load().api.base_url));

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        shared_ui::ToastProvider {
            NotifierHost {
                Router::<Route> {}
            }
        }
    }
}
