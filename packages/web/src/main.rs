use dioxus::prelude::*;

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Title { "Medi-Guardian Portal" }
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        ui::AppShell {}
    }
}
