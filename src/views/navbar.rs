use crate::Route;
use dioxus::prelude::*;

const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");

/// Page header shared by every route
#[component]
pub fn Navbar() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }

        div { class: "layout-container",
            header { class: "app-header",
                div { class: "header-title",
                    span { class: "header-logo", "🏢" }
                    h1 { "Consulta SRI Ecuador" }
                }
                p { class: "header-subtitle", "Sistema de búsqueda de contribuyentes registrados" }
            }
            div {
                class: "main-content",
                Outlet::<Route> {}
            }
        }
    }
}
