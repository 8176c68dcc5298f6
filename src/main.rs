use dioxus::prelude::*;
use dioxus_desktop::{Config, WindowBuilder};
use views::{Consulta, Navbar};

mod components;
mod contexts;
mod logging;
mod sri;
mod utils;
mod views;

use contexts::LookupContext;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Navbar)]
        #[route("/")]
        Consulta {},
}

const MAIN_CSS: Asset = asset!("/assets/styling/main.css");

fn main() {
    logging::init();

    LaunchBuilder::desktop()
        .with_cfg(
            Config::new().with_window(
                WindowBuilder::new().with_title("Consulta SRI Ecuador")
            ),
        )
        .launch(App);
}

#[component]
fn App() -> Element {
    // Settings never change after startup, so this resolves once
    let startup = use_hook(LookupContext::from_environment);

    match startup {
        Err(err) => {
            tracing::error!(error = %err, "lookup backend is not configured");
            rsx! {
                document::Link { rel: "stylesheet", href: MAIN_CSS }

                div { class: "error-container",
                    div { class: "error-banner",
                        "⚠️ No se pudo iniciar la consulta: {err}"
                    }
                    div { class: "error-help",
                        h2 { "Servicio de consulta no configurado" }
                        p {
                            "Defina la variable de entorno SRI_API_URL o el campo api_base_url en ~/.sri-consulta/settings.json y reinicie la aplicación."
                        }
                    }
                }
            }
        }
        Ok(context) => {
            use_context_provider(|| context);

            rsx! {
                document::Link { rel: "stylesheet", href: MAIN_CSS }

                Router::<Route> {}
            }
        }
    }
}
