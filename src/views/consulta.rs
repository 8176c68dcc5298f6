use dioxus::prelude::*;

use crate::components::{AlertBanner, SearchInput, TaxpayerItem};
use crate::contexts::{LookupContext, SearchController};
use crate::sri::SearchQuery;

const CONSULTA_CSS: Asset = asset!("/assets/styling/consulta.css");

/// Taxpayer search form and its results
#[component]
pub fn Consulta() -> Element {
    let context = use_context::<LookupContext>();
    let timeout = context.settings.request_timeout;

    let mut given_names = use_signal(String::new);
    let mut surnames = use_signal(String::new);
    let mut controller = use_signal(|| SearchController::with_timeout(timeout));

    let run_search = use_callback(move |_: ()| {
        let query = SearchQuery::new(given_names(), surnames());
        let Ok(pending) = controller.write().begin(&query) else {
            return;
        };

        let lookup = context.lookup.clone();
        spawn(async move {
            let result = pending.run(lookup.as_ref()).await;
            controller.write().settle(pending.token, result);
        });
    });

    let outcome = controller.read().outcome().clone();
    let loading = outcome.is_loading();
    let records = outcome.records().to_vec();

    rsx! {
        document::Link { rel: "stylesheet", href: CONSULTA_CSS }
        div { class: "consulta-container",
            div { class: "search-card",
                div { class: "search-grid",
                    SearchInput {
                        label: "Nombre(s)",
                        query: given_names(),
                        placeholder: "Ej: JUAN CARLOS",
                        on_change: move |q| given_names.set(q),
                        on_submit: move |_| run_search.call(())
                    }
                    SearchInput {
                        label: "Apellido(s)",
                        query: surnames(),
                        placeholder: "Ej: GARCÍA LÓPEZ",
                        on_change: move |q| surnames.set(q),
                        on_submit: move |_| run_search.call(())
                    }
                }

                button {
                    class: "btn btn-primary search-button",
                    disabled: loading,
                    onclick: move |_| run_search.call(()),
                    if loading { "⏳ Buscando..." } else { "🔍 Buscar Contribuyente" }
                }

                {outcome.message().map(|message| rsx! {
                    AlertBanner { message: message.to_string() }
                })}
            }

            {(!records.is_empty()).then(|| rsx! {
                div { class: "results-section",
                    h2 { class: "results-title", "🔍 Resultados encontrados: {records.len()}" }
                    {records.iter().enumerate().map(|(idx, record)| rsx! {
                        TaxpayerItem {
                            key: "{idx}",
                            index: idx + 1,
                            record: record.clone()
                        }
                    })}
                }
            })}
        }
    }
}
