use dioxus::prelude::*;

use crate::components::StatusBadge;
use crate::sri::{or_missing, Establishment};

#[derive(Props, PartialEq, Clone)]
pub struct EstablishmentItemProps {
    establishment: Establishment,
}

#[component]
pub fn EstablishmentItem(props: EstablishmentItemProps) -> Element {
    let name = or_missing(&props.establishment.nombre_fantasia_comercial).to_string();
    let address = or_missing(&props.establishment.direccion).to_string();

    rsx! {
        div { class: "establishment-card",
            div { class: "establishment-grid",
                div { class: "info-item",
                    span { class: "info-label", "Nombre Establecimiento" }
                    span { class: "info-value establishment-name", "{name}" }
                }
                div { class: "info-item",
                    span { class: "info-label", "Dirección" }
                    span { class: "info-value", "{address}" }
                }
                div { class: "info-item",
                    span { class: "info-label", "Estado" }
                    StatusBadge { status: props.establishment.estado.clone(), compact: true }
                }
            }
        }
    }
}
