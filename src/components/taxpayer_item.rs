use dioxus::prelude::*;

use crate::components::{EstablishmentItem, StatusBadge};
use crate::sri::{or_missing, Establishment, TaxpayerRecord};

/// Display strings for one taxpayer card, with "N/A" already applied
#[derive(Clone)]
struct TaxpayerData {
    razon_social: String,
    nombre_comercial: String,
    identificacion: String,
    tipo_identificacion: String,
    clase: String,
    obligado: String,
    fecha_inicio: String,
    actividad_principal: String,
    estado: Option<String>,
    establecimientos: Vec<Establishment>,
}

impl TaxpayerData {
    fn from_record(record: &TaxpayerRecord) -> Self {
        Self {
            razon_social: or_missing(&record.razon_social).to_string(),
            nombre_comercial: or_missing(&record.nombre_comercial).to_string(),
            identificacion: or_missing(&record.identificacion).to_string(),
            tipo_identificacion: or_missing(&record.tipo_identificacion).to_string(),
            clase: or_missing(&record.clase).to_string(),
            obligado: or_missing(&record.obligado).to_string(),
            fecha_inicio: or_missing(&record.fecha_inicio_actividades).to_string(),
            actividad_principal: or_missing(&record.actividad_economica_principal).to_string(),
            estado: record.estado_contribuyente.clone(),
            establecimientos: record.establecimientos.clone(),
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct TaxpayerItemProps {
    /// 1-based position in the result list
    index: usize,
    record: TaxpayerRecord,
}

#[component]
pub fn TaxpayerItem(props: TaxpayerItemProps) -> Element {
    let data = TaxpayerData::from_record(&props.record);

    rsx! {
        div { class: "taxpayer-card",
            div { class: "taxpayer-header",
                h3 { "🏢 Contribuyente #{props.index}" }
            }

            div { class: "taxpayer-details",
                div { class: "info-grid",
                    div { class: "info-item",
                        span { class: "info-label", "Razón Social" }
                        span { class: "info-value info-strong", "{data.razon_social}" }
                    }
                    div { class: "info-item",
                        span { class: "info-label", "Nombre Comercial" }
                        span { class: "info-value info-strong info-blue", "{data.nombre_comercial}" }
                    }
                    div { class: "info-item",
                        span { class: "info-label", "Identificación" }
                        span { class: "info-value info-mono", "{data.identificacion}" }
                    }
                    div { class: "info-item",
                        span { class: "info-label", "Tipo de Identificación" }
                        span { class: "info-value", "{data.tipo_identificacion}" }
                    }
                    div { class: "info-item",
                        span { class: "info-label", "Clase" }
                        span { class: "info-value", "{data.clase}" }
                    }
                    div { class: "info-item",
                        span { class: "info-label", "Estado del Contribuyente" }
                        StatusBadge { status: data.estado.clone() }
                    }
                    div { class: "info-item",
                        span { class: "info-label", "Obligado a llevar contabilidad" }
                        span { class: "info-value info-purple", "{data.obligado}" }
                    }
                    div { class: "info-item",
                        span { class: "info-label", "Fecha Inicio de Actividades" }
                        span { class: "info-value", "📅 {data.fecha_inicio}" }
                    }
                }

                div { class: "activity-section",
                    span { class: "info-label", "Actividad Económica Principal" }
                    p { class: "activity-text", "{data.actividad_principal}" }
                }

                {(!data.establecimientos.is_empty()).then(|| rsx! {
                    div { class: "establishments-section",
                        h4 { "📍 Establecimientos ({data.establecimientos.len()})" }
                        div { class: "establishments-list",
                            {data.establecimientos.iter().enumerate().map(|(idx, establishment)| rsx! {
                                EstablishmentItem {
                                    key: "{idx}",
                                    establishment: establishment.clone()
                                }
                            })}
                        }
                    }
                })}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_taxpayer_data_defaults_missing_fields() {
        let record = TaxpayerRecord {
            razon_social: Some("GARCIA LOPEZ JUAN CARLOS".to_string()),
            nombre_comercial: Some(String::new()),
            ..Default::default()
        };
        let data = TaxpayerData::from_record(&record);

        assert_eq!(data.razon_social, "GARCIA LOPEZ JUAN CARLOS");
        assert_eq!(data.nombre_comercial, "N/A");
        assert_eq!(data.identificacion, "N/A");
        assert_eq!(data.actividad_principal, "N/A");
        assert_eq!(data.estado, None);
        assert!(data.establecimientos.is_empty());
    }
}
