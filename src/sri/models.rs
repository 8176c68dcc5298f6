use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Placeholder shown for any field the registry left out.
pub const MISSING_FIELD: &str = "N/A";

/// One contributor entry as returned by the registry lookup.
///
/// Nothing here is validated: every field is optional and members the
/// backend adds later are kept in `extra` untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxpayerRecord {
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub razon_social: Option<String>,
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub nombre_comercial: Option<String>,
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub identificacion: Option<String>,
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub tipo_identificacion: Option<String>,
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub clase: Option<String>,
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub estado_contribuyente: Option<String>,
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub obligado: Option<String>,
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub fecha_inicio_actividades: Option<String>,
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub actividad_economica_principal: Option<String>,
    #[serde(default, deserialize_with = "lenient_list", skip_serializing_if = "Vec::is_empty")]
    pub establecimientos: Vec<Establishment>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A physical place of business registered under a taxpayer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Establishment {
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub nombre_fantasia_comercial: Option<String>,
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub direccion: Option<String>,
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub estado: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Returns the field text, or [`MISSING_FIELD`] when absent or empty.
pub fn or_missing(value: &Option<String>) -> &str {
    match value.as_deref() {
        Some(text) if !text.is_empty() => text,
        _ => MISSING_FIELD,
    }
}

// The registry is not consistent about scalar types (e.g. `obligado` shows up
// as "SI" or as `true`), so any scalar is carried as its text form. `false`
// and zero count as absent and render as "N/A".
fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(Value::Null) | Some(Value::Bool(false)) => None,
        Some(Value::Number(n)) if n.as_f64() == Some(0.0) => None,
        Some(Value::String(s)) => Some(s),
        Some(other) => Some(other.to_string()),
    })
}

fn lenient_list<'de, D>(deserializer: D) -> Result<Vec<Establishment>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<Establishment>>::deserialize(deserializer)?.unwrap_or_default())
}
