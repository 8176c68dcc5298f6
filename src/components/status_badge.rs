use dioxus::prelude::*;

use crate::sri::{classify, or_missing};

#[derive(Props, PartialEq, Clone)]
pub struct StatusBadgeProps {
    #[props(!optional)]
    status: Option<String>,
    #[props(default)]
    compact: bool,
}

#[component]
pub fn StatusBadge(props: StatusBadgeProps) -> Element {
    let category = classify(props.status.as_deref());
    let label = or_missing(&props.status).to_string();
    let size = if props.compact { "badge-sm" } else { "badge-md" };

    rsx! {
        span { class: "status-badge {size} {category.css_class()}", "{label}" }
    }
}
