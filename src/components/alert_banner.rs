use dioxus::prelude::*;

#[derive(Props, PartialEq, Clone)]
pub struct AlertBannerProps {
    message: String,
}

#[component]
pub fn AlertBanner(props: AlertBannerProps) -> Element {
    rsx! {
        div { class: "alert-banner",
            span { class: "alert-icon", "⚠️" }
            p { class: "alert-text", "{props.message}" }
        }
    }
}
