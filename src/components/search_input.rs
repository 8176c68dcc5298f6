use dioxus::prelude::*;

#[derive(Props, PartialEq, Clone)]
pub struct SearchInputProps {
    label: String,
    query: String,
    placeholder: String,
    on_change: EventHandler<String>,
    on_submit: EventHandler<()>,
}

/// Labelled text field that submits on Enter
#[component]
pub fn SearchInput(props: SearchInputProps) -> Element {
    rsx! {
        div { class: "search-field",
            label { class: "search-label", "{props.label}" }
            div { class: "search-container",
                span { class: "search-icon", "👤" }
                input {
                    class: "search-input",
                    r#type: "text",
                    placeholder: "{props.placeholder}",
                    value: "{props.query}",
                    oninput: move |evt| props.on_change.call(evt.value()),
                    onkeydown: move |evt: KeyboardEvent| {
                        if evt.key() == Key::Enter {
                            props.on_submit.call(());
                        }
                    }
                }
            }
        }
    }
}
