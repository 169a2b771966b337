use dioxus::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum InputVariant {
    #[default]
    Default,
    Filled,
}

/// Text input with an optional label, leading icon and error message.
#[component]
pub fn Input(
    #[props(default)] id: String,
    #[props(default)] label: Option<String>,
    #[props(default)] error: Option<String>,
    icon: Option<Element>,
    #[props(default)] variant: InputVariant,
    #[props(default = "text".to_string())] r#type: String,
    #[props(default)] placeholder: String,
    #[props(default)] value: String,
    #[props(default)] disabled: bool,
    #[props(default)] class: String,
    oninput: Option<EventHandler<FormEvent>>,
) -> Element {
    let variant_class = match variant {
        InputVariant::Default => "input",
        InputVariant::Filled => "input input-filled",
    };
    let error_class = if error.is_some() { "input-invalid" } else { "" };
    let icon_class = if icon.is_some() { "input-with-icon" } else { "" };
    let kind = r#type;

    rsx! {
        div {
            class: "input-field {class}",
            if let Some(text) = label {
                label { class: "input-label", r#for: "{id}", "{text}" }
            }
            div {
                class: "input-wrapper",
                if let Some(icon) = icon {
                    span { class: "input-icon", {icon} }
                }
                input {
                    id: "{id}",
                    class: "{variant_class} {icon_class} {error_class}",
                    r#type: "{kind}",
                    placeholder: "{placeholder}",
                    value: "{value}",
                    disabled,
                    oninput: move |evt| {
                        if let Some(handler) = &oninput {
                            handler.call(evt);
                        }
                    },
                }
            }
            if let Some(message) = error {
                p { class: "input-error", "{message}" }
            }
        }
    }
}
