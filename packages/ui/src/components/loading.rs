use dioxus::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum LoadingSize {
    Sm,
    #[default]
    Md,
    Lg,
}

/// Spinner with an optional caption. `full_screen` centres it in the viewport.
#[component]
pub fn Loading(
    #[props(default)] size: LoadingSize,
    #[props(default)] text: Option<String>,
    #[props(default)] full_screen: bool,
) -> Element {
    let size_class = match size {
        LoadingSize::Sm => "spinner spinner-sm",
        LoadingSize::Md => "spinner spinner-md",
        LoadingSize::Lg => "spinner spinner-lg",
    };
    let container = if full_screen { "loading loading-full" } else { "loading" };

    rsx! {
        div {
            class: "{container}",
            div { class: "{size_class}" }
            if let Some(text) = text {
                p { class: "loading-text", "{text}" }
            }
        }
    }
}
