use dioxus::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Outline,
    Ghost,
    Destructive,
}

impl ButtonVariant {
    fn class(self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn-primary",
            ButtonVariant::Secondary => "btn-secondary",
            ButtonVariant::Outline => "btn-outline",
            ButtonVariant::Ghost => "btn-ghost",
            ButtonVariant::Destructive => "btn-destructive",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum ButtonSize {
    Sm,
    #[default]
    Md,
    Lg,
    Xl,
}

impl ButtonSize {
    fn class(self) -> &'static str {
        match self {
            ButtonSize::Sm => "btn-sm",
            ButtonSize::Md => "btn-md",
            ButtonSize::Lg => "btn-lg",
            ButtonSize::Xl => "btn-xl",
        }
    }
}

/// Themed button. While `loading` it shows a spinner and ignores clicks.
#[component]
pub fn Button(
    #[props(default)] variant: ButtonVariant,
    #[props(default)] size: ButtonSize,
    #[props(default)] loading: bool,
    #[props(default)] full_width: bool,
    #[props(default)] disabled: bool,
    #[props(default = "button".to_string())] r#type: String,
    #[props(default)] class: String,
    #[props(default)] title: String,
    /// Leading icon, or trailing when `icon_right` is set.
    icon: Option<Element>,
    #[props(default)] icon_right: bool,
    onclick: Option<EventHandler<MouseEvent>>,
    children: Element,
) -> Element {
    let mut classes = vec!["btn", variant.class(), size.class()];
    if full_width {
        classes.push("btn-full");
    }
    if loading {
        classes.push("btn-loading");
    }
    let class = format!("{} {class}", classes.join(" "));
    let kind = r#type;

    rsx! {
        button {
            class: "{class}",
            r#type: "{kind}",
            title: "{title}",
            disabled: disabled || loading,
            onclick: move |evt| {
                if let Some(handler) = &onclick {
                    handler.call(evt);
                }
            },
            if loading {
                span { class: "btn-spinner" }
            } else if !icon_right {
                if let Some(icon) = icon.clone() {
                    span { class: "btn-icon", {icon} }
                }
            }
            span { {children} }
            if !loading && icon_right {
                if let Some(icon) = icon.clone() {
                    span { class: "btn-icon", {icon} }
                }
            }
        }
    }
}
