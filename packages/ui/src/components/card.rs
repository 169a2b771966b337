use dioxus::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum CardVariant {
    #[default]
    Default,
    Elevated,
    Glass,
}

#[component]
pub fn Card(
    #[props(default)] variant: CardVariant,
    #[props(default)] hover: bool,
    #[props(default)] class: String,
    children: Element,
) -> Element {
    let variant_class = match variant {
        CardVariant::Default => "card",
        CardVariant::Elevated => "card card-elevated",
        CardVariant::Glass => "card card-glass",
    };
    let hover_class = if hover { "card-hover" } else { "" };

    rsx! {
        div {
            class: "{variant_class} {hover_class} {class}",
            {children}
        }
    }
}

#[component]
pub fn CardHeader(#[props(default)] class: String, children: Element) -> Element {
    rsx! {
        div { class: "card-header {class}", {children} }
    }
}

#[component]
pub fn CardTitle(#[props(default)] class: String, children: Element) -> Element {
    rsx! {
        h3 { class: "card-title {class}", {children} }
    }
}

#[component]
pub fn CardContent(#[props(default)] class: String, children: Element) -> Element {
    rsx! {
        div { class: "card-content {class}", {children} }
    }
}
