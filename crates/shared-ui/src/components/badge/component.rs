use dioxus::prelude::*;

/// Visual variant for badges.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum BadgeVariant {
    #[default]
    Neutral,
    Success,
    Danger,
    /// Emphasized label, used for privileged roles.
    Accent,
}

impl BadgeVariant {
    pub(crate) fn class(&self) -> &'static str {
        match self {
            BadgeVariant::Neutral => "neutral",
            BadgeVariant::Success => "success",
            BadgeVariant::Danger => "danger",
            BadgeVariant::Accent => "accent",
        }
    }

    /// Variant for an on/off status flag.
    pub fn for_status(active: bool) -> Self {
        if active {
            BadgeVariant::Success
        } else {
            BadgeVariant::Danger
        }
    }
}

/// Inline label for statuses and roles.
#[component]
pub fn Badge(
    #[props(default)] variant: BadgeVariant,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![
        Attribute::new("class", "lab-badge", None, false),
        Attribute::new("data-variant", variant.class(), None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        span {
            ..merged,
            {children}
        }
    }
}
