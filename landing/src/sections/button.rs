use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Outline,
    Secondary,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonSize {
    #[default]
    Default,
    Large,
}

/// CSS classes for a button (or a link styled as one).
pub fn button_class(variant: ButtonVariant, size: ButtonSize) -> &'static str {
    match (variant, size) {
        (ButtonVariant::Primary, ButtonSize::Default) => "btn btn-primary",
        (ButtonVariant::Primary, ButtonSize::Large) => "btn btn-primary btn-lg",
        (ButtonVariant::Outline, ButtonSize::Default) => "btn btn-outline",
        (ButtonVariant::Outline, ButtonSize::Large) => "btn btn-outline btn-lg",
        (ButtonVariant::Secondary, ButtonSize::Default) => "btn btn-secondary",
        (ButtonVariant::Secondary, ButtonSize::Large) => "btn btn-secondary btn-lg",
    }
}

#[component]
pub fn Button(
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional)] size: ButtonSize,
    children: Children,
) -> impl IntoView {
    view! {
        <button type="button" class=button_class(variant, size)>
            {children()}
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_button_is_primary() {
        assert_eq!(
            button_class(ButtonVariant::default(), ButtonSize::default()),
            "btn btn-primary"
        );
    }

    #[test]
    fn large_adds_size_class() {
        assert_eq!(
            button_class(ButtonVariant::Outline, ButtonSize::Large),
            "btn btn-outline btn-lg"
        );
    }
}
