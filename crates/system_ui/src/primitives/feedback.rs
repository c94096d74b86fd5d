use super::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Tone of an inline notice.
pub enum NoticeTone {
    /// Neutral information.
    #[default]
    Info,
    /// Completed action.
    Success,
    /// Failure the user should see.
    Error,
}

impl NoticeTone {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Error => "error",
        }
    }

    fn live_role(self) -> &'static str {
        match self {
            Self::Error => "alert",
            Self::Info | Self::Success => "status",
        }
    }
}

#[component]
/// Inline dismissible notice used for error banners and confirmations.
///
/// The dismiss control renders only when `on_dismiss` is provided.
pub fn Notice(
    #[prop(default = NoticeTone::Info)] tone: NoticeTone,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] title: Option<String>,
    #[prop(optional)] on_dismiss: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-notice", layout_class)
            role=tone.live_role()
            data-ui-primitive="true"
            data-ui-kind="notice"
            data-ui-tone=tone.token()
        >
            {title.map(|title| view! { <strong data-ui-slot="title">{title}</strong> })}
            <div data-ui-slot="body">{children()}</div>
            {on_dismiss.map(|on_dismiss| {
                view! {
                    <Button
                        variant=ButtonVariant::Quiet
                        size=ButtonSize::Sm
                        ui_slot="dismiss"
                        aria_label="Dismiss"
                        on_click=on_dismiss
                    >
                        "Dismiss"
                    </Button>
                }
            })}
        </div>
    }
}
