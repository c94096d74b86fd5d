use super::*;

#[component]
/// Row of primary actions for the current view.
pub fn ToolBar(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-toolbar", layout_class)
            role="toolbar"
            aria-label=aria_label
            data-ui-primitive="true"
            data-ui-kind="toolbar"
        >
            {children()}
        </div>
    }
}

#[component]
/// Location trail (breadcrumbs). Children are the trail entries in order.
pub fn TrailNav(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <nav
            class=merge_layout_class("ui-trail", layout_class)
            aria-label=aria_label.unwrap_or_else(|| "Location".to_string())
            data-ui-primitive="true"
            data-ui-kind="trail"
        >
            {children()}
        </nav>
    }
}

#[component]
/// Footer strip of live counters.
pub fn StatusBar(
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <footer
            class=merge_layout_class("ui-statusbar", layout_class)
            data-ui-primitive="true"
            data-ui-kind="statusbar"
        >
            {children()}
        </footer>
    }
}
