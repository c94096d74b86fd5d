use super::*;

#[component]
/// Inline text with a role and tone token.
pub fn Text(
    #[prop(default = TextRole::Body)] role: TextRole,
    #[prop(default = TextTone::Primary)] tone: TextTone,
    #[prop(optional)] ui_slot: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <span
            class="ui-text"
            data-ui-primitive="true"
            data-ui-kind="text"
            data-ui-slot=ui_slot
            data-ui-variant=role.token()
            data-ui-tone=tone.token()
        >
            {children()}
        </span>
    }
}

#[component]
/// Placeholder shown in place of a listing with no rows.
pub fn EmptyState(children: Children) -> impl IntoView {
    view! {
        <p class="ui-empty-state" data-ui-primitive="true" data-ui-kind="empty-state" role="status">
            {children()}
        </p>
    }
}

#[component]
/// Top-level labelled region holding one view.
pub fn Pane(
    #[prop(optional)] layout_class: Option<&'static str>,
    aria_label: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <section
            class=merge_layout_class("ui-pane", layout_class)
            data-ui-primitive="true"
            data-ui-kind="pane"
            aria-label=aria_label
        >
            {children()}
        </section>
    }
}

#[component]
/// Pane heading: a title, a line of supporting copy, then trailing children.
pub fn PaneHeader(
    title: &'static str,
    #[prop(optional)] meta: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <header class="ui-pane-header" data-ui-primitive="true" data-ui-kind="pane-header">
            <h1 data-ui-slot="title">{title}</h1>
            {meta.map(|meta| view! { <p data-ui-slot="meta">{meta}</p> })}
            <div data-ui-slot="actions">{children()}</div>
        </header>
    }
}

#[component]
/// One counter in a [`StatusBar`](super::StatusBar).
pub fn StatusBarItem(children: Children) -> impl IntoView {
    view! {
        <span class="ui-statusbar-item" data-ui-primitive="true" data-ui-kind="statusbar-item">
            {children()}
        </span>
    }
}

#[component]
/// Table wrapper; callers supply `<thead>` and `<tbody>`.
pub fn DataTable(
    #[prop(optional)] layout_class: Option<&'static str>,
    aria_label: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <table
            class=merge_layout_class("ui-data-table", layout_class)
            data-ui-primitive="true"
            data-ui-kind="data-table"
            aria-label=aria_label
        >
            {children()}
        </table>
    }
}
