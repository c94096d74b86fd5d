use super::*;

#[component]
/// Horizontal row of inline items. Wraps when space runs out unless `nowrap` is set.
pub fn Cluster(
    #[prop(optional)] nowrap: bool,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-cluster", layout_class)
            data-ui-primitive="true"
            data-ui-kind="cluster"
            data-ui-wrap=bool_token(!nowrap)
        >
            {children()}
        </div>
    }
}
