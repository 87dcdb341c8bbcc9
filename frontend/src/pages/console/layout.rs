use crate::components::layout::Layout;
use leptos::*;

#[component]
pub fn ConsoleFrame(children: Children) -> impl IntoView {
    view! { <Layout>{children()}</Layout> }
}

/// Two columns on wide screens, stacked otherwise.
#[component]
pub fn PanelsGrid(children: Children) -> impl IntoView {
    view! { <div class="grid grid-cols-1 gap-6 lg:grid-cols-2">{children()}</div> }
}
