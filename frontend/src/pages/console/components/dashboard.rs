use crate::{
    components::{
        common::{Button, ButtonVariant},
        layout::LoadingSpinner,
    },
    pages::console::utils::dashboard_stats,
    state::console::ConsoleState,
};
use leptos::*;

#[component]
pub fn Stat(label: &'static str, value: u64) -> impl IntoView {
    view! {
        <div class="rounded-lg border border-border bg-surface-muted p-4">
            <p class="text-xs font-medium uppercase text-fg-muted">{label}</p>
            <p class="mt-1 text-2xl font-semibold text-fg">{value}</p>
        </div>
    }
}

#[component]
pub fn DashboardPanel(state: RwSignal<ConsoleState>, on_refresh: Callback<()>) -> impl IntoView {
    let loading = Signal::derive(move || state.with(|s| s.dashboard_loading));
    let stats = move || state.with(|s| dashboard_stats(s.dashboard.as_ref()));

    view! {
        <section class="bg-surface-elevated shadow rounded-lg p-6 space-y-4">
            <div class="flex items-center justify-between">
                <div>
                    <p class="text-xs font-semibold uppercase tracking-wide text-fg-muted">"Snapshot"</p>
                    <h2 class="text-lg font-semibold text-fg">"Dashboard"</h2>
                </div>
                <Button
                    variant=ButtonVariant::Ghost
                    on:click=move |_| on_refresh.call(())
                    disabled=loading
                >
                    "Refresh"
                </Button>
            </div>
            <Show
                when=move || !loading.get()
                fallback=|| view! { <LoadingSpinner label="Loading dashboard..." /> }
            >
                <div class="grid grid-cols-2 gap-4 lg:grid-cols-4">
                    {move || {
                        stats()
                            .into_iter()
                            .map(|(label, value)| view! { <Stat label=label value=value /> })
                            .collect_view()
                    }}
                </div>
            </Show>
        </section>
    }
}
