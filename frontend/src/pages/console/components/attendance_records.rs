use crate::{
    api::{AttendanceRecord, AttendanceStatus, AttendanceSummary},
    components::{
        common::{Button, ButtonVariant},
        empty_state::EmptyState,
        layout::LoadingSpinner,
    },
    pages::console::utils::{status_pill_class, summary_tiles},
    state::console::ConsoleState,
    utils::time::format_display_date,
};
use leptos::*;

#[derive(Debug, Clone, PartialEq, Eq)]
enum RecordsPhase {
    Loading,
    NoSelection,
    Empty,
    Ready,
}

#[component]
pub fn StatusPill(status: AttendanceStatus) -> impl IntoView {
    view! {
        <span class=format!("inline-flex rounded-full px-2 py-0.5 text-xs font-semibold {}", status_pill_class(status))>
            {status.label()}
        </span>
    }
}

#[component]
pub fn SummaryTiles(summary: AttendanceSummary) -> impl IntoView {
    view! {
        <div class="grid grid-cols-3 gap-3">
            {summary_tiles(&summary)
                .into_iter()
                .map(|(label, value)| view! {
                    <div class="rounded-md bg-surface-muted p-3 text-center">
                        <span class="block text-xs uppercase text-fg-muted">{label}</span>
                        <span class="block text-xl font-semibold text-fg">{value}</span>
                    </div>
                })
                .collect_view()}
        </div>
    }
}

#[component]
pub fn AttendanceRecords(
    state: RwSignal<ConsoleState>,
    on_refresh: Callback<()>,
    on_apply: Callback<()>,
) -> impl IntoView {
    let phase = create_memo(move |_| {
        state.with(|s| {
            if s.attendance_loading {
                RecordsPhase::Loading
            } else if s.selected_employee_id.is_empty() {
                RecordsPhase::NoSelection
            } else if s.attendance.is_empty() {
                RecordsPhase::Empty
            } else {
                RecordsPhase::Ready
            }
        })
    });
    let records = create_memo(move |_| state.with(|s| s.attendance.clone()));
    let summary = create_memo(move |_| state.with(|s| s.attendance_summary));
    let no_selection = Signal::derive(move || state.with(|s| s.selected_employee_id.is_empty()));
    let refresh_disabled =
        Signal::derive(move || no_selection.get() || state.with(|s| s.attendance_loading));

    view! {
        <section class="bg-surface-elevated shadow rounded-lg p-6 space-y-4">
            <div class="flex items-center justify-between">
                <div>
                    <p class="text-xs font-semibold uppercase tracking-wide text-fg-muted">"Records"</p>
                    <h2 class="text-lg font-semibold text-fg">"Attendance Records"</h2>
                </div>
                <Button
                    variant=ButtonVariant::Ghost
                    on:click=move |_| on_refresh.call(())
                    disabled=refresh_disabled
                >
                    "Refresh"
                </Button>
            </div>
            <div class="flex flex-wrap items-end gap-3">
                <div>
                    <label for="from" class="block text-sm font-medium text-fg">"From"</label>
                    <input
                        id="from"
                        name="from"
                        type="date"
                        class="mt-1 rounded-md border border-border bg-surface px-3 py-2 text-sm"
                        prop:value=move || state.with(|s| s.attendance_filter.from.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            state.update(|s| s.set_filter_from(value));
                        }
                    />
                </div>
                <div>
                    <label for="to" class="block text-sm font-medium text-fg">"To"</label>
                    <input
                        id="to"
                        name="to"
                        type="date"
                        class="mt-1 rounded-md border border-border bg-surface px-3 py-2 text-sm"
                        prop:value=move || state.with(|s| s.attendance_filter.to.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            state.update(|s| s.set_filter_to(value));
                        }
                    />
                </div>
                <Button
                    variant=ButtonVariant::Ghost
                    on:click=move |_| on_apply.call(())
                    disabled=no_selection
                >
                    "Apply"
                </Button>
            </div>
            {move || match phase.get() {
                RecordsPhase::Loading => view! { <LoadingSpinner label="Loading attendance..." /> }.into_view(),
                RecordsPhase::NoSelection => {
                    view! { <EmptyState title="Select an employee to view attendance." /> }.into_view()
                }
                RecordsPhase::Empty => {
                    view! { <EmptyState title="No attendance records for this employee." /> }.into_view()
                }
                RecordsPhase::Ready => view! {
                    <div class="space-y-4">
                        {move || summary.get().map(|summary| view! { <SummaryTiles summary=summary /> })}
                        <table class="min-w-full divide-y divide-border text-sm">
                            <thead>
                                <tr class="text-left text-xs font-medium uppercase text-fg-muted">
                                    <th class="px-3 py-2">"Date"</th>
                                    <th class="px-3 py-2">"Status"</th>
                                </tr>
                            </thead>
                            <tbody class="divide-y divide-border">
                                <For
                                    each=move || records.get()
                                    key=|record| record.id.clone()
                                    children=move |record: AttendanceRecord| view! {
                                        <tr>
                                            <td class="px-3 py-2">{format_display_date(record.date)}</td>
                                            <td class="px-3 py-2"><StatusPill status=record.status /></td>
                                        </tr>
                                    }
                                />
                            </tbody>
                        </table>
                    </div>
                }
                .into_view(),
            }}
        </section>
    }
}
