use crate::{
    components::{
        common::{Button, ButtonVariant},
        layout::LoadingSpinner,
    },
    pages::console::{
        components::attendance_records::SummaryTiles,
        utils::{display_or_dash, format_created_at},
    },
    state::console::ConsoleState,
};
use leptos::ev::KeyboardEvent;
use leptos::html;
use leptos::*;

#[component]
fn DetailItem(label: &'static str, #[prop(into)] value: String) -> impl IntoView {
    view! {
        <div class="space-y-1">
            <span class="block text-xs uppercase text-fg-muted">{label}</span>
            <span class="block text-sm font-medium text-fg">{display_or_dash(&value)}</span>
        </div>
    }
}

/// Employee details plus the current attendance summary. Only the backdrop,
/// the close button and Escape dismiss it.
#[component]
pub fn EmployeeDetailModal(state: RwSignal<ConsoleState>, on_close: Callback<()>) -> impl IntoView {
    let dialog_ref = create_node_ref::<html::Div>();
    let is_open = create_memo(move |_| state.with(|s| s.show_employee_modal));
    let details = create_memo(move |_| state.with(|s| s.employee_details().cloned()));
    let waiting = create_memo(move |_| {
        state.with(|s| s.attendance_loading && s.attendance_employee.is_none())
    });
    let summary = create_memo(move |_| state.with(|s| s.attendance_summary));

    let on_dialog_keydown = move |ev: KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            on_close.call(());
        }
    };

    create_effect(move |_| {
        if is_open.get() {
            #[cfg(target_arch = "wasm32")]
            {
                if let Some(dialog) = dialog_ref.get() {
                    let _ = dialog.focus();
                }
            }
        }
    });
    #[cfg(not(target_arch = "wasm32"))]
    let _ = &dialog_ref;

    view! {
        <Show when=move || is_open.get()>
            <div class="fixed inset-0 z-50 flex items-end sm:items-center justify-center">
                <div
                    class="fixed inset-0 bg-overlay-backdrop"
                    data-testid="employee-modal-backdrop"
                    on:click=move |_| on_close.call(())
                ></div>
                <div
                    class="relative bg-surface-elevated rounded-lg shadow-xl w-full max-w-lg mx-4 p-6 space-y-4"
                    role="dialog"
                    aria-modal="true"
                    tabindex="-1"
                    node_ref=dialog_ref
                    on:keydown=on_dialog_keydown
                >
                    <div class="flex items-center justify-between">
                        <div>
                            <p class="text-xs font-semibold uppercase tracking-wide text-fg-muted">"Employee"</p>
                            <h3 class="text-lg font-semibold text-fg">"Details"</h3>
                        </div>
                        <Button
                            variant=ButtonVariant::Ghost
                            on:click=move |_| on_close.call(())
                        >
                            "Close"
                        </Button>
                    </div>
                    {move || {
                        if waiting.get() {
                            view! { <LoadingSpinner label="Loading details..." /> }.into_view()
                        } else if let Some(employee) = details.get() {
                            view! {
                                <div class="grid grid-cols-1 gap-4 sm:grid-cols-2">
                                    <DetailItem label="Employee ID" value=employee.employee_id />
                                    <DetailItem label="Full Name" value=employee.full_name />
                                    <DetailItem label="Email" value=employee.email />
                                    <DetailItem label="Department" value=employee.department />
                                    <DetailItem
                                        label="Created At"
                                        value=format_created_at(employee.created_at.as_deref())
                                    />
                                </div>
                            }
                            .into_view()
                        } else {
                            view! { <p class="text-sm text-fg-muted">"No employee selected."</p> }.into_view()
                        }
                    }}
                    {move || summary.get().map(|summary| view! { <SummaryTiles summary=summary /> })}
                </div>
            </div>
        </Show>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::{AttendanceListing, AttendanceSummary};
    use crate::test_support::{helpers::employee, ssr::render_to_string};
    use chrono::NaiveDate;

    fn render(state: ConsoleState) -> String {
        render_to_string(move || {
            let state = create_rw_signal(state);
            view! { <EmployeeDetailModal state=state on_close=Callback::new(|_| {}) /> }
        })
    }

    fn base() -> ConsoleState {
        ConsoleState::new(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap())
    }

    #[test]
    fn modal_is_hidden_until_opened() {
        let mut state = base();
        state.employees_loaded(vec![employee("EMP-1", "Ada Lovelace")]);
        let html = render(state);
        assert!(!html.contains("role=\"dialog\""));
    }

    #[test]
    fn modal_renders_details_and_summary() {
        let mut state = base();
        let mut ada = employee("EMP-1", "Ada Lovelace");
        ada.created_at = Some("2024-01-02T08:30:00Z".into());
        state.employees_loaded(vec![ada.clone()]);
        state.view_employee(ada.clone());
        state.attendance_loaded(AttendanceListing {
            employee: Some(ada),
            attendance: Vec::new(),
            summary: Some(AttendanceSummary {
                present_days: 3,
                absent_days: 1,
                total_records: 4,
            }),
        });
        let html = render(state);
        assert!(html.contains("role=\"dialog\""));
        assert!(html.contains("aria-modal=\"true\""));
        assert!(html.contains("Ada Lovelace"));
        assert!(html.contains("2024-01-02 08:30"));
        assert!(html.contains("Total"));
    }

    #[test]
    fn modal_waits_for_details_while_loading() {
        let mut state = base();
        state.show_employee_modal = true;
        state.begin_attendance_load();
        let html = render(state);
        assert!(html.contains("Loading details..."));
    }

    #[test]
    fn modal_without_employee_says_so() {
        let mut state = base();
        state.employees_loaded(Vec::new());
        state.show_employee_modal = true;
        let html = render(state);
        assert!(html.contains("No employee selected."));
    }
}
