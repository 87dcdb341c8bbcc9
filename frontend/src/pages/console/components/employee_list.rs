use crate::{
    api::Employee,
    components::{
        common::{Button, ButtonVariant},
        empty_state::EmptyState,
        layout::{ErrorMessage, LoadingSpinner},
    },
    state::console::ConsoleState,
};
use leptos::*;

#[derive(Debug, Clone, PartialEq, Eq)]
enum ListPhase {
    Loading,
    Failed(String),
    Empty,
    Ready,
}

#[component]
pub fn EmployeeList(
    state: RwSignal<ConsoleState>,
    on_refresh: Callback<()>,
    on_view: Callback<Employee>,
    on_delete: Callback<String>,
) -> impl IntoView {
    let phase = create_memo(move |_| {
        state.with(|s| {
            if s.employees_loading {
                ListPhase::Loading
            } else if let Some(message) = &s.employees_error {
                ListPhase::Failed(message.clone())
            } else if s.employees.is_empty() {
                ListPhase::Empty
            } else {
                ListPhase::Ready
            }
        })
    });
    let employees = create_memo(move |_| state.with(|s| s.employees.clone()));
    let selected = create_memo(move |_| state.with(|s| s.selected_employee_id.clone()));
    let loading = Signal::derive(move || phase.get() == ListPhase::Loading);

    view! {
        <section class="bg-surface-elevated shadow rounded-lg p-6 space-y-4">
            <div class="flex items-center justify-between">
                <div>
                    <p class="text-xs font-semibold uppercase tracking-wide text-fg-muted">"Directory"</p>
                    <h2 class="text-lg font-semibold text-fg">"Employees"</h2>
                </div>
                <Button
                    variant=ButtonVariant::Ghost
                    on:click=move |_| on_refresh.call(())
                    disabled=loading
                >
                    "Refresh"
                </Button>
            </div>
            {move || match phase.get() {
                ListPhase::Loading => view! { <LoadingSpinner label="Loading employees..." /> }.into_view(),
                ListPhase::Failed(message) => view! { <ErrorMessage message=message /> }.into_view(),
                ListPhase::Empty => {
                    view! { <EmptyState title="No employees yet. Add the first record." /> }.into_view()
                }
                ListPhase::Ready => view! {
                    <div class="overflow-x-auto">
                        <table class="min-w-full divide-y divide-border text-sm">
                            <thead>
                                <tr class="text-left text-xs font-medium uppercase text-fg-muted">
                                    <th class="px-3 py-2">"ID"</th>
                                    <th class="px-3 py-2">"Name"</th>
                                    <th class="px-3 py-2">"Email"</th>
                                    <th class="px-3 py-2">"Dept"</th>
                                    <th class="px-3 py-2">"Actions"</th>
                                </tr>
                            </thead>
                            <tbody class="divide-y divide-border">
                                <For
                                    each=move || employees.get()
                                    key=|employee| employee.employee_id.clone()
                                    children=move |employee: Employee| {
                                        let row_id = employee.employee_id.clone();
                                        let is_selected = create_memo(move |_| selected.get() == row_id);
                                        let delete_id = employee.employee_id.clone();
                                        let view_target = employee.clone();
                                        view! {
                                            <tr
                                                class=move || if is_selected.get() { "bg-surface-muted font-medium" } else { "" }
                                                data-selected=move || is_selected.get().to_string()
                                            >
                                                <td class="px-3 py-2">{employee.employee_id.clone()}</td>
                                                <td class="px-3 py-2">{employee.full_name.clone()}</td>
                                                <td class="px-3 py-2">{employee.email.clone()}</td>
                                                <td class="px-3 py-2">{employee.department.clone()}</td>
                                                <td class="px-3 py-2 space-x-2 whitespace-nowrap">
                                                    <Button
                                                        variant=ButtonVariant::Ghost
                                                        on:click=move |_| on_view.call(view_target.clone())
                                                    >
                                                        "View"
                                                    </Button>
                                                    <Button
                                                        variant=ButtonVariant::Danger
                                                        on:click=move |_| on_delete.call(delete_id.clone())
                                                    >
                                                        "Delete"
                                                    </Button>
                                                </td>
                                            </tr>
                                        }
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

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::{helpers::employee, ssr::render_to_string};
    use chrono::NaiveDate;

    fn render(state: ConsoleState) -> String {
        render_to_string(move || {
            let state = create_rw_signal(state);
            view! {
                <EmployeeList
                    state=state
                    on_refresh=Callback::new(|_| {})
                    on_view=Callback::new(|_| {})
                    on_delete=Callback::new(|_| {})
                />
            }
        })
    }

    fn state() -> ConsoleState {
        ConsoleState::new(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap())
    }

    #[test]
    fn employee_list_shows_loading_then_empty_state() {
        assert!(render(state()).contains("Loading employees..."));

        let mut empty = state();
        empty.employees_loaded(Vec::new());
        assert!(render(empty).contains("No employees yet. Add the first record."));
    }

    #[test]
    fn employee_list_shows_load_error() {
        let mut failed = state();
        failed.employees_failed("Unable to fetch employees.".into());
        let html = render(failed);
        assert!(html.contains("Unable to fetch employees."));
        assert!(!html.contains("<table"));
    }

    #[test]
    fn employee_list_highlights_selected_row() {
        let mut ready = state();
        ready.employees_loaded(vec![employee("EMP-1", "Ada"), employee("EMP-2", "Linus")]);
        let html = render(ready);
        assert!(html.contains("Ada"));
        assert!(html.contains("emp-2@example.com"));
        assert!(html.contains("data-selected=\"true\""));
        assert!(html.contains("data-selected=\"false\""));
        assert!(html.contains("View"));
        assert!(html.contains("Delete"));
    }
}
