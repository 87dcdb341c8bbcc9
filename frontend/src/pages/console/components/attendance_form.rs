use crate::{
    api::{AttendanceStatus, Employee},
    components::common::ButtonVariant,
    pages::console::utils::employee_option_label,
    state::console::ConsoleState,
};
use leptos::{ev, *};

const FIELD_CLASS: &str =
    "mt-1 w-full rounded-md border border-border bg-surface px-3 py-2 text-sm text-fg";

#[component]
pub fn AttendanceForm(
    state: RwSignal<ConsoleState>,
    on_select: Callback<String>,
    on_submit: Callback<()>,
) -> impl IntoView {
    let employees = create_memo(move |_| state.with(|s| s.employees.clone()));
    let selected = create_memo(move |_| state.with(|s| s.selected_employee_id.clone()));
    let submitting = Signal::derive(move || state.with(|s| s.attendance_submitting));
    let status = Signal::derive(move || state.with(|s| s.attendance_form.status));

    let handle_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        on_submit.call(());
    };

    view! {
        <section class="bg-surface-elevated shadow rounded-lg p-6 space-y-4">
            <div class="flex items-start justify-between gap-3">
                <div>
                    <p class="text-xs font-semibold uppercase tracking-wide text-fg-muted">"Attendance"</p>
                    <h2 class="text-lg font-semibold text-fg">"Mark Attendance"</h2>
                </div>
                <p class="text-xs text-fg-muted">"Select an employee to log"</p>
            </div>
            <form class="space-y-4" on:submit=handle_submit>
                <div>
                    <label for="employee" class="block text-sm font-medium text-fg">"Employee"</label>
                    <select
                        id="employee"
                        class=FIELD_CLASS
                        prop:value=move || selected.get()
                        on:change=move |ev| on_select.call(event_target_value(&ev))
                    >
                        <option value="" selected=move || selected.get().is_empty()>"Select employee"</option>
                        {move || {
                            employees
                                .get()
                                .into_iter()
                                .map(|employee: Employee| {
                                    let id = employee.employee_id.clone();
                                    let is_selected = selected.get_untracked() == id;
                                    view! {
                                        <option value=id selected=is_selected>
                                            {employee_option_label(&employee)}
                                        </option>
                                    }
                                })
                                .collect_view()
                        }}
                    </select>
                </div>
                <div class="grid grid-cols-1 gap-4 md:grid-cols-2">
                    <div>
                        <label for="date" class="block text-sm font-medium text-fg">"Date"</label>
                        <input
                            id="date"
                            type="date"
                            class=FIELD_CLASS
                            required
                            prop:value=move || state.with(|s| s.attendance_form.date.clone())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                state.update(|s| s.attendance_form.date = value);
                            }
                        />
                    </div>
                    <div>
                        <label for="status" class="block text-sm font-medium text-fg">"Status"</label>
                        <select
                            id="status"
                            class=FIELD_CLASS
                            prop:value=move || status.get().as_str()
                            on:change=move |ev| {
                                if let Some(parsed) = AttendanceStatus::parse(&event_target_value(&ev)) {
                                    state.update(|s| s.attendance_form.status = parsed);
                                }
                            }
                        >
                            {[AttendanceStatus::Present, AttendanceStatus::Absent]
                                .into_iter()
                                .map(|option| view! {
                                    <option
                                        value=option.as_str()
                                        selected=move || status.get() == option
                                    >
                                        {option.label()}
                                    </option>
                                })
                                .collect_view()}
                        </select>
                    </div>
                </div>
                <button
                    type="submit"
                    class=format!(
                        "inline-flex items-center justify-center rounded-md px-4 py-2 text-sm font-semibold disabled:opacity-50 {}",
                        ButtonVariant::Primary.classes()
                    )
                    disabled=move || submitting.get() || selected.get().is_empty()
                >
                    {move || if submitting.get() { "Saving..." } else { "Save Attendance" }}
                </button>
            </form>
        </section>
    }
}
