use crate::{
    components::common::ButtonVariant,
    state::{console::ConsoleState, forms::EmployeeField},
};
use leptos::{ev, *};

#[component]
fn DraftInput(state: RwSignal<ConsoleState>, field: EmployeeField) -> impl IntoView {
    view! {
        <div>
            <label for=field.name() class="block text-sm font-medium text-fg">{field.label()}</label>
            <input
                id=field.name()
                name=field.name()
                type=field.input_type()
                class="mt-1 w-full rounded-md border border-border bg-surface px-3 py-2 text-sm text-fg"
                placeholder=field.placeholder()
                required
                prop:value=move || state.with(|s| s.employee_form.get(field).to_string())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    state.update(|s| s.employee_form.set(field, value));
                }
            />
        </div>
    }
}

#[component]
pub fn EmployeeForm(state: RwSignal<ConsoleState>, on_submit: Callback<()>) -> impl IntoView {
    let submitting = Signal::derive(move || state.with(|s| s.employee_submitting));
    let handle_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        on_submit.call(());
    };

    view! {
        <section class="bg-surface-elevated shadow rounded-lg p-6 space-y-4">
            <div class="flex items-start justify-between gap-3">
                <div>
                    <p class="text-xs font-semibold uppercase tracking-wide text-fg-muted">"Employees"</p>
                    <h2 class="text-lg font-semibold text-fg">"Add Employee"</h2>
                </div>
                <p class="text-xs text-fg-muted">"Unique ID & valid email required"</p>
            </div>
            <form class="grid grid-cols-1 gap-4 md:grid-cols-2" on:submit=handle_submit>
                {EmployeeField::ALL
                    .into_iter()
                    .map(|field| view! { <DraftInput state=state field=field /> })
                    .collect_view()}
                <div class="md:col-span-2">
                    <button
                        type="submit"
                        class=format!(
                            "inline-flex items-center justify-center rounded-md px-4 py-2 text-sm font-semibold disabled:opacity-50 {}",
                            ButtonVariant::Primary.classes()
                        )
                        disabled=move || submitting.get()
                    >
                        {move || if submitting.get() { "Saving..." } else { "Add Employee" }}
                    </button>
                </div>
            </form>
        </section>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;
    use chrono::NaiveDate;

    fn state() -> ConsoleState {
        ConsoleState::new(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap())
    }

    #[test]
    fn employee_form_renders_all_fields() {
        let html = render_to_string(move || {
            let state = create_rw_signal(state());
            view! { <EmployeeForm state=state on_submit=Callback::new(|_| {}) /> }
        });
        for field in EmployeeField::ALL {
            assert!(
                html.contains(&format!("id=\"{}\"", field.name())),
                "missing {}",
                field.name()
            );
        }
        assert!(html.contains("Add Employee"));
        assert!(html.contains("type=\"email\""));
    }

    #[test]
    fn employee_form_shows_saving_state() {
        let html = render_to_string(move || {
            let mut snapshot = state();
            snapshot.employee_submitting = true;
            let state = create_rw_signal(snapshot);
            view! { <EmployeeForm state=state on_submit=Callback::new(|_| {}) /> }
        });
        assert!(html.contains("Saving..."));
    }
}
