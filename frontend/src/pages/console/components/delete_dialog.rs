use crate::{
    components::common::{Button, ButtonVariant},
    state::console::ConsoleState,
};
use leptos::ev::KeyboardEvent;
use leptos::*;

/// Confirmation for `ConsoleState::pending_delete`. Open while a delete is
/// pending; backdrop, Cancel and Escape all cancel.
#[component]
pub fn EmployeeDeleteDialog(
    state: RwSignal<ConsoleState>,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let prompt = create_memo(move |_| state.with(|s| s.delete_prompt()));
    let department = create_memo(move |_| {
        state.with(|s| {
            s.pending_delete
                .as_deref()
                .and_then(|id| s.find_employee(id))
                .map(|employee| employee.department.clone())
                .filter(|department| !department.trim().is_empty())
        })
    });

    view! {
        {move || prompt.get().map(|prompt| view! {
            <div class="fixed inset-0 z-[70] flex items-center justify-center p-4">
                <div
                    class="fixed inset-0 bg-overlay-backdrop"
                    data-testid="delete-dialog-backdrop"
                    on:click=move |_| on_cancel.call(())
                ></div>
                <div
                    class="relative w-full max-w-md rounded-lg border border-border bg-surface-elevated p-6 shadow-xl space-y-4"
                    role="alertdialog"
                    aria-modal="true"
                    tabindex="-1"
                    on:keydown=move |ev: KeyboardEvent| {
                        if ev.key() == "Escape" {
                            ev.prevent_default();
                            on_cancel.call(());
                        }
                    }
                >
                    <h2 class="text-lg font-semibold text-fg">{prompt}</h2>
                    {move || department.get().map(|department| view! {
                        <p class="text-sm text-fg-muted">{format!("Department: {}", department)}</p>
                    })}
                    <div class="flex justify-end gap-2">
                        <Button variant=ButtonVariant::Ghost on:click=move |_| on_cancel.call(())>
                            "Cancel"
                        </Button>
                        <Button variant=ButtonVariant::Danger on:click=move |_| on_confirm.call(())>
                            "Delete"
                        </Button>
                    </div>
                </div>
            </div>
        })}
    }
}
