use crate::state::console::ConsoleState;
use leptos::*;

#[component]
pub fn Toast(state: RwSignal<ConsoleState>) -> impl IntoView {
    let message = create_memo(move |_| state.with(|s| s.toast.message().map(str::to_string)));

    view! {
        {move || message.get().map(|message| view! {
            <div
                class="fixed bottom-6 right-6 z-[80] rounded-md bg-surface-inverse px-4 py-3 text-sm text-fg-inverse shadow-lg"
                role="status"
                aria-live="polite"
            >
                {message}
            </div>
        })}
    }
}
