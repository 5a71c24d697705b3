//! Confirmation dialog for destructive actions.
//!
//! Dialogs take focus when they mount so Escape dismisses them without a
//! click first.

#[cfg(test)]
#[path = "confirm_dialog_test.rs"]
mod confirm_dialog_test;

use leptos::html::Div;
use leptos::prelude::*;

/// Whether `key` (a `KeyboardEvent::key` value) should dismiss a dialog.
pub(crate) fn is_dismiss_key(key: &str) -> bool {
    matches!(key, "Escape" | "Esc")
}

/// Focus `dialog` once it is mounted.
pub(crate) fn focus_on_mount(dialog: NodeRef<Div>) {
    Effect::new(move || {
        if let Some(el) = dialog.get() {
            let _ = el.focus();
        }
    });
}

/// Modal asking the user to confirm a destructive action.
#[component]
pub fn ConfirmDialog(
    title: String,
    message: Signal<String>,
    confirm_label: &'static str,
    busy: Signal<bool>,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let dialog_ref = NodeRef::<Div>::new();
    focus_on_mount(dialog_ref);

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if is_dismiss_key(&ev.key()) {
            ev.prevent_default();
            on_cancel.run(());
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div
                node_ref=dialog_ref
                class="dialog"
                role="alertdialog"
                tabindex="0"
                on:click=move |ev| ev.stop_propagation()
                on:keydown=on_keydown
            >
                <h2>{title}</h2>
                <p class="dialog__danger">{move || message.get()}</p>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(()) disabled=move || busy.get()>
                        "Cancel"
                    </button>
                    <button
                        class="btn btn--danger"
                        on:click=move |_| on_confirm.run(())
                        disabled=move || busy.get()
                    >
                        {move || if busy.get() { "Working..." } else { confirm_label }}
                    </button>
                </div>
            </div>
        </div>
    }
}
