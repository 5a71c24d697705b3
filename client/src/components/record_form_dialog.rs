//! Create/edit form dialog rendered from a record type's field descriptors.
//!
//! DESIGN
//! ======
//! The dialog knows nothing about patients or doctors. It renders one input
//! per `FieldSpec`, reports edits through `on_input`, and leaves validation
//! and submission to the owning screen.

use leptos::html::Div;
use leptos::prelude::*;
use records::{FieldKind, FieldSpec, FormValues, ValidationErrors};

use crate::components::confirm_dialog::{focus_on_mount, is_dismiss_key};

/// Modal form for creating or editing a record.
#[component]
pub fn RecordFormDialog(
    title: Signal<String>,
    fields: &'static [FieldSpec],
    values: Signal<FormValues>,
    errors: Signal<ValidationErrors>,
    submit_error: Signal<Option<String>>,
    submitting: Signal<bool>,
    on_input: Callback<(&'static str, String)>,
    on_submit: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let on_form_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        on_submit.run(());
    };
    let dialog_ref = NodeRef::<Div>::new();
    focus_on_mount(dialog_ref);

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if is_dismiss_key(&ev.key()) && !submitting.get_untracked() {
            ev.prevent_default();
            on_cancel.run(());
        }
    };

    let inputs = fields
        .iter()
        .map(|field| view! { <FormField field=*field values=values errors=errors on_input=on_input/> })
        .collect::<Vec<_>>();

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div
                node_ref=dialog_ref
                class="dialog dialog--form"
                tabindex="-1"
                on:click=move |ev| ev.stop_propagation()
                on:keydown=on_keydown
            >
                <h2>{move || title.get()}</h2>
                <form class="dialog__form" on:submit=on_form_submit novalidate=true>
                    {inputs}
                    <Show when=move || submit_error.get().is_some()>
                        <p class="dialog__error">{move || submit_error.get().unwrap_or_default()}</p>
                    </Show>
                    <div class="dialog__actions">
                        <button
                            type="button"
                            class="btn"
                            on:click=move |_| on_cancel.run(())
                            disabled=move || submitting.get()
                        >
                            "Cancel"
                        </button>
                        <button type="submit" class="btn btn--primary" disabled=move || submitting.get()>
                            {move || if submitting.get() { "Saving..." } else { "Save" }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}

#[component]
fn FormField(
    field: FieldSpec,
    values: Signal<FormValues>,
    errors: Signal<ValidationErrors>,
    on_input: Callback<(&'static str, String)>,
) -> impl IntoView {
    let key = field.key;
    let value = move || values.with(|v| v.get(key).to_owned());
    let error = move || errors.with(|e| e.get(key).map(str::to_owned));
    let label = if field.required { format!("{} *", field.label) } else { field.label.to_owned() };

    let control = match field.kind {
        FieldKind::Choice(options) => view! {
            <select
                class="dialog__input"
                prop:value=value
                on:change=move |ev| on_input.run((key, event_target_value(&ev)))
            >
                <option value="">"Select..."</option>
                {options.iter().map(|o| view! { <option value=*o>{*o}</option> }).collect::<Vec<_>>()}
            </select>
        }
        .into_any(),
        kind => view! {
            <input
                class="dialog__input"
                type=kind.input_type()
                name=key
                prop:value=value
                on:input=move |ev| on_input.run((key, event_target_value(&ev)))
            />
        }
        .into_any(),
    };

    view! {
        <label class=move || {
            if error().is_some() { "dialog__label dialog__label--invalid" } else { "dialog__label" }
        }>
            {label}
            {control}
            <Show when=move || error().is_some()>
                <span class="dialog__field-error">{move || error().unwrap_or_default()}</span>
            </Show>
        </label>
    }
}
