//! Generic list/create/edit/delete/export screen for one record collection.
//!
//! SYSTEM CONTEXT
//! ==============
//! `pages::patients` and `pages::doctors` are one-liners around
//! `RecordScreen<Patient>` and `RecordScreen<Doctor>`. Everything that differs
//! between the two comes from the `Record` implementation.
//!
//! ASYNC FLOW
//! ==========
//! Requests run on `spawn_local`. Responses are applied with `try_update` so
//! a response arriving after the user navigated away is dropped instead of
//! touching a disposed signal.

#[cfg(test)]
#[path = "record_screen_test.rs"]
mod record_screen_test;

use std::marker::PhantomData;

use leptos::prelude::*;
use records::{CSV_MIME, Record, export_filename};
use uuid::Uuid;

use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::record_form_dialog::RecordFormDialog;
use crate::components::record_table::RecordTable;
use crate::state::screen::{LoadStatus, ModalState, RecordScreenState};
use crate::util::download::{save_file, today};

#[cfg(feature = "hydrate")]
use crate::net::api;
#[cfg(feature = "hydrate")]
use crate::state::screen::Submission;

/// Full management screen for records of type `R`.
#[component]
pub fn RecordScreen<R: Record>(#[prop(marker)] _marker: PhantomData<R>) -> impl IntoView {
    let state = RwSignal::new(RecordScreenState::<R>::default());

    #[cfg(feature = "hydrate")]
    spawn_load(state);

    let load = Memo::new(move |_| state.with(|s| s.load.clone()));
    let modal_open = Memo::new(move |_| state.with(|s| s.modal != ModalState::Closed));
    let delete_pending = Memo::new(move |_| state.with(|s| s.pending_delete.is_some()));

    let kind = R::KIND;

    let on_export = move |_| {
        let filename = today().map_or_else(|| format!("{}.csv", kind.collection()), |d| export_filename(kind, d));
        let result = state
            .with_untracked(RecordScreenState::export_csv)
            .map_err(|e| e.to_string())
            .and_then(|bytes| save_file(&filename, CSV_MIME, &bytes));
        match result {
            Ok(()) => state.update(|s| s.action_error = None),
            Err(err) => state.update(|s| s.action_error = Some(format!("Export failed: {err}"))),
        }
    };

    let on_edit = Callback::new(move |id: Uuid| {
        state.update(|s| {
            s.open_edit(id);
        });
    });
    let on_delete = Callback::new(move |id: Uuid| state.update(|s| s.request_delete(id)));

    let on_input = Callback::new(move |(key, value): (&'static str, String)| {
        state.update(|s| s.set_field(key, value));
    });
    let on_submit = Callback::new(move |()| {
        let Some(submission) = state.try_update(RecordScreenState::begin_submit).flatten() else {
            return;
        };
        #[cfg(feature = "hydrate")]
        spawn_submit(state, submission);
        #[cfg(not(feature = "hydrate"))]
        let _ = submission;
    });
    let on_cancel_form = Callback::new(move |()| {
        if !state.with_untracked(|s| s.submitting) {
            state.update(RecordScreenState::close_modal);
        }
    });

    let on_confirm_delete = Callback::new(move |()| {
        let Some(id) = state.try_update(RecordScreenState::begin_delete).flatten() else {
            return;
        };
        #[cfg(feature = "hydrate")]
        spawn_delete(state, id);
        #[cfg(not(feature = "hydrate"))]
        let _ = id;
    });
    let on_cancel_delete = Callback::new(move |()| state.update(RecordScreenState::cancel_delete));

    let rows = Signal::derive(move || state.with(RecordScreenState::visible_rows));
    let empty_message = Signal::derive(move || {
        state.with(|s| if s.items.is_empty() { "No records yet." } else { "No records match." })
    });
    let counts = move || {
        state.with(|s| {
            let total = s.items.len();
            let shown = s.visible().len();
            if shown == total { format!("{total} total") } else { format!("{shown} of {total}") }
        })
    };

    view! {
        <section class="record-screen">
            <header class="record-screen__header">
                <h1>{kind.title()}</h1>
                <input
                    class="record-screen__search"
                    type="search"
                    placeholder="Search by name or id"
                    prop:value=move || state.with(|s| s.query.clone())
                    on:input=move |ev| state.update(|s| s.set_query(event_target_value(&ev)))
                />
                <span class="record-screen__count">{counts}</span>
                <button class="btn" on:click=on_export disabled=move || !state.with(RecordScreenState::is_loaded)>
                    "Export"
                </button>
                <button class="btn btn--primary" on:click=move |_| state.update(RecordScreenState::open_create)>
                    {format!("+ New {}", kind.singular())}
                </button>
            </header>

            <Show when=move || state.with(|s| s.action_error.is_some())>
                <p class="record-screen__error">{move || state.with(|s| s.action_error.clone().unwrap_or_default())}</p>
            </Show>

            {move || match load.get() {
                LoadStatus::Loading => view! { <p class="record-screen__status">"Loading..."</p> }.into_any(),
                LoadStatus::Failed(message) => view! {
                    <p class="record-screen__status record-screen__status--error">
                        {format!("Could not load {}: {message}", kind.collection())}
                    </p>
                }
                .into_any(),
                LoadStatus::Loaded => view! {
                    <RecordTable
                        columns=R::columns()
                        rows=rows
                        empty_message=empty_message
                        on_edit=on_edit
                        on_delete=on_delete
                    />
                }
                .into_any(),
            }}

            <Show when=move || modal_open.get()>
                <RecordFormDialog
                    title=Signal::derive(move || state.with(RecordScreenState::modal_title))
                    fields=R::form_fields()
                    values=Signal::derive(move || state.with(|s| s.form.clone()))
                    errors=Signal::derive(move || state.with(|s| s.field_errors.clone()))
                    submit_error=Signal::derive(move || state.with(|s| s.submit_error.clone()))
                    submitting=Signal::derive(move || state.with(|s| s.submitting))
                    on_input=on_input
                    on_submit=on_submit
                    on_cancel=on_cancel_form
                />
            </Show>

            <Show when=move || delete_pending.get()>
                <ConfirmDialog
                    title=format!("Delete {}", kind.singular())
                    message=Signal::derive(move || {
                        let name = state.with(RecordScreenState::pending_delete_label).unwrap_or_default();
                        format!("Delete {name}? This cannot be undone.")
                    })
                    confirm_label="Delete"
                    busy=Signal::derive(move || state.with(|s| s.deleting))
                    on_confirm=on_confirm_delete
                    on_cancel=on_cancel_delete
                />
            </Show>
        </section>
    }
}

#[cfg(feature = "hydrate")]
fn spawn_load<R: Record>(state: RwSignal<RecordScreenState<R>>) {
    state.update(RecordScreenState::begin_load);
    leptos::task::spawn_local(async move {
        let result = api::list_records::<R>().await;
        if let Err(err) = &result {
            log::warn!("failed to load {}: {err}", R::KIND.collection());
        }
        state.try_update(|s| s.finish_load(result));
    });
}

#[cfg(feature = "hydrate")]
fn spawn_submit<R: Record>(state: RwSignal<RecordScreenState<R>>, submission: Submission<R::Payload>) {
    leptos::task::spawn_local(async move {
        let result = match &submission {
            Submission::Create(payload) => api::create_record::<R>(payload).await,
            Submission::Update(id, payload) => api::update_record::<R>(*id, payload).await,
        };
        if let Err(err) = &result {
            log::warn!("failed to save {}: {err}", R::KIND.singular());
        }
        state.try_update(|s| s.finish_submit(result));
    });
}

#[cfg(feature = "hydrate")]
fn spawn_delete<R: Record>(state: RwSignal<RecordScreenState<R>>, id: Uuid) {
    leptos::task::spawn_local(async move {
        let result = api::delete_record::<R>(id).await;
        if let Err(err) = &result {
            log::warn!("failed to delete {} {id}: {err}", R::KIND.singular());
        }
        state.try_update(|s| s.finish_delete(id, result));
    });
}
