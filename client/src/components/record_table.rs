//! Table of records with per-row edit and delete actions.

use leptos::prelude::*;
use records::Column;
use uuid::Uuid;

use crate::state::screen::TableRow;

/// Record table. Shows `empty_message` in place of rows when `rows` is empty.
#[component]
pub fn RecordTable(
    columns: &'static [Column],
    rows: Signal<Vec<TableRow>>,
    empty_message: Signal<&'static str>,
    on_edit: Callback<Uuid>,
    on_delete: Callback<Uuid>,
) -> impl IntoView {
    let header = columns
        .iter()
        .map(|c| view! { <th scope="col">{c.label}</th> })
        .collect::<Vec<_>>();
    let column_count = columns.len() + 1;

    view! {
        <table class="record-table">
            <thead>
                <tr>
                    {header}
                    <th class="record-table__actions" scope="col">"Actions"</th>
                </tr>
            </thead>
            <tbody>
                <Show
                    when=move || rows.with(|r| !r.is_empty())
                    fallback=move || {
                        view! {
                            <tr>
                                <td class="record-table__empty" colspan=column_count>
                                    {move || empty_message.get()}
                                </td>
                            </tr>
                        }
                    }
                >
                    {move || {
                        rows.get()
                            .into_iter()
                            .map(|row| {
                                let id = row.id;
                                view! {
                                    <tr>
                                        {row.cells.into_iter().map(|cell| view! { <td>{cell}</td> }).collect::<Vec<_>>()}
                                        <td class="record-table__actions">
                                            <button class="btn btn--small" on:click=move |_| on_edit.run(id)>
                                                "Edit"
                                            </button>
                                            <button
                                                class="btn btn--small btn--danger"
                                                on:click=move |_| on_delete.run(id)
                                            >
                                                "Delete"
                                            </button>
                                        </td>
                                    </tr>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </Show>
            </tbody>
        </table>
    }
}
