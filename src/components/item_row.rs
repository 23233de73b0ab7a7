//! Item Row Component
//!
//! One rendered list item with its action buttons and the inline edit
//! form. Clicking the label swaps the row into editing; Cancel restores
//! the original display without a network call, Save dispatches a
//! `SaveEdit` command and the following refresh re-renders the row.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::actions::{self, ListCommand};
use crate::context::AppContext;
use crate::models::ListItem;

/// A single row in the shopping list
#[component]
pub fn ItemRow(item: ListItem) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let id = StoredValue::new(item.id.clone());
    let display_name = StoredValue::new(item.name.clone());
    let note = StoredValue::new(item.note.clone().unwrap_or_default());

    let (editing, set_editing) = signal(false);
    let (name_input, set_name_input) = signal(String::new());
    let (note_input, set_note_input) = signal(String::new());

    let start_edit = move |_: web_sys::MouseEvent| {
        // Pre-fill from the current display values so Cancel can simply
        // fall back to them.
        set_name_input.set(display_name.get_value());
        set_note_input.set(note.get_value());
        set_editing.set(true);
    };

    let save = move |_: web_sys::MouseEvent| {
        let command = ListCommand::SaveEdit {
            item_id: id.get_value(),
            name_input: name_input.get(),
            note: note_input.get(),
        };
        set_editing.set(false);
        spawn_local(async move {
            actions::dispatch(ctx, command).await;
        });
    };

    view! {
        <li class="list-row">
            <Show when=move || !editing.get()>
                <span class="item-content" on:click=start_edit>
                    {display_name.get_value()}
                    {(!note.get_value().is_empty())
                        .then(|| view! { <span class="item-note">" (" {note.get_value()} ")"</span> })}
                </span>
                <div class="item-actions">
                    <button
                        class="mark-bought-btn"
                        on:click=move |_| {
                            let command = ListCommand::ToggleBought { item_id: id.get_value() };
                            spawn_local(async move {
                                actions::dispatch(ctx, command).await;
                            });
                        }
                    >
                        "\u{2714}"
                    </button>
                    <button
                        class="delete-item-btn"
                        on:click=move |_| {
                            let command = ListCommand::Delete { item_id: id.get_value() };
                            spawn_local(async move {
                                actions::dispatch(ctx, command).await;
                            });
                        }
                    >
                        "\u{1F5D1}"
                    </button>
                </div>
            </Show>
            <Show when=move || editing.get()>
                <div class="edit-form">
                    <input
                        type="text"
                        class="edit-input"
                        placeholder="Item name (e.g., 2 liters milk)"
                        prop:value=move || name_input.get()
                        on:input=move |ev| {
                            let target = ev.target().unwrap();
                            let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                            set_name_input.set(input.value());
                        }
                    />
                    <input
                        type="text"
                        class="edit-input"
                        placeholder="Note (e.g., for Friday)"
                        prop:value=move || note_input.get()
                        on:input=move |ev| {
                            let target = ev.target().unwrap();
                            let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                            set_note_input.set(input.value());
                        }
                    />
                    <div class="edit-buttons">
                        <button class="save-btn" on:click=save>"Save"</button>
                        <button class="cancel-btn" on:click=move |_| set_editing.set(false)>
                            "Cancel"
                        </button>
                    </div>
                </div>
            </Show>
        </li>
    }
}
