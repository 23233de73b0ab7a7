//! Clear List Button Component
//!
//! Inline confirmation before wiping the whole list, since the action
//! cannot be undone.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::actions::{self, ListCommand};
use crate::context::AppContext;

#[component]
pub fn ClearListButton() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let (confirming, set_confirming) = signal(false);

    view! {
        <Show when=move || !confirming.get()>
            <button class="clear-list-btn" on:click=move |_| set_confirming.set(true)>
                "Clear All Items"
            </button>
        </Show>
        <Show when=move || confirming.get()>
            <span class="clear-confirm">
                <span class="clear-confirm-text">"Clear the whole list? This cannot be undone."</span>
                <button
                    class="confirm-btn"
                    on:click=move |_| {
                        set_confirming.set(false);
                        spawn_local(async move {
                            actions::dispatch(ctx, ListCommand::ClearList).await;
                        });
                    }
                >
                    "\u{2713}"
                </button>
                <button class="cancel-btn" on:click=move |_| set_confirming.set(false)>
                    "\u{2717}"
                </button>
            </span>
        </Show>
    }
}
