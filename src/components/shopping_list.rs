//! Shopping List Component
//!
//! Renders the item collection as a full replacement on every change.

use leptos::prelude::*;

use crate::components::ItemRow;
use crate::models::ListItem;

/// The shopping list region. An empty collection renders a placeholder
/// row with no action controls.
#[component]
pub fn ShoppingList(items: ReadSignal<Vec<ListItem>>) -> impl IntoView {
    view! {
        <ul class="shopping-list">
            {move || {
                let items = items.get();
                if items.is_empty() {
                    view! {
                        <li class="list-placeholder">
                            "Your list is currently empty. Start adding items!"
                        </li>
                    }
                    .into_any()
                } else {
                    items
                        .into_iter()
                        .map(|item| view! { <ItemRow item=item/> })
                        .collect_view()
                        .into_any()
                }
            }}
        </ul>
    }
}
