//! AuraList Frontend App
//!
//! Main application component: owns the list state, provides the
//! context, and refetches both collections after every action.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::{ClearListButton, Recommendations, ShoppingList, VoiceControl};
use crate::context::AppContext;
use crate::models::{ListItem, StatusKind};
use crate::speech;

async fn fetch_lists() -> Result<(Vec<ListItem>, Vec<String>), String> {
    let items = api::get_list_items().await?;
    let recommendations = api::get_recommendations().await?;
    Ok((items, recommendations))
}

#[component]
pub fn App() -> impl IntoView {
    // State
    let (items, set_items) = signal(Vec::<ListItem>::new());
    let (recommendations, set_recommendations) = signal(Vec::<String>::new());
    let (reload_trigger, set_reload_trigger) = signal(0u32);
    let (status, set_status) = signal((String::new(), StatusKind::Info));
    let (busy, set_busy) = signal(false);
    let (listening, set_listening) = signal(false);

    // Provide context to all children
    let ctx = AppContext::new(
        (reload_trigger, set_reload_trigger),
        (status, set_status),
        (busy, set_busy),
        (listening, set_listening),
    );
    provide_context(ctx);

    // Refetch both lists whenever the trigger bumps; the first run is
    // the initial load. The server is the sole source of truth, so the
    // last refresh to complete wins.
    Effect::new(move |_| {
        let trigger = reload_trigger.get();
        web_sys::console::log_1(&format!("[APP] Refreshing lists, trigger={trigger}").into());
        spawn_local(async move {
            match fetch_lists().await {
                Ok((items, recommendations)) => {
                    set_items.set(items);
                    set_recommendations.set(recommendations);
                }
                Err(err) => {
                    web_sys::console::error_1(&format!("[APP] Refresh failed: {err}").into());
                    ctx.set_status(
                        "Could not load lists. Please check the browser console.",
                        StatusKind::Error,
                    );
                    speech::announce("I could not load your lists. Please try again.");
                }
            }
        });
    });

    let refresh = move |_: web_sys::MouseEvent| {
        ctx.set_status("Refreshing all lists...", StatusKind::Info);
        spawn_local(async move {
            match fetch_lists().await {
                Ok((items, recommendations)) => {
                    set_items.set(items);
                    set_recommendations.set(recommendations);
                    ctx.set_status("All lists refreshed.", StatusKind::Info);
                    speech::announce("Your lists have been refreshed.");
                }
                Err(err) => {
                    web_sys::console::error_1(&format!("[APP] Refresh failed: {err}").into());
                    ctx.set_status(
                        "Could not load lists. Please check the browser console.",
                        StatusKind::Error,
                    );
                    speech::announce("I could not load your lists. Please try again.");
                }
            }
        });
    };

    view! {
        <div class="app-layout">
            <h1>"AuraList"</h1>

            <VoiceControl/>

            <p class=move || status.get().1.css_class()>{move || status.get().0}</p>
            <Show when=move || busy.get()>
                <div class="loading-spinner"></div>
            </Show>

            <section class="list-section">
                <h2>"Shopping List"</h2>
                <ShoppingList items=items/>
                <div class="list-controls">
                    <button class="refresh-btn" on:click=refresh>"Refresh List"</button>
                    <ClearListButton/>
                </div>
            </section>

            <section class="list-section">
                <h2>"Recommendations"</h2>
                <Recommendations recommendations=recommendations/>
            </section>
        </div>
    }
}
