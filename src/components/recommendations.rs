//! Recommendations Component
//!
//! Plain display strings recomputed by the server on every fetch; no
//! identity and no actions.

use leptos::prelude::*;

#[component]
pub fn Recommendations(recommendations: ReadSignal<Vec<String>>) -> impl IntoView {
    view! {
        <ul class="recommendations-list">
            {move || {
                let recommendations = recommendations.get();
                if recommendations.is_empty() {
                    view! {
                        <li class="list-placeholder">
                            "No current suggestions. Add more items and use AuraList frequently for personalized recommendations!"
                        </li>
                    }
                    .into_any()
                } else {
                    recommendations
                        .into_iter()
                        .map(|rec| view! { <li class="recommendation-row">{rec}</li> })
                        .collect_view()
                        .into_any()
                }
            }}
        </ul>
    }
}
