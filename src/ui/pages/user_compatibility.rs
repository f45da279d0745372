use dioxus::prelude::*;

use crate::domain::AppState;
use crate::ui::components::SimilarityScore;

#[component]
pub fn UserCompatibilityPage(name: String) -> Element {
    let state = use_context::<Signal<AppState>>();
    let entries = state.with(|st| {
        st.find_similar(&name)
            .into_iter()
            .cloned()
            .collect::<Vec<_>>()
    });

    if entries.is_empty() {
        tracing::debug!(%name, "no similarity entry for user");
        return rsx! {
            div { class: "notice notice-warning",
                p { "No compatibility data for {name}." }
            }
        };
    }

    rsx! {
        section { class: "card",
            h2 { class: "page-title", "{name}" }
            for (idx, entry) in entries.into_iter().enumerate() {
                SimilarityScore { key: "{idx}", similarity_score: entry.similarity, user: entry.user }
            }
        }
    }
}
