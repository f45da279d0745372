//! Every configured user alongside their compatibility with the viewer.

use dioxus::prelude::*;

use crate::domain::AppState;
use crate::ui::components::SimilarityScore;

#[component]
pub fn SimilarUsersPage(on_select: EventHandler<String>) -> Element {
    let state = use_context::<Signal<AppState>>();
    let entries = state.with(|st| st.similar_users.clone());

    if entries.is_empty() {
        return rsx! {
            div { class: "notice",
                p { "No similar users configured yet." }
            }
        };
    }

    rsx! {
        section {
            h2 { class: "page-title", "Similar users" }
            ul { class: "user-list",
                for (idx, entry) in entries.into_iter().enumerate() {
                    // names may repeat in config
                    li {
                        key: "{idx}",
                        class: "card",
                        button {
                            class: "user-link",
                            onclick: {
                                let name = entry.user.name.clone();
                                move |_| on_select.call(name.clone())
                            },
                            "{entry.user.name}"
                        }
                        SimilarityScore { similarity_score: entry.similarity, user: entry.user.clone() }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ListenBrainzUser, SimilarUser};
    use crate::util::assets::undefined_classes;

    #[component]
    fn Harness(state: AppState) -> Element {
        let shared = use_signal(|| state.clone());
        use_context_provider(|| shared);
        rsx! { SimilarUsersPage { on_select: move |_| {} } }
    }

    fn render(state: AppState) -> String {
        let mut dom = VirtualDom::new_with_props(Harness, HarnessProps { state });
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn one_widget_per_configured_user() {
        let html = render(AppState {
            viewer: None,
            similar_users: vec![
                SimilarUser {
                    user: ListenBrainzUser::named("Alice"),
                    similarity: 0.55,
                },
                SimilarUser {
                    user: ListenBrainzUser::named("bob"),
                    similarity: 0.9,
                },
            ],
        });
        assert_eq!(html.matches(r#"role="progressbar""#).count(), 2);
        assert!(html.contains("Your compatibility with Alice is 5.5/10!"));
        assert!(html.contains("Your compatibility with bob is 9/10!"));
        assert!(undefined_classes(&html).is_empty(), "{:?}", undefined_classes(&html));
    }

    #[test]
    fn repeated_names_each_get_a_row() {
        let alice = |similarity| SimilarUser {
            user: ListenBrainzUser::named("Alice"),
            similarity,
        };
        let html = render(AppState {
            viewer: None,
            similar_users: vec![alice(0.2), alice(0.9)],
        });
        assert_eq!(html.matches(r#"class="card""#).count(), 2);
        assert!(html.contains("progress-bar-danger"));
        assert!(html.contains("progress-bar-success"));
    }

    #[test]
    fn empty_state_has_a_notice() {
        let html = render(AppState::default());
        assert!(html.contains("No similar users configured yet."));
        assert!(!html.contains("progressbar"));
        assert!(undefined_classes(&html).is_empty(), "{:?}", undefined_classes(&html));
    }
}
