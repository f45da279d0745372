use serde::{Deserialize, Serialize};

use super::user::ListenBrainzUser;

/// One entry of the "users similar to you" list.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SimilarUser {
    pub user: ListenBrainzUser,
    /// Normalised similarity, expected in `[0, 1]`.
    pub similarity: f64,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AppState {
    /// Account the scores are relative to.
    pub viewer: Option<ListenBrainzUser>,
    pub similar_users: Vec<SimilarUser>,
}

impl AppState {
    /// All entries for `name`, in config order. Names are not unique.
    pub fn find_similar(&self, name: &str) -> Vec<&SimilarUser> {
        self.similar_users
            .iter()
            .filter(|entry| entry.user.name == name)
            .collect()
    }

    pub fn viewer_name(&self) -> Option<&str> {
        self.viewer.as_ref().map(|user| user.name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> AppState {
        AppState {
            viewer: Some(ListenBrainzUser::named("rob")),
            similar_users: vec![
                SimilarUser {
                    user: ListenBrainzUser::named("Alice"),
                    similarity: 0.55,
                },
                SimilarUser {
                    user: ListenBrainzUser::named("bob"),
                    similarity: 0.1,
                },
            ],
        }
    }

    #[test]
    fn finds_entries_by_exact_name() {
        let state = state();
        let found: Vec<f64> = state.find_similar("bob").iter().map(|e| e.similarity).collect();
        assert_eq!(found, vec![0.1]);
        assert!(state.find_similar("alice").is_empty());
    }

    #[test]
    fn repeated_names_return_every_entry() {
        let mut state = state();
        state.similar_users.push(SimilarUser {
            user: ListenBrainzUser::named("bob"),
            similarity: 0.8,
        });
        let found: Vec<f64> = state.find_similar("bob").iter().map(|e| e.similarity).collect();
        assert_eq!(found, vec![0.1, 0.8]);
    }

    #[test]
    fn viewer_name_is_optional() {
        assert_eq!(state().viewer_name(), Some("rob"));
        assert_eq!(AppState::default().viewer_name(), None);
    }
}
