use dioxus::prelude::*;

use crate::{
    domain::AppState,
    ui::{
        pages::{SimilarUsersPage, UserCompatibilityPage},
        shell::Shell,
    },
    util::{assets, config::load_config},
};

#[derive(Routable, Clone, PartialEq)]
pub enum Route {
    #[route("/")]
    Home {},
    #[route("/user/:name")]
    User { name: String },
}

#[component]
pub fn App() -> Element {
    let state = use_signal(AppState::default);
    use_hook({
        let mut state = state;
        move || {
            if let Some(loaded) = initial_state() {
                state.set(loaded);
            }
        }
    });
    use_context_provider(|| state);

    rsx! {
        document::Style { "{assets::main_css()}" }
        Router::<Route> {}
    }
}

fn initial_state() -> Option<AppState> {
    match load_config() {
        Ok(Some(config)) => {
            let state = config.into_state();
            tracing::info!(users = state.similar_users.len(), "config loaded");
            Some(state)
        }
        Ok(None) => {
            tracing::info!("no config file found; starting empty");
            None
        }
        Err(err) => {
            tracing::warn!("failed to load config: {err}");
            None
        }
    }
}

#[component]
pub fn Home() -> Element {
    let nav = use_navigator();
    rsx! {
        Shell {
            SimilarUsersPage {
                on_select: move |name: String| { nav.push(Route::User { name }); },
            }
        }
    }
}

#[component]
pub fn User(name: String) -> Element {
    rsx! { Shell { UserCompatibilityPage { name } } }
}
