//! Users and similarity scores shown by the app.

pub mod app_state;
pub mod similarity;
pub mod user;

pub use app_state::{AppState, SimilarUser};
pub use similarity::SimilarityTier;
pub use user::ListenBrainzUser;
