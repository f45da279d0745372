pub mod similar_users;
pub mod user_compatibility;

pub use similar_users::SimilarUsersPage;
pub use user_compatibility::UserCompatibilityPage;
