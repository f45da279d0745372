pub const APP_NAME: &str = "Compatibility Score";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn version_label() -> String {
    format!("v{}", APP_VERSION)
}
