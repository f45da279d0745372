use std::{borrow::Cow, sync::OnceLock};

use rust_embed::RustEmbed;

/// Embed the entire `assets/` directory into the binary.
#[derive(RustEmbed)]
#[folder = "assets"]
struct EmbeddedAssets;

static MAIN_CSS: OnceLock<String> = OnceLock::new();

/// Returns the contents of `assets/main.css`, or an empty sheet if it is missing.
pub fn main_css() -> &'static str {
    MAIN_CSS
        .get_or_init(|| load_text("/assets/main.css").unwrap_or_default())
        .as_str()
}

fn load_text(path: &str) -> Option<String> {
    let asset = load_asset(path)?;
    match String::from_utf8(asset.into_owned()) {
        Ok(text) => Some(text),
        Err(_) => {
            tracing::warn!(path, "embedded asset is not valid UTF-8");
            None
        }
    }
}

fn load_asset(path: &str) -> Option<Cow<'static, [u8]>> {
    let canonical = canonical_asset_path(path);
    let asset = EmbeddedAssets::get(&canonical).map(|file| file.data);
    if asset.is_none() {
        tracing::warn!(path, "failed to locate embedded asset");
    }
    asset
}

fn canonical_asset_path(path: &str) -> String {
    let trimmed = path.trim_start_matches('/');
    if let Some(rest) = trimmed.strip_prefix("assets/") {
        rest.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Class names used in `html` that have no selector in `main.css`.
#[cfg(test)]
pub fn undefined_classes(html: &str) -> Vec<String> {
    let css = main_css();
    let mut missing = Vec::new();
    for attr in html.split(r#"class=""#).skip(1) {
        let value = attr.split('"').next().unwrap_or_default();
        for class in value.split_whitespace() {
            let selector = format!(".{class}");
            let defined = css.match_indices(&selector).any(|(at, _)| {
                // reject prefix matches such as `.progress` inside `.progress-bar`
                css[at + selector.len()..]
                    .chars()
                    .next()
                    .map_or(true, |next| !(next.is_alphanumeric() || next == '-' || next == '_'))
            });
            if !defined && !missing.iter().any(|seen| seen == class) {
                missing.push(class.to_string());
            }
        }
    }
    missing
}
