use dioxus::prelude::*;

use crate::domain::{
    similarity::{format_number, out_of_ten, percent},
    ListenBrainzUser, SimilarityTier,
};

/// Progress bar plus caption describing how similar `user` is to the viewer.
///
/// The bar is on a 0–100 scale and the caption on a 0–10 scale; both come
/// straight from `similarity_score` without clamping or rounding.
#[component]
pub fn SimilarityScore(similarity_score: f64, user: ListenBrainzUser) -> Element {
    let tier = SimilarityTier::classify(similarity_score);
    let value_now = format_number(percent(similarity_score));
    let caption_score = format_number(out_of_ten(similarity_score));
    let class_name = tier.class_name();

    tracing::trace!(score = similarity_score, %tier, user = %user.name, "render similarity score");

    rsx! {
        div { class: "similarity-score",
            div {
                class: "progress",
                aria_label: "Similarity Score",
                role: "progressbar",
                aria_valuemin: "0",
                aria_valuemax: "100",
                aria_valuenow: "{value_now}",
                tabindex: "0",
                div {
                    class: "progress-bar {class_name}",
                    style: "width: {value_now}%",
                }
            }
            p { "Your compatibility with {user.name} is {caption_score}/10!" }
        }
    }
}
