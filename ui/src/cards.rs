use dioxus::prelude::*;
use types::{Post, format_local_date};

use crate::icons;

#[component]
pub fn LoadingSpinner(#[props(default)] label: Option<String>) -> Element {
    rsx! {
        div { class: "loading",
            div { class: "spinner", role: "status" }
            if let Some(label) = label {
                span { class: "loading-label", "{label}" }
            }
        }
    }
}

/// A single number with a caption, e.g. "3 Pending Review".
#[component]
pub fn StatCard(value: String, label: String, tone: String, icon: Element) -> Element {
    rsx! {
        div { class: "card stat-card",
            div { class: "stat-icon stat-icon-{tone}", {icon} }
            div {
                p { class: "stat-value", "{value}" }
                p { class: "stat-label", "{label}" }
            }
        }
    }
}

#[component]
pub fn EmptyState(title: String, hint: String) -> Element {
    rsx! {
        div { class: "empty-state",
            icons::FileText { class: "icon icon-xl text-faint" }
            p { class: "empty-state-title", "{title}" }
            p { class: "empty-state-hint", "{hint}" }
        }
    }
}

/// Summary of a post with room for action buttons on the right.
///
/// Likes and comments only mean something once a post is public, so they are
/// shown for published posts only.
#[component]
pub fn PostCard(
    post: Post,
    #[props(default)] show_author: bool,
    #[props(default = "Created: ".to_string())] date_prefix: String,
    children: Element,
) -> Element {
    let created = format_local_date(post.created_at);

    rsx! {
        div { class: "post-card",
            div { class: "post-card-body",
                h3 { class: "post-card-title", "{post.title}" }
                p { class: "post-card-snippet", "{post.snippet}" }
                div { class: "post-card-meta",
                    if show_author {
                        span { "By: {post.author}" }
                        span { "•" }
                    }
                    span { "{date_prefix}{created}" }
                    if post.is_published() {
                        span { "•" }
                        span { "{post.likes} likes" }
                        span { "•" }
                        span { "{post.comments.len()} comments" }
                    }
                }
            }
            div { class: "post-card-actions", {children} }
        }
    }
}
