use dioxus::prelude::*;
use types::{Post, PostStatus, format_local_date};
use ui::{LoadingSpinner, icons};

use crate::Route;

/// Where the back button goes when there is no in-app history to return to,
/// e.g. after opening a blog link in a fresh tab.
fn back_fallback(can_go_back: bool) -> Option<Route> {
    (!can_go_back).then_some(Route::Home {})
}

#[component]
pub fn BlogDetail(id: ReadSignal<String>) -> Element {
    let post = use_resource(move || {
        let id = id();
        async move { api::get_post(id).await }
    });

    let body = match &*post.read() {
        None => rsx! { LoadingSpinner {} },
        Some(Err(e)) => rsx! {
            div { class: "alert alert-error", "Could not load this blog: {e}" }
        },
        Some(Ok(post)) => rsx! { PostView { post: post.clone() } },
    };

    rsx! {
        div { class: "page page-narrow",
            button {
                class: "btn btn-link",
                onclick: move |_| {
                    let nav = navigator();
                    match back_fallback(nav.can_go_back()) {
                        Some(route) => {
                            nav.push(route);
                        }
                        None => nav.go_back(),
                    }
                },
                "← Back"
            }
            {body}
        }
    }
}

#[component]
fn PostView(post: Post) -> Element {
    let created = format_local_date(post.created_at);
    let text = post.content.clone().unwrap_or_else(|| post.snippet.clone());

    rsx! {
        article { class: "card post-detail",
            header { class: "post-detail-header",
                h1 { class: "page-title", "{post.title}" }
                div { class: "post-card-meta",
                    span { "By: {post.author}" }
                    span { "•" }
                    span { "{created}" }
                    if post.status != PostStatus::Published {
                        span { class: "badge badge-status-{post.status}", "{post.status}" }
                    }
                }
            }
            div { class: "post-detail-content",
                for (i, paragraph) in text.split("\n\n").enumerate() {
                    p { key: "{i}", "{paragraph}" }
                }
            }
            if post.is_published() {
                footer { class: "post-detail-footer",
                    span { class: "post-detail-stat",
                        icons::Heart { class: "icon icon-sm" }
                        "{post.likes} likes"
                    }
                    h2 { class: "section-header", "Comments ({post.comments.len()})" }
                    if post.comments.is_empty() {
                        p { class: "text-muted", "No comments yet." }
                    }
                    ul { class: "comment-list",
                        for comment in post.comments.iter() {
                            li { key: "{comment.id}", class: "comment",
                                span { class: "comment-author", "{comment.author}" }
                                if let Some(at) = comment.created_at {
                                    span { class: "comment-date", "{format_local_date(at)}" }
                                }
                                p { class: "comment-body", "{comment.content}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
