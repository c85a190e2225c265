use dioxus::prelude::*;
use types::Post;
use ui::{EmptyState, LoadingSpinner, PostCard, icons};

use crate::Route;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FeedOrder {
    Newest,
    MostLiked,
}

/// Published posts in display order. The service already returns newest first;
/// the like sort is stable so ties keep that order.
fn arrange(mut posts: Vec<Post>, order: FeedOrder) -> Vec<Post> {
    posts.retain(Post::is_published);
    if order == FeedOrder::MostLiked {
        posts.sort_by(|a, b| b.likes.cmp(&a.likes));
    }
    posts
}

#[component]
pub fn Home() -> Element {
    rsx! {
        Feed {
            order: FeedOrder::Newest,
            title: "Latest stories",
            subtitle: "Fresh writing from the ThreadLe community.",
        }
    }
}

#[component]
pub fn Trending() -> Element {
    rsx! {
        Feed {
            order: FeedOrder::MostLiked,
            title: "Trending",
            subtitle: "The most liked posts right now.",
        }
    }
}

#[component]
fn Feed(order: FeedOrder, title: String, subtitle: String) -> Element {
    let feed = use_resource(api::list_published_posts);

    let body = match &*feed.read() {
        None => rsx! { LoadingSpinner {} },
        Some(Err(e)) => rsx! {
            div { class: "alert alert-error", "Could not load blogs: {e}" }
        },
        Some(Ok(posts)) if posts.is_empty() => rsx! {
            EmptyState {
                title: "Nothing here yet",
                hint: "Published blogs will show up here.",
            }
        },
        Some(Ok(posts)) => {
            let posts = arrange(posts.clone(), order);
            rsx! {
                div { class: "post-list",
                    for post in posts {
                        {
                            let id = post.id.clone();
                            rsx! {
                                PostCard { key: "{post.id}", post: post.clone(), show_author: true, date_prefix: "",
                                    button {
                                        class: "icon-btn",
                                        title: "Read blog",
                                        onclick: move |_| {
                                            navigator().push(Route::blog(id.clone()));
                                        },
                                        icons::Eye { class: "icon icon-sm" }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    };

    rsx! {
        div { class: "page page-narrow",
            div { class: "page-header",
                h1 { class: "page-title", "{title}" }
                p { class: "page-subtitle", "{subtitle}" }
            }
            {body}
        }
    }
}
