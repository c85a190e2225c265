use dioxus::prelude::*;
use types::{Post, PostBuckets, Tab, format_local_date};
use ui::{ConfirmModal, EmptyState, LoadingSpinner, PostCard, StatCard, TabBar, icons};

use crate::{Route, use_current_user, use_error};

fn empty_hint(tab: Tab) -> &'static str {
    match tab {
        Tab::Pending => "Create your first blog to get started!",
        Tab::Published => "Your published blogs will appear here.",
    }
}

#[component]
pub fn Profile() -> Element {
    let current_user = use_current_user();
    let mut error_state = use_error();
    let mut posts = use_signal(Vec::<Post>::new);
    let mut loading = use_signal(|| true);
    let mut active_tab = use_signal(Tab::default);
    let mut confirm_delete = use_signal(|| None::<Post>);
    let mut deleting = use_signal(|| false);

    let refresh = move |user_id: String| async move {
        match api::list_user_posts(user_id).await {
            Ok(p) => posts.set(p),
            Err(e) => error_state.set_server_error(&e),
        }
    };

    // Fetch this author's posts on mount and whenever the signed-in user changes
    use_effect(move || {
        if let Some(user) = current_user() {
            spawn(async move {
                loading.set(true);
                refresh(user.id).await;
                loading.set(false);
            });
        }
    });

    let Some(user) = current_user() else {
        navigator().push(Route::login());
        return rsx! {};
    };

    let buckets = PostBuckets::partition(posts.read().iter());
    let tab = active_tab();
    let joined = format_local_date(user.created_at);

    rsx! {
        div { class: "page page-narrow",
            div { class: "card profile-header",
                div { class: "profile-avatar", icons::User { class: "icon icon-lg" } }
                div { class: "profile-info",
                    h1 { class: "page-title", "{user.username}" }
                    div { class: "profile-meta",
                        span { class: "profile-meta-item",
                            icons::Mail { class: "icon icon-sm" }
                            "{user.email}"
                        }
                        span { class: "profile-meta-item",
                            icons::Calendar { class: "icon icon-sm" }
                            "Joined on: {joined}"
                        }
                    }
                    if user.is_admin {
                        span { class: "badge badge-purple", "Administrator" }
                    }
                }
            }

            div { class: "stat-grid stat-grid-3",
                StatCard {
                    value: buckets.pending_count().to_string(),
                    label: "Pending Approval",
                    tone: "yellow",
                    icon: rsx! { icons::FileText {} },
                }
                StatCard {
                    value: buckets.published_count().to_string(),
                    label: "Published",
                    tone: "green",
                    icon: rsx! { icons::FileText {} },
                }
                StatCard {
                    value: buckets.rejected_count().to_string(),
                    label: "Rejected",
                    tone: "red",
                    icon: rsx! { icons::FileText {} },
                }
            }

            div { class: "card",
                TabBar {
                    active: tab,
                    pending: buckets.pending_count(),
                    published: buckets.published_count(),
                    on_select: move |t| active_tab.set(t),
                }
                div { class: "card-body",
                    if loading() {
                        LoadingSpinner {}
                    } else if buckets.for_tab(tab).is_empty() {
                        EmptyState {
                            title: format!("No {} blogs yet", tab.label()),
                            hint: empty_hint(tab).to_string(),
                        }
                    } else {
                        div { class: "post-list",
                            for post in buckets.for_tab(tab).iter().cloned() {
                                {
                                    let id = post.id.clone();
                                    let withdraw = post.clone();
                                    rsx! {
                                        PostCard { key: "{post.id}", post: post.clone(),
                                            if post.is_pending() {
                                                button {
                                                    class: "icon-btn icon-btn-danger",
                                                    title: "Delete draft",
                                                    onclick: move |_| confirm_delete.set(Some(withdraw.clone())),
                                                    icons::Trash { class: "icon icon-sm" }
                                                }
                                            }
                                            button {
                                                class: "icon-btn",
                                                title: "View blog",
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
            }
        }

        if let Some(post) = confirm_delete() {
            {
                let user_id = user.id.clone();
                let post_id = post.id;
                rsx! {
                    ConfirmModal {
                        title: "Delete Blog",
                        message: format!("Are you sure you want to delete this blog? (\"{}\")", post.title),
                        confirm_label: "Delete",
                        busy: deleting(),
                        on_close: move |_| confirm_delete.set(None),
                        on_confirm: move |_| {
                            let post_id = post_id.clone();
                            let user_id = user_id.clone();
                            spawn(async move {
                                deleting.set(true);
                                match api::delete_post(post_id).await {
                                    Ok(()) => refresh(user_id).await,
                                    Err(e) => error_state.set_server_error(&e),
                                }
                                deleting.set(false);
                                confirm_delete.set(None);
                            });
                        },
                    }
                }
            }
        }
    }
}
