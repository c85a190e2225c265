use std::collections::HashSet;

use dioxus::prelude::*;
use types::{ModerationAction, Post, PostBuckets, Tab};
use ui::{ConfirmModal, EmptyState, LoadingSpinner, PostCard, StatCard, TabBar, icons};

use crate::{Route, use_current_user, use_error};

fn empty_hint(tab: Tab) -> &'static str {
    match tab {
        Tab::Pending => "All caught up! No blogs waiting for review.",
        Tab::Published => "No blogs have been published yet.",
    }
}

/// Whether finishing the action on `finished` should close the open dialog.
/// A dialog opened for another post stays up.
fn closes_dialog(confirming: Option<&(ModerationAction, Post)>, finished: &str) -> bool {
    confirming.is_some_and(|(_, post)| post.id == finished)
}

#[component]
pub fn AdminDashboard() -> Element {
    let current_user = use_current_user();
    let mut error_state = use_error();
    let mut posts = use_signal(Vec::<Post>::new);
    let mut loading = use_signal(|| true);
    let mut active_tab = use_signal(Tab::default);
    // Waiting for the admin to confirm.
    let mut confirming = use_signal(|| None::<(ModerationAction, Post)>);
    // Ids of posts with an action still talking to the server.
    let mut in_flight = use_signal(HashSet::<String>::new);

    let refresh = move || async move {
        match api::list_all_posts().await {
            Ok(p) => posts.set(p),
            Err(e) => error_state.set_server_error(&e),
        }
    };

    // Fetch all posts on mount and whenever the signed-in user changes
    use_effect(move || {
        if current_user().is_some_and(|u| u.is_admin) {
            spawn(async move {
                loading.set(true);
                refresh().await;
                loading.set(false);
            });
        }
    });

    let run = move |action: ModerationAction, post_id: String| {
        spawn(async move {
            in_flight.write().insert(post_id.clone());
            let result = match action {
                ModerationAction::Approve => api::approve_post(post_id.clone()).await,
                ModerationAction::Reject => api::reject_post(post_id.clone()).await,
                ModerationAction::Delete => api::delete_post(post_id.clone()).await,
            };
            match result {
                Ok(()) => refresh().await,
                Err(e) => error_state.set_server_error(&e),
            }
            in_flight.write().remove(&post_id);
            let finished = closes_dialog((*confirming.peek()).as_ref(), &post_id);
            if finished {
                confirming.set(None);
            }
        });
    };

    let mut request = move |action: ModerationAction, post: Post| {
        if action.confirm_prompt().is_some() {
            confirming.set(Some((action, post)));
        } else {
            run(action, post.id);
        }
    };

    if !current_user().is_some_and(|u| u.is_admin) {
        navigator().push(Route::Home {});
        return rsx! {};
    }

    let buckets = PostBuckets::partition(posts.read().iter());
    let tab = active_tab();
    let busy_ids = in_flight.read().clone();

    rsx! {
        div { class: "admin-layout",
            aside { class: "admin-sidebar",
                div { class: "admin-sidebar-header",
                    icons::Settings { class: "icon icon-md text-accent" }
                    h1 { class: "admin-title", "Admin Dashboard" }
                }
                nav { class: "admin-sidebar-nav",
                    button {
                        class: if tab == Tab::Pending { "sidebar-tab active" } else { "sidebar-tab" },
                        onclick: move |_| active_tab.set(Tab::Pending),
                        icons::Clock { class: "icon icon-md" }
                        span { "Pending Blogs" }
                        if buckets.pending_count() > 0 {
                            span { class: "badge badge-warning", "{buckets.pending_count()}" }
                        }
                    }
                    button {
                        class: if tab == Tab::Published { "sidebar-tab active" } else { "sidebar-tab" },
                        onclick: move |_| active_tab.set(Tab::Published),
                        icons::FileText { class: "icon icon-md" }
                        span { "Published Blogs" }
                        span { class: "sidebar-count", "{buckets.published_count()}" }
                    }
                }
            }

            div { class: "admin-main",
                div { class: "stat-grid stat-grid-4",
                    StatCard {
                        value: buckets.pending_count().to_string(),
                        label: "Pending Review",
                        tone: "yellow",
                        icon: rsx! { icons::Clock {} },
                    }
                    StatCard {
                        value: buckets.published_count().to_string(),
                        label: "Published",
                        tone: "green",
                        icon: rsx! { icons::FileText {} },
                    }
                    StatCard {
                        value: buckets.total_likes().to_string(),
                        label: "Total Likes",
                        tone: "blue",
                        icon: rsx! { icons::TrendingUp {} },
                    }
                    StatCard {
                        value: buckets.total_comments().to_string(),
                        label: "Total Comments",
                        tone: "purple",
                        icon: rsx! { icons::Users {} },
                    }
                }

                div { class: "card",
                    TabBar {
                        active: tab,
                        pending: buckets.pending_count(),
                        published: buckets.published_count(),
                        suffix: " Blogs",
                        on_select: move |t| active_tab.set(t),
                    }
                    div { class: "card-body",
                        if loading() {
                            LoadingSpinner {}
                        } else if buckets.for_tab(tab).is_empty() {
                            EmptyState {
                                title: format!("No {} blogs", tab.label()),
                                hint: empty_hint(tab).to_string(),
                            }
                        } else {
                            div { class: "post-list",
                                for post in buckets.for_tab(tab).iter().cloned() {
                                    {
                                        let busy = busy_ids.contains(&post.id);
                                        let id = post.id.clone();
                                        let approve = post.clone();
                                        let reject = post.clone();
                                        let delete = post.clone();
                                        rsx! {
                                            PostCard { key: "{post.id}", post: post.clone(), show_author: true, date_prefix: "",
                                                button {
                                                    class: "icon-btn",
                                                    title: "View blog",
                                                    disabled: busy,
                                                    onclick: move |_| {
                                                        navigator().push(Route::blog(id.clone()));
                                                    },
                                                    icons::Eye { class: "icon icon-sm" }
                                                }
                                                if tab == Tab::Pending {
                                                    button {
                                                        class: "icon-btn icon-btn-success",
                                                        title: "Approve blog",
                                                        disabled: busy,
                                                        onclick: move |_| request(ModerationAction::Approve, approve.clone()),
                                                        icons::CheckCircle { class: "icon icon-sm" }
                                                    }
                                                    button {
                                                        class: "icon-btn icon-btn-danger",
                                                        title: "Reject blog",
                                                        disabled: busy,
                                                        onclick: move |_| request(ModerationAction::Reject, reject.clone()),
                                                        icons::XCircle { class: "icon icon-sm" }
                                                    }
                                                } else {
                                                    button {
                                                        class: "icon-btn icon-btn-danger",
                                                        title: "Delete blog",
                                                        disabled: busy,
                                                        onclick: move |_| request(ModerationAction::Delete, delete.clone()),
                                                        icons::Trash { class: "icon icon-sm" }
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
            }
        }

        if let Some((action, post)) = confirming() {
            {
                let (title, confirm_label) = match action {
                    ModerationAction::Reject => ("Reject Blog", "Reject"),
                    _ => ("Delete Blog", "Delete"),
                };
                let message = format!(
                    "{} (\"{}\")",
                    action.confirm_prompt().unwrap_or_default(),
                    post.title
                );
                let busy = busy_ids.contains(&post.id);
                let post_id = post.id;
                rsx! {
                    ConfirmModal {
                        title: title.to_string(),
                        message,
                        confirm_label: confirm_label.to_string(),
                        busy,
                        on_close: move |_| confirming.set(None),
                        on_confirm: move |_| run(action, post_id.clone()),
                    }
                }
            }
        }
    }
}
