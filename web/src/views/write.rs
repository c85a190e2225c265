use dioxus::prelude::*;

use crate::{Route, use_current_user, use_error};

#[component]
pub fn CreateBlog() -> Element {
    let current_user = use_current_user();
    let mut error_state = use_error();
    let mut title = use_signal(String::new);
    let mut content = use_signal(String::new);
    let mut submitting = use_signal(|| false);

    if current_user().is_none() {
        navigator().push(Route::login());
        return rsx! {};
    }

    let can_submit = !title.read().trim().is_empty() && !content.read().trim().is_empty();

    rsx! {
        div { class: "page page-narrow",
            div { class: "page-header",
                h1 { class: "page-title", "Write a blog" }
                p { class: "page-subtitle", "New blogs are reviewed by an administrator before they go live." }
            }
            div { class: "card",
                div { class: "card-body",
                    div { class: "form-group",
                        label { class: "form-label", r#for: "title", "Title *" }
                        input {
                            id: "title",
                            class: "form-input",
                            r#type: "text",
                            disabled: submitting(),
                            value: "{title}",
                            oninput: move |e| title.set(e.value()),
                        }
                    }
                    div { class: "form-group",
                        label { class: "form-label", r#for: "content", "Content *" }
                        textarea {
                            id: "content",
                            class: "form-input form-textarea",
                            rows: "12",
                            disabled: submitting(),
                            value: "{content}",
                            oninput: move |e| content.set(e.value()),
                        }
                    }
                    div { class: "form-actions",
                        button {
                            class: "btn btn-primary",
                            disabled: !can_submit || submitting(),
                            onclick: move |_| {
                                let t = title.read().clone();
                                let c = content.read().clone();
                                if t.trim().is_empty() || c.trim().is_empty() {
                                    error_state.set("A blog needs both a title and some content.");
                                    return;
                                }
                                spawn(async move {
                                    submitting.set(true);
                                    match api::create_post(t, c).await {
                                        Ok(post) => {
                                            tracing::info!(post_id = %post.id, "submitted blog for review");
                                            navigator().push(Route::Profile {});
                                        }
                                        Err(e) => error_state.set_server_error(&e),
                                    }
                                    submitting.set(false);
                                });
                            },
                            if submitting() { "Submitting..." } else { "Submit for review" }
                        }
                    }
                }
            }
        }
    }
}
