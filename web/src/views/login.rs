use dioxus::prelude::*;

use crate::{Route, use_current_user};

#[component]
pub fn Login(error: Option<String>) -> Element {
    let current_user = use_current_user();
    if current_user().is_some() {
        navigator().replace(Route::Home {});
        return rsx! {};
    }

    rsx! {
        div { class: "login-page",
            div { class: "login-card",
                div { class: "login-header",
                    h1 { class: "login-title", "Welcome back" }
                    p { class: "login-subtitle", "Sign in to write and manage your blogs." }
                }
                if let Some(error) = error {
                    div { class: "alert alert-error", "{error}" }
                }
                form {
                    action: "/auth/login",
                    method: "post",
                    div { class: "form-group",
                        label { class: "form-label", r#for: "email", "Email" }
                        input { id: "email", name: "email", class: "form-input", r#type: "email", required: true }
                    }
                    div { class: "form-group",
                        label { class: "form-label", r#for: "password", "Password" }
                        input { id: "password", name: "password", class: "form-input", r#type: "password", required: true }
                    }
                    button {
                        r#type: "submit",
                        class: "btn btn-primary login-btn",
                        "Login"
                    }
                }
                p { class: "login-footer",
                    "No account yet? "
                    Link { to: Route::Signup { error: None }, "Sign up" }
                }
            }
        }
    }
}

#[component]
pub fn Signup(error: Option<String>) -> Element {
    let current_user = use_current_user();
    if current_user().is_some() {
        navigator().replace(Route::Home {});
        return rsx! {};
    }

    rsx! {
        div { class: "login-page",
            div { class: "login-card",
                div { class: "login-header",
                    h1 { class: "login-title", "Join ThreadLe" }
                    p { class: "login-subtitle", "Create an account to start writing." }
                }
                if let Some(error) = error {
                    div { class: "alert alert-error", "{error}" }
                }
                form {
                    action: "/auth/signup",
                    method: "post",
                    div { class: "form-group",
                        label { class: "form-label", r#for: "username", "Username" }
                        input { id: "username", name: "username", class: "form-input", r#type: "text", required: true }
                    }
                    div { class: "form-group",
                        label { class: "form-label", r#for: "email", "Email" }
                        input { id: "email", name: "email", class: "form-input", r#type: "email", required: true }
                    }
                    div { class: "form-group",
                        label { class: "form-label", r#for: "password", "Password" }
                        input { id: "password", name: "password", class: "form-input", r#type: "password", required: true }
                    }
                    button {
                        r#type: "submit",
                        class: "btn btn-primary login-btn",
                        "Sign Up"
                    }
                }
                p { class: "login-footer",
                    "Already have an account? "
                    Link { to: Route::login(), "Login" }
                }
            }
        }
    }
}
