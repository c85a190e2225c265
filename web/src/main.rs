use dioxus::prelude::*;
use types::User;

mod views;

use views::{AdminDashboard, BlogDetail, CreateBlog, Home, Login, NavBar, Profile, Signup, Trending};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(AppLayout)]
        #[route("/")]
        Home {},
        #[route("/trending")]
        Trending {},
        #[route("/create-blog")]
        CreateBlog {},
        #[route("/profile")]
        Profile {},
        #[route("/admin/dashboard")]
        AdminDashboard {},
        #[route("/blog/:id")]
        BlogDetail { id: String },
        #[route("/login?:error")]
        Login { error: Option<String> },
        #[route("/signup?:error")]
        Signup { error: Option<String> },
}

impl Route {
    pub fn login() -> Self {
        Route::Login { error: None }
    }

    pub fn blog(id: impl Into<String>) -> Self {
        Route::BlogDetail { id: id.into() }
    }
}

fn main() {
    #[cfg(feature = "server")]
    dioxus::serve(|| async move {
        let routes = server::init()?;

        Ok(dioxus::server::router(App).merge(routes))
    });

    #[cfg(all(feature = "web", not(feature = "server")))]
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Title { "ThreadLe" }
        document::Link { rel: "icon", href: asset!("/assets/favicon.svg") }
        document::Link { rel: "stylesheet", href: asset!("/assets/main.css") }

        Router::<Route> {}
    }
}

/// Structured error information for display
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ErrorInfo {
    pub message: String,
    pub chain: Vec<String>,
}

impl ErrorInfo {
    pub fn from_message(message: impl Into<String>) -> Self {
        let message = message.into();
        // Server errors arrive as `context: cause: root`.
        let chain = message.split(": ").map(String::from).collect();
        Self { message, chain }
    }

    /// Parse a ServerFnError to extract structured error info
    pub fn from_server_error(err: &ServerFnError) -> Self {
        match err {
            ServerFnError::ServerError { message, .. } => Self::from_message(message.clone()),
            other => Self::from_message(other.to_string()),
        }
    }

    /// The outermost context, shown as the banner headline.
    pub fn headline(&self) -> &str {
        self.chain.first().map_or(self.message.as_str(), String::as_str)
    }
}

/// Global error state - use `use_error()` to access
#[derive(Clone, Copy)]
pub struct ErrorState(Signal<Option<ErrorInfo>>);

impl ErrorState {
    pub fn set(&mut self, error: impl Into<String>) {
        self.0.set(Some(ErrorInfo::from_message(error)));
    }

    pub fn set_server_error(&mut self, err: &ServerFnError) {
        tracing::warn!(error = %err, "server call failed");

        // Check for 401 (session expired) and redirect to login
        if let ServerFnError::ServerError { code: 401, message, .. } = err {
            navigator().push(Route::Login {
                error: Some(message.clone()),
            });
            return;
        }
        self.0.set(Some(ErrorInfo::from_server_error(err)));
    }

    pub fn clear(&mut self) {
        self.0.set(None);
    }
}

/// Get the global error state for setting/clearing errors
pub fn use_error() -> ErrorState {
    use_context::<ErrorState>()
}

/// The signed-in user, shared by every page under [`AppLayout`].
#[derive(Clone, Copy)]
pub struct CurrentUser(Memo<Option<User>>);

/// Reading the returned memo subscribes the caller to sign-in changes.
pub fn use_current_user() -> Memo<Option<User>> {
    use_context::<CurrentUser>().0
}

#[component]
fn ErrorBanner() -> Element {
    let mut error_state = use_context::<ErrorState>();
    let error = error_state.0.read();

    let Some(err) = error.as_ref() else {
        return rsx! {};
    };

    rsx! {
        div { class: "error-banner",
            div { class: "error-banner-header",
                span { class: "error-banner-message", "{err.headline()}" }
                button {
                    class: "error-banner-close",
                    onclick: move |_| error_state.clear(),
                    "×"
                }
            }
            if err.chain.len() > 1 {
                ol { class: "error-chain-list",
                    for (i, msg) in err.chain.iter().enumerate().skip(1) {
                        li { key: "{i}", class: "error-chain-item", "{msg}" }
                    }
                }
            }
        }
    }
}

#[component]
fn AppLayout() -> Element {
    let mut error_state = use_context_provider(|| ErrorState(Signal::new(None)));
    let user = use_server_future(api::get_current_user)?;

    let current_user = use_memo(move || match &*user.read() {
        Some(Ok(user)) => user.clone(),
        Some(Err(error)) => {
            tracing::warn!(%error, "could not load the current user");
            None
        }
        None => None,
    });
    use_context_provider(|| CurrentUser(current_user));

    // Errors belong to the page they happened on.
    let route: Route = use_route();
    use_effect(use_reactive(&route, move |_| error_state.clear()));

    rsx! {
        div { class: "app-layout",
            NavBar {}
            main { class: "main-content",
                ErrorBanner {}
                Outlet::<Route> {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn splits_server_messages_into_a_chain() {
        let info = ErrorInfo::from_message(
            "failed to fetch blogs: blog service returned 503 Service Unavailable",
        );

        assert_eq!(info.headline(), "failed to fetch blogs");
        assert_eq!(
            info.chain,
            vec![
                "failed to fetch blogs".to_string(),
                "blog service returned 503 Service Unavailable".to_string()
            ]
        );
    }

    #[test]
    fn plain_messages_have_a_single_link() {
        let info = ErrorInfo::from_message("you need to be signed in");
        assert_eq!(info.chain.len(), 1);
        assert_eq!(info.headline(), "you need to be signed in");
    }

    #[test]
    fn routes_render_their_paths() {
        assert_eq!(Route::blog("abc").to_string(), "/blog/abc");
        assert_eq!(Route::AdminDashboard {}.to_string(), "/admin/dashboard");
        assert_eq!(Route::CreateBlog {}.to_string(), "/create-blog");
    }
}
