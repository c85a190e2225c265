use dioxus::prelude::*;
use types::User;
use ui::icons;

use crate::{Route, use_current_user};

/// A destination in the top navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavItem {
    Home,
    Trending,
    Write,
    Profile,
    Admin,
}

impl NavItem {
    pub fn route(self) -> Route {
        match self {
            Self::Home => Route::Home {},
            Self::Trending => Route::Trending {},
            Self::Write => Route::CreateBlog {},
            Self::Profile => Route::Profile {},
            Self::Admin => Route::AdminDashboard {},
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Trending => "Trending",
            Self::Write => "Write",
            Self::Profile => "Profile",
            Self::Admin => "Admin",
        }
    }

    fn icon(self, class: &str) -> Element {
        let class = class.to_string();
        match self {
            Self::Home => rsx! { icons::Home { class } },
            Self::Trending => rsx! { icons::TrendingUp { class } },
            Self::Write => rsx! { icons::PenTool { class } },
            Self::Profile => rsx! { icons::User { class } },
            Self::Admin => rsx! { icons::Settings { class } },
        }
    }
}

/// Links visible to `user`: everyone gets the public feeds, signed-in users can
/// write and see their profile, admins also get the moderation queue.
pub fn nav_items(user: Option<&User>) -> Vec<NavItem> {
    let mut items = vec![NavItem::Home, NavItem::Trending];
    if let Some(user) = user {
        items.extend([NavItem::Write, NavItem::Profile]);
        if user.is_admin {
            items.push(NavItem::Admin);
        }
    }
    items
}

#[component]
fn NavLink(item: NavItem, #[props(default)] compact: bool) -> Element {
    let current_route: Route = use_route();
    let to = item.route();
    let is_active = current_route == to;

    let class = match (compact, is_active) {
        (false, true) => "nav-link active",
        (false, false) => "nav-link",
        (true, true) => "nav-link-compact active",
        (true, false) => "nav-link-compact",
    };

    rsx! {
        Link { to, class: "{class}",
            {item.icon(if compact { "icon icon-md" } else { "icon icon-sm" })}
            span { "{item.label()}" }
        }
    }
}

#[component]
pub fn NavBar() -> Element {
    let current_user = use_current_user();
    let user = current_user();
    let items = nav_items(user.as_ref());

    rsx! {
        nav { class: "navbar",
            div { class: "navbar-inner",
                Link { to: Route::Home {}, class: "navbar-brand",
                    div { class: "navbar-logo", icons::PenTool { class: "icon icon-sm" } }
                    span { class: "navbar-title", "ThreadLe" }
                }

                div { class: "navbar-links",
                    for item in items.iter().copied() {
                        NavLink { key: "{item.label()}", item }
                    }
                }

                div { class: "navbar-auth",
                    if let Some(user) = &user {
                        span { class: "navbar-username", "{user.username}" }
                        a {
                            href: "/auth/logout",
                            rel: "external",
                            class: "navbar-logout",
                            icons::LogOut { class: "icon icon-sm" }
                            span { "Logout" }
                        }
                    } else {
                        Link { to: Route::login(), class: "navbar-login", "Login" }
                        Link { to: Route::Signup { error: None }, class: "btn btn-primary", "Sign Up" }
                    }
                }
            }

            if user.is_some() {
                div { class: "navbar-compact",
                    for item in items.iter().copied() {
                        NavLink { key: "{item.label()}", item, compact: true }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn user(is_admin: bool) -> User {
        User {
            id: "u1".into(),
            username: "ada".into(),
            email: "ada@example.com".into(),
            is_admin,
            created_at: "2024-01-01T00:00:00Z".parse().unwrap(),
        }
    }

    #[test]
    fn visitors_only_see_public_feeds() {
        assert_eq!(nav_items(None), vec![NavItem::Home, NavItem::Trending]);
    }

    #[test]
    fn authors_can_write_and_see_their_profile() {
        assert_eq!(
            nav_items(Some(&user(false))),
            vec![NavItem::Home, NavItem::Trending, NavItem::Write, NavItem::Profile]
        );
    }

    #[test]
    fn admins_also_get_the_dashboard() {
        let items = nav_items(Some(&user(true)));
        assert_eq!(items.last(), Some(&NavItem::Admin));
        assert_eq!(NavItem::Admin.route(), Route::AdminDashboard {});
    }
}
