use dioxus::prelude::*;
use types::Tab;

/// Horizontal pending/published switch with counts in the labels.
///
/// `suffix` is appended to each tab title, e.g. `" Blogs"`.
#[component]
pub fn TabBar(
    active: Tab,
    pending: usize,
    published: usize,
    #[props(default)] suffix: String,
    on_select: EventHandler<Tab>,
) -> Element {
    rsx! {
        nav { class: "tab-bar",
            for tab in Tab::ALL {
                {
                    let count = match tab {
                        Tab::Pending => pending,
                        Tab::Published => published,
                    };
                    rsx! {
                        button {
                            key: "{tab.label()}",
                            class: if tab == active { "tab tab-active" } else { "tab" },
                            onclick: move |_| on_select.call(tab),
                            "{tab.title()}{suffix} ({count})"
                        }
                    }
                }
            }
        }
    }
}
