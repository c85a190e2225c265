use dioxus::prelude::*;

/// Yes/no dialog for destructive actions. While `busy` the dialog can't be dismissed.
#[component]
pub fn ConfirmModal(
    title: String,
    message: String,
    confirm_label: String,
    busy: bool,
    on_close: EventHandler<()>,
    on_confirm: EventHandler<()>,
) -> Element {
    rsx! {
        div { class: "modal-overlay",
            onclick: move |_| if !busy { on_close.call(()) },
            div { class: "modal modal-sm",
                onclick: move |e| e.stop_propagation(),
                div { class: "modal-header",
                    h2 { class: "modal-title", "{title}" }
                    if !busy {
                        button {
                            class: "modal-close",
                            onclick: move |_| on_close.call(()),
                            "×"
                        }
                    }
                }
                div { class: "modal-body",
                    p { "{message}" }
                }
                div { class: "modal-footer",
                    button {
                        class: "btn btn-secondary",
                        disabled: busy,
                        onclick: move |_| on_close.call(()),
                        "Cancel"
                    }
                    button {
                        class: "btn btn-danger",
                        disabled: busy,
                        onclick: move |_| on_confirm.call(()),
                        if busy { "Working..." } else { "{confirm_label}" }
                    }
                }
            }
        }
    }
}
