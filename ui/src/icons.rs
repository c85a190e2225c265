//! Stroke icons drawn inline so the app ships without an icon font.

use dioxus::prelude::*;

#[component]
fn Icon(class: String, children: Element) -> Element {
    rsx! {
        svg {
            class,
            width: "24",
            height: "24",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            {children}
        }
    }
}

#[component]
pub fn PenTool(#[props(default)] class: Option<String>) -> Element {
    rsx! {
        Icon { class: class.unwrap_or_else(|| "icon".into()),
            path { d: "m12 19 7-7 3 3-7 7-3-3z" }
            path { d: "m18 13-1.5-7.5L2 2l3.5 14.5L13 18l5-5z" }
            path { d: "m2 2 7.586 7.586" }
            circle { cx: "11", cy: "11", r: "2" }
        }
    }
}

#[component]
pub fn Home(#[props(default)] class: Option<String>) -> Element {
    rsx! {
        Icon { class: class.unwrap_or_else(|| "icon".into()),
            path { d: "m3 9 9-7 9 7v11a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2z" }
            polyline { points: "9 22 9 12 15 12 15 22" }
        }
    }
}

#[component]
pub fn TrendingUp(#[props(default)] class: Option<String>) -> Element {
    rsx! {
        Icon { class: class.unwrap_or_else(|| "icon".into()),
            polyline { points: "22 7 13.5 15.5 8.5 10.5 2 17" }
            polyline { points: "16 7 22 7 22 13" }
        }
    }
}

#[component]
pub fn User(#[props(default)] class: Option<String>) -> Element {
    rsx! {
        Icon { class: class.unwrap_or_else(|| "icon".into()),
            path { d: "M19 21v-2a4 4 0 0 0-4-4H9a4 4 0 0 0-4 4v2" }
            circle { cx: "12", cy: "7", r: "4" }
        }
    }
}

#[component]
pub fn Users(#[props(default)] class: Option<String>) -> Element {
    rsx! {
        Icon { class: class.unwrap_or_else(|| "icon".into()),
            path { d: "M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2" }
            circle { cx: "9", cy: "7", r: "4" }
            path { d: "M22 21v-2a4 4 0 0 0-3-3.87" }
            path { d: "M16 3.13a4 4 0 0 1 0 7.75" }
        }
    }
}

#[component]
pub fn LogOut(#[props(default)] class: Option<String>) -> Element {
    rsx! {
        Icon { class: class.unwrap_or_else(|| "icon".into()),
            path { d: "M9 21H5a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2h4" }
            polyline { points: "16 17 21 12 16 7" }
            line { x1: "21", y1: "12", x2: "9", y2: "12" }
        }
    }
}

#[component]
pub fn Settings(#[props(default)] class: Option<String>) -> Element {
    rsx! {
        Icon { class: class.unwrap_or_else(|| "icon".into()),
            circle { cx: "12", cy: "12", r: "3" }
            path { d: "M19.4 15a1.65 1.65 0 0 0 .33 1.82l.06.06a2 2 0 1 1-2.83 2.83l-.06-.06a1.65 1.65 0 0 0-1.82-.33 1.65 1.65 0 0 0-1 1.51V21a2 2 0 1 1-4 0v-.09A1.65 1.65 0 0 0 9 19.4a1.65 1.65 0 0 0-1.82.33l-.06.06a2 2 0 1 1-2.83-2.83l.06-.06A1.65 1.65 0 0 0 4.68 15a1.65 1.65 0 0 0-1.51-1H3a2 2 0 1 1 0-4h.09A1.65 1.65 0 0 0 4.6 9a1.65 1.65 0 0 0-.33-1.82l-.06-.06a2 2 0 1 1 2.83-2.83l.06.06A1.65 1.65 0 0 0 9 4.68a1.65 1.65 0 0 0 1-1.51V3a2 2 0 1 1 4 0v.09a1.65 1.65 0 0 0 1 1.51 1.65 1.65 0 0 0 1.82-.33l.06-.06a2 2 0 1 1 2.83 2.83l-.06.06A1.65 1.65 0 0 0 19.4 9a1.65 1.65 0 0 0 1.51 1H21a2 2 0 1 1 0 4h-.09a1.65 1.65 0 0 0-1.51 1z" }
        }
    }
}

#[component]
pub fn FileText(#[props(default)] class: Option<String>) -> Element {
    rsx! {
        Icon { class: class.unwrap_or_else(|| "icon".into()),
            path { d: "M14 2H6a2 2 0 0 0-2 2v16a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2V8z" }
            polyline { points: "14 2 14 8 20 8" }
            line { x1: "16", y1: "13", x2: "8", y2: "13" }
            line { x1: "16", y1: "17", x2: "8", y2: "17" }
        }
    }
}

#[component]
pub fn Clock(#[props(default)] class: Option<String>) -> Element {
    rsx! {
        Icon { class: class.unwrap_or_else(|| "icon".into()),
            circle { cx: "12", cy: "12", r: "10" }
            polyline { points: "12 6 12 12 16 14" }
        }
    }
}

#[component]
pub fn CheckCircle(#[props(default)] class: Option<String>) -> Element {
    rsx! {
        Icon { class: class.unwrap_or_else(|| "icon".into()),
            path { d: "M22 11.08V12a10 10 0 1 1-5.93-9.14" }
            polyline { points: "22 4 12 14.01 9 11.01" }
        }
    }
}

#[component]
pub fn XCircle(#[props(default)] class: Option<String>) -> Element {
    rsx! {
        Icon { class: class.unwrap_or_else(|| "icon".into()),
            circle { cx: "12", cy: "12", r: "10" }
            line { x1: "15", y1: "9", x2: "9", y2: "15" }
            line { x1: "9", y1: "9", x2: "15", y2: "15" }
        }
    }
}

#[component]
pub fn Eye(#[props(default)] class: Option<String>) -> Element {
    rsx! {
        Icon { class: class.unwrap_or_else(|| "icon".into()),
            path { d: "M1 12s4-8 11-8 11 8 11 8-4 8-11 8-11-8-11-8z" }
            circle { cx: "12", cy: "12", r: "3" }
        }
    }
}

#[component]
pub fn Trash(#[props(default)] class: Option<String>) -> Element {
    rsx! {
        Icon { class: class.unwrap_or_else(|| "icon".into()),
            polyline { points: "3 6 5 6 21 6" }
            path { d: "M19 6v14a2 2 0 0 1-2 2H7a2 2 0 0 1-2-2V6m3 0V4a2 2 0 0 1 2-2h4a2 2 0 0 1 2 2v2" }
            line { x1: "10", y1: "11", x2: "10", y2: "17" }
            line { x1: "14", y1: "11", x2: "14", y2: "17" }
        }
    }
}

#[component]
pub fn Mail(#[props(default)] class: Option<String>) -> Element {
    rsx! {
        Icon { class: class.unwrap_or_else(|| "icon".into()),
            rect { x: "2", y: "4", width: "20", height: "16", rx: "2" }
            path { d: "m22 7-10 5L2 7" }
        }
    }
}

#[component]
pub fn Calendar(#[props(default)] class: Option<String>) -> Element {
    rsx! {
        Icon { class: class.unwrap_or_else(|| "icon".into()),
            rect { x: "3", y: "4", width: "18", height: "18", rx: "2", ry: "2" }
            line { x1: "16", y1: "2", x2: "16", y2: "6" }
            line { x1: "8", y1: "2", x2: "8", y2: "6" }
            line { x1: "3", y1: "10", x2: "21", y2: "10" }
        }
    }
}

#[component]
pub fn Heart(#[props(default)] class: Option<String>) -> Element {
    rsx! {
        Icon { class: class.unwrap_or_else(|| "icon".into()),
            path { d: "M20.84 4.61a5.5 5.5 0 0 0-7.78 0L12 5.67l-1.06-1.06a5.5 5.5 0 0 0-7.78 7.78l1.06 1.06L12 21.23l7.78-7.78 1.06-1.06a5.5 5.5 0 0 0 0-7.78z" }
        }
    }
}
