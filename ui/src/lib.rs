//! Route-agnostic building blocks shared by the Threadle pages.

mod cards;
pub mod icons;
mod modal;
mod tabs;

pub use cards::{EmptyState, LoadingSpinner, PostCard, StatCard};
pub use modal::ConfirmModal;
pub use tabs::TabBar;
