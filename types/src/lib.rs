mod buckets;
mod error;
mod format;
mod post;
mod session;

pub use buckets::{ModerationAction, PostBuckets, Tab};
pub use error::{Error, Result};
pub use format::{format_date, format_local_date};
pub use post::{Comment, Post, PostStatus};
pub use session::{SESSION_COOKIE_NAME, User, UserSession};

#[cfg(feature = "server")]
pub use session::{decode_session, encode_session};

// FIXME: We can do this better I think.
#[doc(hidden)]
pub use anyhow::anyhow as internal_anyhow_dont_use;

/// Build an [`Error`] from a format string.
#[macro_export]
macro_rules! err {
    ($($arg:tt)*) => {
        $crate::Error::from($crate::internal_anyhow_dont_use!($($arg)*))
    };
}
