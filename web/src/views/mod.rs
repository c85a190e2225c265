mod admin;
pub use admin::AdminDashboard;

mod feed;
pub use feed::{Home, Trending};

mod login;
pub use login::{Login, Signup};

mod navbar;
pub use navbar::NavBar;

mod post;
pub use post::BlogDetail;

mod profile;
pub use profile::Profile;

mod write;
pub use write::CreateBlog;
