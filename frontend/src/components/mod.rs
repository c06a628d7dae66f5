pub mod entries;
pub mod login_page;
pub mod navbar;

pub use entries::EntriesPage;
pub use login_page::LoginPage;
pub use navbar::Navbar;
