//! UI Components
//!
//! Presentational primitives plus the two feature views.

mod button;
mod card;
mod navbar;
mod footer;
mod task_row;
mod task_manager;
mod user_card;
mod pagination_bar;
mod user_directory;

pub use button::{Button, ButtonVariant};
pub use card::Card;
pub use navbar::Navbar;
pub use footer::Footer;
pub use task_row::TaskRow;
pub use task_manager::TaskManager;
pub use user_card::UserCard;
pub use pagination_bar::PaginationBar;
pub use user_directory::UserDirectory;
