//! Application Configuration
//!
//! Compile-time settings. Values that components need are handed to them
//! as props (with these as defaults) rather than looked up globally.

/// Product name shown in the navbar and footer
pub const APP_NAME: &str = "TaskMaster Pro";

/// Copyright year shown in the footer
pub const COPYRIGHT_YEAR: u32 = 2025;

/// Remote collection backing the user directory
pub const USERS_ENDPOINT: &str = "https://jsonplaceholder.typicode.com/users";

/// Users per directory page
pub const USERS_PAGE_SIZE: usize = 6;

/// Local storage key for the task collection
pub const TASKS_KEY: &str = "tasks";

/// Local storage key for the dark mode flag
pub const DARK_MODE_KEY: &str = "darkMode";

/// Class toggled on `<html>` while dark mode is on
pub const DARK_CLASS: &str = "dark";
