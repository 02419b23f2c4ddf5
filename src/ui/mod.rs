//! Presentation layer - Headless view models rendered by the CLI front ends.

mod user_list;

pub use user_list::{UserForm, UserList, ViewState};
