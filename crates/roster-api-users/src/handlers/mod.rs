//! HTTP handlers for the users API.

pub mod create;
pub mod get;
pub mod hello;

pub use create::create_user_handler;
pub use get::get_user_handler;
pub use hello::hello_handler;
