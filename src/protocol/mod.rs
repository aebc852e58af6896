//! Item request handling
//!
//! This module maps HTTP requests onto item commands and turns command
//! results into JSON replies.

pub mod command;
pub mod create;
pub mod delete;
pub mod error;
pub mod get;
pub mod list;
pub mod reply;
pub mod request;

pub use command::Command;
pub use error::ApiError;
pub use reply::Reply;
pub use request::Request;
