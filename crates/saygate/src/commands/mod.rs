//! CLI command implementations for saygate

mod openapi;
mod serve;

pub use openapi::openapi;
pub use serve::{ServeArgs, serve};
