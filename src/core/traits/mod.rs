//! Injection seams consumed by the translation controller
//!
//! Request building and response parsing are the two provider-specific
//! responsibilities. They are separate injected traits, passed to the
//! controller at construction, so the controller stays agnostic of any
//! concrete translation API.

mod builder;
mod parser;

pub use builder::RequestBuilder;
pub use parser::ResponseParser;
