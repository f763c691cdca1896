//! Request handlers shared by the HTTP and RPC bindings.

pub mod foobar;
pub use foobar::*;
