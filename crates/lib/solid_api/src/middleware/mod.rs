//! Request middleware.

pub mod request_context;
