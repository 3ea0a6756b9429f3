//! Request handlers.

pub mod forgot_password;
