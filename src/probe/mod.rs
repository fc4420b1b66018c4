//! Media file inspection and validation module

pub mod validator;

pub use validator::VideoValidator;
