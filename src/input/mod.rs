//! Key code to direction lookup

pub mod key_codes;

pub use key_codes::direction_for_key_code;
