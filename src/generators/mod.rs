// src/generators/mod.rs
pub mod password;

pub use password::{PasswordGenerator, RandomSource, ThreadRngSource, ALPHABET, PASSWORD_LENGTH};
