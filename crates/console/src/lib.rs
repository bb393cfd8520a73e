#![no_std]

pub use console::{_ln, _print, _println, Console, init_console};

pub mod console;
pub mod log_print;

pub mod log {
    pub use crate::{debug, error, info, trace, warn};
}
