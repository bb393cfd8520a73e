//! Console sink shared by the tests that inspect printed output.
//!
//! The console is installed once per test binary, so every such test goes
//! through here and checks for its own lines in the common buffer.

extern crate std;

use std::string::String;

use console::{Console, init_console};
use spin::Mutex;

static OUTPUT: Mutex<String> = Mutex::new(String::new());

struct Capture;

impl Console for Capture {
    fn put_char(&self, c: u8) {
        OUTPUT.lock().push(c as char);
    }

    fn put_str(&self, s: &str) {
        OUTPUT.lock().push_str(s);
    }
}

static CAPTURE: Capture = Capture;

pub fn install() {
    init_console(&CAPTURE);
}

/// Everything printed so far, by any test.
pub fn output() -> String {
    OUTPUT.lock().clone()
}
