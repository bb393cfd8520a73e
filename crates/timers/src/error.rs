use thiserror::Error;

use crate::event::Event;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("counter `{event}` went backwards: start {start}, end {end}")]
    Underflow { event: Event, start: u64, end: u64 },
}
