//! cycle register
//!
//! Counts the clock cycles executed by the hart since an arbitrary point in
//! the past.

read_counter!(0xC00, 0xC80);
