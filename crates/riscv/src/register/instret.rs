//! instret register
//!
//! Number of instructions retired by the hart.

read_counter!(0xC02, 0xC82);
