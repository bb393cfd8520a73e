//! Machine hardware performance-monitoring counters
//!
//! What each counter increments on is decided by the matching `mhpmeventX`
//! selector.

pub mod mhpmcounter3 {
    read_counter!(0xB03, 0xB83);
}

pub mod mhpmcounter4 {
    read_counter!(0xB04, 0xB84);
}

pub mod mhpmcounter5 {
    read_counter!(0xB05, 0xB85);
}

pub mod mhpmcounter6 {
    read_counter!(0xB06, 0xB86);
}
