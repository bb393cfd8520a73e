//! Machine hardware performance-monitoring event selectors
//!
//! Event encodings are implementation defined. On Rocket/BOOM cores the low
//! byte selects an event set and the upper bits form a mask of events in that
//! set.

pub mod mhpmevent3 {
    write_csr_as_usize!(0x323);
}

pub mod mhpmevent4 {
    write_csr_as_usize!(0x324);
}

pub mod mhpmevent5 {
    write_csr_as_usize!(0x325);
}

pub mod mhpmevent6 {
    write_csr_as_usize!(0x326);
}
