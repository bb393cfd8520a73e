//! mcounteren register
//!
//! Controls which counters may be read from the next lower privilege mode.
//! Bit 0 is `cycle`, bit 1 `time`, bit 2 `instret`, bits 3-31 `hpmcounterX`.

write_csr_as_usize!(0x306);
