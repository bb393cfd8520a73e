//! scounteren register
//!
//! Same layout as `mcounteren`, gating U-mode access.

write_csr_as_usize!(0x106);
