//! RISC-V CSR's
//!
//! Only the registers needed to program and read the hardware performance
//! counters are modeled here.

// User counters
pub mod cycle;
pub mod instret;
pub mod time;

// Machine performance monitoring
mod hpmcounter;
pub use self::hpmcounter::*;
mod hpmevent;
pub use self::hpmevent::*;
pub mod mcounteren;
pub mod scounteren;

// Machine information and trap setup
pub mod mie;
pub mod misa;
