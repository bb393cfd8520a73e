//! Low level access to the RISC-V control and status registers used for
//! hardware performance monitoring.

#![no_std]

#[macro_use]
mod macros;

pub mod register;
