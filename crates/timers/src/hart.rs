use riscv::register::{
    cycle, instret, mcounteren, mhpmcounter3, mhpmcounter4, mhpmcounter5, mhpmcounter6,
    mhpmevent3, mhpmevent4, mhpmevent5, mhpmevent6, mie, misa, scounteren, time,
};

use crate::access::{Control, Counter, CounterAccess, Extension, Slot};

/// The hart this code is running on.
///
/// `misa` and the `mhpm*` registers are machine-mode CSRs, so everything
/// except the `cycle`/`time`/`instret` reads expects M-mode.
#[derive(Clone, Copy, Debug, Default)]
pub struct Hart;

impl CounterAccess for Hart {
    #[inline]
    fn supports_extension(&self, ext: Extension) -> bool {
        misa::read().is_some_and(|misa| misa.has_extension(ext.letter()))
    }

    #[inline(always)]
    fn read_counter(&self, counter: Counter) -> u64 {
        match counter {
            Counter::Cycle => cycle::read64(),
            Counter::Time => time::read64(),
            Counter::Instret => instret::read64(),
            Counter::Hpm(Slot::Hpm3) => mhpmcounter3::read64(),
            Counter::Hpm(Slot::Hpm4) => mhpmcounter4::read64(),
            Counter::Hpm(Slot::Hpm5) => mhpmcounter5::read64(),
            Counter::Hpm(Slot::Hpm6) => mhpmcounter6::read64(),
        }
    }

    unsafe fn write_control(&mut self, reg: Control, value: usize) {
        unsafe {
            match reg {
                Control::Scounteren => scounteren::write(value),
                Control::Mcounteren => mcounteren::write(value),
                Control::Mhpmevent(Slot::Hpm3) => mhpmevent3::write(value),
                Control::Mhpmevent(Slot::Hpm4) => mhpmevent4::write(value),
                Control::Mhpmevent(Slot::Hpm5) => mhpmevent5::write(value),
                Control::Mhpmevent(Slot::Hpm6) => mhpmevent6::write(value),
                Control::Mie => mie::write(mie::Mie::from_bits_retain(value)),
            }
        }
    }
}
