use core::cell::Cell;

use riscv::register::misa::Misa;

use crate::access::{Control, Counter, CounterAccess, Extension};

const COUNTERS: usize = 7;
const CONTROLS: usize = 7;

#[inline]
const fn counter_index(counter: Counter) -> usize {
    match counter {
        Counter::Cycle => 0,
        Counter::Time => 1,
        Counter::Instret => 2,
        Counter::Hpm(slot) => slot.index(),
    }
}

#[inline]
const fn control_index(reg: Control) -> usize {
    match reg {
        Control::Scounteren => 0,
        Control::Mcounteren => 1,
        Control::Mhpmevent(slot) => slot.index() - 1,
        Control::Mie => 6,
    }
}

/// A hart kept in memory, for running the recorder off target.
///
/// Each counter read behaves like the `csrr` it replaces: it returns the
/// current value, then retires one instruction and spends `read_cost` cycles.
#[derive(Debug)]
pub struct SimulatedHart {
    misa: Misa,
    counters: [Cell<u64>; COUNTERS],
    controls: [usize; CONTROLS],
    read_cost: u64,
    reads: Cell<usize>,
    read_counts: [Cell<usize>; COUNTERS],
    last_read: [Cell<Option<usize>>; COUNTERS],
}

impl SimulatedHart {
    /// `extensions` lists the `misa` letters the hart reports, e.g. `"IMACSU"`.
    pub fn new(extensions: &str) -> Self {
        let misa = extensions
            .chars()
            .fold(Misa::from_bits(0), |misa, ext| misa.with_extension(ext));

        Self {
            misa,
            counters: core::array::from_fn(|_| Cell::new(0)),
            controls: [0; CONTROLS],
            read_cost: 0,
            reads: Cell::new(0),
            read_counts: core::array::from_fn(|_| Cell::new(0)),
            last_read: core::array::from_fn(|_| Cell::new(None)),
        }
    }

    /// Cycles spent by every counter read.
    pub fn with_read_cost(mut self, cycles: u64) -> Self {
        self.read_cost = cycles;
        self
    }

    /// Current value of `counter`, without the cost of a read.
    #[inline]
    pub fn counter(&self, counter: Counter) -> u64 {
        self.counters[counter_index(counter)].get()
    }

    #[inline]
    pub fn set_counter(&self, counter: Counter, value: u64) {
        self.counters[counter_index(counter)].set(value);
    }

    /// Counts `n` events on `counter`, wrapping like the hardware.
    #[inline]
    pub fn advance(&self, counter: Counter, n: u64) {
        let cell = &self.counters[counter_index(counter)];
        cell.set(cell.get().wrapping_add(n));
    }

    /// Last value written to `reg`, `0` if never written.
    #[inline]
    pub fn control(&self, reg: Control) -> usize {
        self.controls[control_index(reg)]
    }

    #[inline]
    pub fn controls(&self) -> [usize; CONTROLS] {
        self.controls
    }

    /// Total counter reads so far.
    #[inline]
    pub fn reads(&self) -> usize {
        self.reads.get()
    }

    #[inline]
    pub fn read_count(&self, counter: Counter) -> usize {
        self.read_counts[counter_index(counter)].get()
    }

    /// Position of the most recent read of `counter` among all reads.
    #[inline]
    pub fn last_read(&self, counter: Counter) -> Option<usize> {
        self.last_read[counter_index(counter)].get()
    }
}

impl CounterAccess for SimulatedHart {
    #[inline]
    fn supports_extension(&self, ext: Extension) -> bool {
        self.misa.has_extension(ext.letter())
    }

    fn read_counter(&self, counter: Counter) -> u64 {
        let idx = counter_index(counter);
        let value = self.counters[idx].get();

        let seq = self.reads.get();
        self.reads.set(seq + 1);
        self.read_counts[idx].set(self.read_counts[idx].get() + 1);
        self.last_read[idx].set(Some(seq));

        self.advance(Counter::Instret, 1);
        self.advance(Counter::Cycle, self.read_cost);
        value
    }

    unsafe fn write_control(&mut self, reg: Control, value: usize) {
        self.controls[control_index(reg)] = value;
    }
}

impl Default for SimulatedHart {
    /// An RV64GC hart with supervisor and user modes.
    fn default() -> Self {
        Self::new("IMAFDCSU")
    }
}

#[cfg(test)]
mod test {
    use super::SimulatedHart;
    use crate::access::{Control, Counter, CounterAccess, Extension, Slot};

    #[test]
    fn test_read_retires_and_costs() {
        let hart = SimulatedHart::new("IU").with_read_cost(4);
        hart.set_counter(Counter::Cycle, 100);
        hart.set_counter(Counter::Instret, 10);

        assert_eq!(hart.read_counter(Counter::Cycle), 100);
        assert_eq!(hart.read_counter(Counter::Instret), 11);
        assert_eq!(hart.counter(Counter::Cycle), 108);
        assert_eq!(hart.counter(Counter::Instret), 12);
        assert_eq!(hart.reads(), 2);
        assert_eq!(hart.last_read(Counter::Instret), Some(1));
        assert_eq!(hart.last_read(Counter::Time), None);
    }

    #[test]
    fn test_extensions() {
        let hart = SimulatedHart::new("IMU");
        assert!(hart.supports_extension(Extension::User));
        assert!(!hart.supports_extension(Extension::Supervisor));
        assert!(SimulatedHart::default().supports_extension(Extension::Supervisor));
    }

    #[test]
    fn test_controls_are_distinct() {
        let mut hart = SimulatedHart::default();
        let regs = [
            Control::Scounteren,
            Control::Mcounteren,
            Control::Mhpmevent(Slot::Hpm3),
            Control::Mhpmevent(Slot::Hpm4),
            Control::Mhpmevent(Slot::Hpm5),
            Control::Mhpmevent(Slot::Hpm6),
            Control::Mie,
        ];
        for (i, reg) in regs.into_iter().enumerate() {
            unsafe { hart.write_control(reg, i + 1) };
        }
        assert_eq!(hart.controls(), [1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn test_advance_wraps() {
        let hart = SimulatedHart::default();
        hart.set_counter(Counter::Hpm(Slot::Hpm6), u64::MAX);
        hart.advance(Counter::Hpm(Slot::Hpm6), 2);
        assert_eq!(hart.counter(Counter::Hpm(Slot::Hpm6)), 1);
    }
}
