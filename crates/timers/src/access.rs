//! The seam between the recorder and the registers it reads and programs.

/// One of the generic `mhpmcounterX`/`mhpmeventX` pairs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Slot {
    Hpm3,
    Hpm4,
    Hpm5,
    Hpm6,
}

impl Slot {
    pub const ALL: [Slot; 4] = [Slot::Hpm3, Slot::Hpm4, Slot::Hpm5, Slot::Hpm6];

    /// Index of the counter in the `hpm` numbering, `3..=6`.
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Slot::Hpm3 => 3,
            Slot::Hpm4 => 4,
            Slot::Hpm5 => 5,
            Slot::Hpm6 => 6,
        }
    }
}

/// Counter registers a snapshot reads.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Counter {
    Cycle,
    /// Wall-clock counter. Readable, but no snapshot reads it.
    Time,
    Instret,
    Hpm(Slot),
}

/// Control registers written while enabling the counters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Control {
    Scounteren,
    Mcounteren,
    Mhpmevent(Slot),
    Mie,
}

/// Privilege-mode extensions the initializer asks about.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Extension {
    Supervisor,
    User,
}

impl Extension {
    /// The `misa` letter for the extension.
    #[inline]
    pub const fn letter(self) -> char {
        match self {
            Extension::Supervisor => 'S',
            Extension::User => 'U',
        }
    }
}

/// Register access for one hart.
///
/// [`crate::Hart`] talks to the real CSRs, [`crate::SimulatedHart`] keeps
/// them in memory.
pub trait CounterAccess {
    fn supports_extension(&self, ext: Extension) -> bool;

    /// Raw counter contents. Never fails.
    fn read_counter(&self, counter: Counter) -> u64;

    /// # Safety
    ///
    /// Changes hart-wide state seen by everything running on the hart.
    unsafe fn write_control(&mut self, reg: Control, value: usize);
}
