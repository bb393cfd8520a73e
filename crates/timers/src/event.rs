use core::fmt;

use macros::usize_env_or;

use crate::access::{Counter, Slot};

/// RocketCore event encodings. The low byte picks the event set, the rest is
/// a mask over the events in that set.
pub const ICACHE_MISS_EVENT: usize = usize_env_or!("HPM_ICACHE_MISS_EVENT", 0x102);
pub const BRANCH_TAKEN_EVENT: usize = usize_env_or!("HPM_BRANCH_TAKEN_EVENT", 0x4000);
/// Branch direction or jump/target misprediction.
pub const BRANCH_MISS_EVENT: usize = usize_env_or!("HPM_BRANCH_MISS_EVENT", 0x6001);
pub const DCACHE_MISS_EVENT: usize = usize_env_or!("HPM_DCACHE_MISS_EVENT", 0x202);

/// Event selectors programmed by [`crate::init_counters`].
pub const SELECTORS: [(Slot, usize); 4] = [
    (Slot::Hpm3, ICACHE_MISS_EVENT),
    (Slot::Hpm4, BRANCH_TAKEN_EVENT),
    (Slot::Hpm5, BRANCH_MISS_EVENT),
    (Slot::Hpm6, DCACHE_MISS_EVENT),
];

/// The monitored signals.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Event {
    Cycles,
    Instructions,
    InstrCacheMiss,
    BranchMiss,
    BranchTaken,
    DataCacheMiss,
}

impl Event {
    /// Report order.
    pub const ALL: [Event; 6] = [
        Event::Cycles,
        Event::Instructions,
        Event::InstrCacheMiss,
        Event::BranchMiss,
        Event::BranchTaken,
        Event::DataCacheMiss,
    ];

    /// Order in which a snapshot reads the counters.
    pub const SNAPSHOT_ORDER: [Event; 6] = [
        Event::Instructions,
        Event::Cycles,
        Event::BranchTaken,
        Event::InstrCacheMiss,
        Event::BranchMiss,
        Event::DataCacheMiss,
    ];

    #[inline]
    pub const fn counter(self) -> Counter {
        match self {
            Event::Cycles => Counter::Cycle,
            Event::Instructions => Counter::Instret,
            Event::InstrCacheMiss => Counter::Hpm(Slot::Hpm3),
            Event::BranchTaken => Counter::Hpm(Slot::Hpm4),
            Event::BranchMiss => Counter::Hpm(Slot::Hpm5),
            Event::DataCacheMiss => Counter::Hpm(Slot::Hpm6),
        }
    }

    /// Text following the count on the report line.
    #[inline]
    pub const fn label(self) -> &'static str {
        match self {
            Event::Cycles => "cycles executed",
            Event::Instructions => "instructions executed",
            Event::InstrCacheMiss => "instruction cache-misses",
            Event::BranchMiss => "branch-misses",
            Event::BranchTaken => "branches",
            Event::DataCacheMiss => "data cache-misses",
        }
    }

    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            Event::Cycles => "cycles",
            Event::Instructions => "instructions",
            Event::InstrCacheMiss => "instruction-cache-misses",
            Event::BranchMiss => "branch-misses",
            Event::BranchTaken => "branches",
            Event::DataCacheMiss => "data-cache-misses",
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
