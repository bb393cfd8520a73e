use crate::{
    Error,
    access::CounterAccess,
    event::Event,
    report::{Deltas, TimingReport},
};

/// Counter values captured at one instant.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Snapshot {
    pub cycles: u64,
    /// Wall-clock counter. Kept in the record but never captured.
    pub time: u64,
    pub instret: u64,
    pub icache_miss: u64,
    pub branch_taken: u64,
    pub branch_miss: u64,
    pub dcache_miss: u64,
}

impl Snapshot {
    pub const ZERO: Snapshot = Snapshot {
        cycles: 0,
        time: 0,
        instret: 0,
        icache_miss: 0,
        branch_taken: 0,
        branch_miss: 0,
        dcache_miss: 0,
    };

    /// Reads the six monitored counters back to back, in
    /// [`Event::SNAPSHOT_ORDER`]. `time` is left as it was.
    #[inline(always)]
    pub fn record<A: CounterAccess + ?Sized>(&mut self, hart: &A) {
        self.instret = hart.read_counter(Event::Instructions.counter());
        self.cycles = hart.read_counter(Event::Cycles.counter());
        self.branch_taken = hart.read_counter(Event::BranchTaken.counter());
        self.icache_miss = hart.read_counter(Event::InstrCacheMiss.counter());
        self.branch_miss = hart.read_counter(Event::BranchMiss.counter());
        self.dcache_miss = hart.read_counter(Event::DataCacheMiss.counter());
    }

    #[inline]
    pub fn get(&self, event: Event) -> u64 {
        match event {
            Event::Cycles => self.cycles,
            Event::Instructions => self.instret,
            Event::InstrCacheMiss => self.icache_miss,
            Event::BranchMiss => self.branch_miss,
            Event::BranchTaken => self.branch_taken,
            Event::DataCacheMiss => self.dcache_miss,
        }
    }
}

/// Paired start and end readings around a measured region.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Timer {
    pub start: Snapshot,
    pub end: Snapshot,
}

impl Timer {
    pub const fn new() -> Self {
        Self {
            start: Snapshot::ZERO,
            end: Snapshot::ZERO,
        }
    }

    /// `end - start`, wrapping when the counter went backwards.
    #[inline]
    pub fn delta(&self, event: Event) -> u64 {
        self.end.get(event).wrapping_sub(self.start.get(event))
    }

    #[inline]
    pub fn checked_delta(&self, event: Event) -> Result<u64, Error> {
        let (start, end) = (self.start.get(event), self.end.get(event));
        end.checked_sub(start)
            .ok_or(Error::Underflow { event, start, end })
    }

    pub fn deltas(&self) -> Deltas {
        Deltas {
            cycles: self.delta(Event::Cycles),
            instret: self.delta(Event::Instructions),
            icache_miss: self.delta(Event::InstrCacheMiss),
            branch_miss: self.delta(Event::BranchMiss),
            branch_taken: self.delta(Event::BranchTaken),
            dcache_miss: self.delta(Event::DataCacheMiss),
        }
    }

    /// Like [`Timer::deltas`], but fails on the first counter, in report
    /// order, that went backwards.
    pub fn checked_deltas(&self) -> Result<Deltas, Error> {
        Ok(Deltas {
            cycles: self.checked_delta(Event::Cycles)?,
            instret: self.checked_delta(Event::Instructions)?,
            icache_miss: self.checked_delta(Event::InstrCacheMiss)?,
            branch_miss: self.checked_delta(Event::BranchMiss)?,
            branch_taken: self.checked_delta(Event::BranchTaken)?,
            dcache_miss: self.checked_delta(Event::DataCacheMiss)?,
        })
    }

    #[inline]
    pub fn report(&self) -> TimingReport {
        TimingReport::new(self.deltas())
    }
}

/// Captures the start half of `t`.
#[inline(always)]
pub fn update_start_timers<A: CounterAccess + ?Sized>(hart: &A, mut t: Timer) -> Timer {
    t.start.record(hart);
    t
}

/// Captures the end half of `t`.
#[inline(always)]
pub fn update_stop_timers<A: CounterAccess + ?Sized>(hart: &A, mut t: Timer) -> Timer {
    t.end.record(hart);
    t
}
