//! Hardware performance counter timers for RISC-V harts.
//!
//! ```ignore
//! use timers::{Hart, Timer, init_counters, print_timing_data, update_start_timers, update_stop_timers};
//!
//! let mut hart = Hart;
//! unsafe { init_counters(&mut hart) };
//!
//! let t = update_start_timers(&hart, Timer::new());
//! benchmark();
//! let t = update_stop_timers(&hart, t);
//! print_timing_data(t);
//! ```

#![no_std]

mod access;
#[cfg(test)]
mod capture;
mod error;
mod event;
mod hart;
mod init;
mod report;
mod sim;
mod timer;

pub use access::{Control, Counter, CounterAccess, Extension, Slot};
pub use error::Error;
pub use event::{
    BRANCH_MISS_EVENT, BRANCH_TAKEN_EVENT, DCACHE_MISS_EVENT, Event, ICACHE_MISS_EVENT, SELECTORS,
};
pub use hart::Hart;
pub use init::{Configured, init_counters};
pub use report::{Deltas, REPORT_FOOTER, REPORT_HEADER, TimingReport, print_timing_data};
pub use sim::SimulatedHart;
pub use timer::{Snapshot, Timer, update_start_timers, update_stop_timers};

#[cfg(test)]
mod test {
    use crate::{
        Configured, Counter, SimulatedHart, Slot, Timer, init_counters, update_start_timers,
        update_stop_timers,
    };

    #[test]
    fn test_measure_region() {
        let mut hart = SimulatedHart::default().with_read_cost(2);
        assert_eq!(unsafe { init_counters(&mut hart) }, Configured::all());

        let t = update_start_timers(&hart, Timer::new());
        hart.advance(Counter::Hpm(Slot::Hpm4), 7);
        hart.advance(Counter::Hpm(Slot::Hpm6), 1);
        let t = update_stop_timers(&hart, t);

        let d = t.checked_deltas().unwrap();
        assert_eq!(d.branch_taken, 7);
        assert_eq!(d.dcache_miss, 1);
        assert_eq!(d.cycles, 12);
        assert_eq!(d.instret, 6);
        assert_eq!(t.report().deltas(), d);
    }
}
