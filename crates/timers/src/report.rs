use core::fmt::{self, Write};

use console::log;
use heapless::String;

use crate::{event::Event, timer::Timer};

pub const REPORT_HEADER: &str = "# ---------- Timing data for benchmark: ---------- #";
pub const REPORT_FOOTER: &str = "# ------------------------------------------------- #";

/// Fits eight lines with 20-digit counts.
const REPORT_CAPACITY: usize = 512;

/// Activity measured between the two snapshots of a [`Timer`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Deltas {
    pub cycles: u64,
    pub instret: u64,
    pub icache_miss: u64,
    pub branch_miss: u64,
    pub branch_taken: u64,
    pub dcache_miss: u64,
}

impl Deltas {
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

/// The textual timing report.
///
/// ```text
/// # ---------- Timing data for benchmark: ---------- #
/// 1000        cycles executed               #
/// ...
/// # ------------------------------------------------- #
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimingReport {
    deltas: Deltas,
}

impl TimingReport {
    pub fn new(deltas: Deltas) -> Self {
        Self { deltas }
    }

    pub fn deltas(&self) -> Deltas {
        self.deltas
    }
}

impl fmt::Display for TimingReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{REPORT_HEADER}")?;
        for event in Event::ALL {
            writeln!(f, "{}        {:<30}#", self.deltas.get(event), event.label())?;
        }
        writeln!(f, "{REPORT_FOOTER}")
    }
}

/// Prints the deltas of `t` to the console.
///
/// A counter that went backwards is reported with its wrapped value and a
/// warning is logged for it.
pub fn print_timing_data(t: Timer) {
    for event in Event::ALL {
        if let Err(e) = t.checked_delta(event) {
            log::warn!("{e}, reporting the wrapped value");
        }
    }

    let report = t.report();
    let mut buf = String::<REPORT_CAPACITY>::new();
    // a single write keeps the report in one piece on the console
    match write!(buf, "{report}") {
        Ok(()) => {
            console::print!("{}", buf.as_str());
        }
        Err(_) => {
            console::print!("{report}");
        }
    }
}

#[cfg(test)]
mod test {
    extern crate std;

    use std::string::ToString;

    use console::log_print::{LEVEL, LogLevel};

    use super::{REPORT_FOOTER, REPORT_HEADER, print_timing_data};
    use crate::{
        capture,
        event::Event,
        timer::{Snapshot, Timer},
    };

    fn sample() -> Timer {
        Timer {
            start: Snapshot {
                cycles: 100,
                time: 0,
                instret: 50,
                icache_miss: 3,
                branch_taken: 10,
                branch_miss: 2,
                dcache_miss: 1,
            },
            end: Snapshot {
                cycles: 1100,
                time: 0,
                instret: 550,
                icache_miss: 8,
                branch_taken: 60,
                branch_miss: 5,
                dcache_miss: 4,
            },
        }
    }

    const SAMPLE_REPORT: &str = "\
# ---------- Timing data for benchmark: ---------- #
1000        cycles executed               #
500        instructions executed         #
5        instruction cache-misses      #
3        branch-misses                 #
50        branches                      #
3        data cache-misses             #
# ------------------------------------------------- #
";

    #[test]
    fn test_report_format() {
        let report = sample().report();
        assert_eq!(report.to_string(), SAMPLE_REPORT);

        let d = report.deltas();
        assert_eq!(
            [d.cycles, d.instret, d.icache_miss, d.branch_miss, d.branch_taken, d.dcache_miss],
            [1000, 500, 5, 3, 50, 3]
        );
    }

    #[test]
    fn test_report_lines() {
        let text = sample().report().to_string();
        let lines: std::vec::Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 8);
        assert_eq!(lines[0], REPORT_HEADER);
        assert_eq!(lines[7], REPORT_FOOTER);
        for (line, event) in lines[1..7].iter().zip(Event::ALL) {
            assert!(line.ends_with('#'));
            assert_eq!(line.matches(event.label()).count(), 1, "{line}");
        }
    }

    #[test]
    fn test_report_wraps_on_underflow() {
        let mut t = sample();
        t.end.cycles = 50;

        let text = t.report().to_string();
        assert!(text.contains("18446744073709551566        cycles executed               #\n"));
        // the other counters are unaffected
        assert!(text.contains("\n500        instructions executed         #\n"));
    }

    #[test]
    fn test_print_timing_data() {
        capture::install();

        print_timing_data(sample());
        let mut t = sample();
        t.start.cycles = 100;
        t.end.cycles = 50;
        print_timing_data(t);

        let out = capture::output();
        assert!(out.contains(SAMPLE_REPORT));
        assert!(out.contains("18446744073709551566        cycles executed               #\n"));
        if LogLevel::Warn <= LEVEL {
            assert!(out.contains("[Warning] "));
            assert!(out.contains("` went backwards: start "));
        }
    }
}
