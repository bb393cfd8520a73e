use bitflags::bitflags;
use console::log;
use riscv::register::mie::Mie;

use crate::{
    access::{Control, CounterAccess, Extension},
    event::SELECTORS,
};

bitflags! {
    /// Steps [`init_counters`] applied.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct Configured: u8 {
        /// `scounteren` opened to U-mode
        const SUPERVISOR_COUNTERS = 1 << 0;
        /// `mcounteren` opened to S-mode
        const MACHINE_COUNTERS = 1 << 1;
        /// `mhpmevent3..=6` bound to the monitored events
        const EVENT_SELECTORS = 1 << 2;
        /// machine software interrupt enabled in `mie`
        const SOFTWARE_INTERRUPT = 1 << 3;
    }
}

/// Enables the counters and binds the generic counters to their events.
///
/// Every write stores a fixed value, so calling this again leaves the
/// registers as they were. A step whose extension is missing is skipped and
/// logged; nothing here fails.
///
/// # Safety
///
/// Overwrites hart-wide control registers, including `mie`. Must run in
/// M-mode before the first snapshot.
pub unsafe fn init_counters<A: CounterAccess + ?Sized>(hart: &mut A) -> Configured {
    let mut done = Configured::empty();

    if hart.supports_extension(Extension::Supervisor) {
        unsafe { hart.write_control(Control::Scounteren, usize::MAX) };
        done |= Configured::SUPERVISOR_COUNTERS;
        log::debug!("scounteren: all counters enabled");
    } else {
        log::info!("no S extension, skipping scounteren");
    }

    if !hart.supports_extension(Extension::User) {
        log::info!("no U extension, skipping mcounteren, event selectors and mie");
        return done;
    }

    unsafe { hart.write_control(Control::Mcounteren, usize::MAX) };
    done |= Configured::MACHINE_COUNTERS;
    log::debug!("mcounteren: all counters enabled");

    for (slot, event) in SELECTORS {
        unsafe { hart.write_control(Control::Mhpmevent(slot), event) };
        log::debug!("mhpmevent{}: {event:#x}", slot.index());
    }
    done |= Configured::EVENT_SELECTORS;

    unsafe { hart.write_control(Control::Mie, Mie::MSIE.bits()) };
    done |= Configured::SOFTWARE_INTERRUPT;
    log::debug!("mie: machine software interrupt enabled");

    done
}
