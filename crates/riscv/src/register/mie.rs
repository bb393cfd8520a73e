//! mie register

use bitflags::bitflags;

bitflags! {
    /// Machine interrupt-enable bits
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct Mie: usize {
        /// Supervisor software interrupt
        const SSIE = 1 << 1;
        /// Machine software interrupt
        const MSIE = 1 << 3;
        /// Supervisor timer interrupt
        const STIE = 1 << 5;
        /// Machine timer interrupt
        const MTIE = 1 << 7;
        /// Supervisor external interrupt
        const SEIE = 1 << 9;
        /// Machine external interrupt
        const MEIE = 1 << 11;
    }
}

write_csr!(0x304);

/// Writes the CSR, replacing every enable bit.
#[inline]
pub unsafe fn write(mie: Mie) {
    unsafe { _write(mie.bits()) }
}

#[cfg(test)]
mod test {
    use super::Mie;

    #[test]
    fn test_msip_bit() {
        // MIP_MSIP
        assert_eq!(Mie::MSIE.bits(), 0x8);
        let mie = Mie::from_bits_retain(0x88);
        assert!(mie.contains(Mie::MSIE | Mie::MTIE));
        assert!(!mie.contains(Mie::MEIE));
    }
}
