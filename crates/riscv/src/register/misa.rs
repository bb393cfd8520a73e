//! misa register

use bit_field::BitField;

/// misa register
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Misa {
    bits: usize,
}

impl Misa {
    #[inline]
    pub const fn from_bits(bits: usize) -> Self {
        Self { bits }
    }

    /// Returns true when the "extension" is set.
    ///
    /// `extension` is a letter `A`..=`Z`, case insensitive. Anything else is
    /// never reported as present.
    #[inline]
    pub fn has_extension(&self, extension: char) -> bool {
        match extension_bit(extension) {
            Some(bit) => self.bits.get_bit(bit),
            None => false,
        }
    }

    /// Returns a copy with `extension` marked as present.
    #[inline]
    pub fn with_extension(self, extension: char) -> Self {
        let mut bits = self.bits;
        if let Some(bit) = extension_bit(extension) {
            bits.set_bit(bit, true);
        }
        Self { bits }
    }
}

#[inline]
fn extension_bit(extension: char) -> Option<usize> {
    let letter = extension.to_ascii_uppercase();
    letter
        .is_ascii_uppercase()
        .then(|| (letter as u8 - b'A') as usize)
}

read_csr!(0x301);

/// Reads the CSR
///
/// A zero `misa` means the register is not implemented, so `None` is returned.
#[inline]
pub fn read() -> Option<Misa> {
    match unsafe { _read() } {
        0 => None,
        bits => Some(Misa { bits }),
    }
}

#[cfg(test)]
mod test {
    use super::Misa;

    #[test]
    fn test_has_extension() {
        // rv64imafdcsu
        let misa = Misa::from_bits((2 << 62) | 0x14112d);
        for ext in ['I', 'M', 'A', 'F', 'D', 'C', 'S', 'U'] {
            assert!(misa.has_extension(ext), "{ext}");
        }
        assert!(misa.has_extension('s'));
        assert!(!misa.has_extension('H'));
        assert!(!misa.has_extension('V'));
    }

    #[test]
    fn test_non_letter() {
        let misa = Misa::from_bits(usize::MAX);
        assert!(!misa.has_extension('1'));
        assert!(!misa.has_extension('@'));
    }

    #[test]
    fn test_with_extension() {
        let misa = Misa::from_bits(0).with_extension('U').with_extension('x');
        assert!(misa.has_extension('U'));
        assert!(misa.has_extension('X'));
        assert!(!misa.has_extension('S'));
        assert_eq!(misa, Misa::from_bits((1 << 20) | (1 << 23)));
        // non-letters are ignored
        assert_eq!(misa.with_extension('7'), misa);
    }
}
