macro_rules! read_csr {
    ($csr_number:literal) => {
        /// Reads the CSR
        #[inline]
        unsafe fn _read() -> usize {
            match () {
                #[cfg(any(target_arch = "riscv32", target_arch = "riscv64"))]
                () => {
                    let r: usize;
                    unsafe {
                        core::arch::asm!(concat!("csrrs {0}, ", stringify!($csr_number), ", x0"), out(reg) r);
                    }
                    r
                }

                #[cfg(not(any(target_arch = "riscv32", target_arch = "riscv64")))]
                () => unimplemented!(),
            }
        }
    };
}

macro_rules! read_csr_as_usize {
    ($csr_number:literal) => {
        read_csr!($csr_number);

        /// Reads the CSR
        #[inline]
        pub fn read() -> usize {
            unsafe { _read() }
        }
    };
}

/// A 64-bit counter split into `$lo` and, on RV32, the `$hi` half.
macro_rules! read_counter {
    ($lo:literal, $hi:literal) => {
        read_csr_as_usize!($lo);

        #[cfg(target_arch = "riscv32")]
        #[inline]
        unsafe fn _read_hi() -> usize {
            let r: usize;
            unsafe {
                core::arch::asm!(concat!("csrrs {0}, ", stringify!($hi), ", x0"), out(reg) r);
            }
            r
        }

        /// Reads the full 64-bit counter value
        #[cfg(target_arch = "riscv32")]
        #[inline]
        pub fn read64() -> u64 {
            loop {
                let hi = unsafe { _read_hi() };
                let lo = unsafe { _read() };
                if hi == unsafe { _read_hi() } {
                    break ((hi as u64) << 32) | lo as u64;
                }
            }
        }

        /// Reads the full 64-bit counter value
        #[cfg(not(target_arch = "riscv32"))]
        #[inline]
        pub fn read64() -> u64 {
            read() as u64
        }
    };
}

macro_rules! write_csr {
    ($csr_number:literal) => {
        /// Writes the CSR
        #[inline]
        #[allow(unused_variables)]
        unsafe fn _write(bits: usize) {
            match () {
                #[cfg(any(target_arch = "riscv32", target_arch = "riscv64"))]
                () => unsafe {
                    core::arch::asm!(concat!("csrrw x0, ", stringify!($csr_number), ", {0}"), in(reg) bits);
                },

                #[cfg(not(any(target_arch = "riscv32", target_arch = "riscv64")))]
                () => unimplemented!(),
            }
        }
    };
}

macro_rules! write_csr_as_usize {
    ($csr_number:literal) => {
        write_csr!($csr_number);

        /// Writes the CSR
        #[inline]
        pub unsafe fn write(bits: usize) {
            unsafe { _write(bits) }
        }
    };
}
