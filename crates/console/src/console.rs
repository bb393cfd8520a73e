// Based on rcore-console.
use core::fmt::{self, Write};
use spin::Once;

/// Somewhere to put text.
pub trait Console: Sync {
    /// Put a single byte.
    fn put_char(&self, c: u8);

    /// Put a whole string.
    ///
    /// Override this when the sink takes a lock, so it is taken once per string.
    #[inline]
    fn put_str(&self, s: &str) {
        for c in s.bytes() {
            self.put_char(c);
        }
    }
}

static CONSOLE: Once<&'static dyn Console> = Once::new();

/// Installs the output sink. Only the first call has any effect.
#[inline]
pub fn init_console(console: &'static dyn Console) {
    CONSOLE.call_once(|| console);
}

#[doc(hidden)]
#[inline]
pub fn _print(args: fmt::Arguments) {
    // Printer never reports an error
    let _ = Printer.write_fmt(args);
}

#[doc(hidden)]
#[inline]
pub fn _println(args: fmt::Arguments) {
    let _ = Printer.write_fmt(core::format_args!("{}\n", args));
}

#[doc(hidden)]
#[inline]
pub fn _ln() {
    let _ = Printer.write_str("\n");
}

#[macro_export]
macro_rules! print {
    ($($arg:tt)*) => {
        $crate::_print(core::format_args!($($arg)*));
    }
}

#[macro_export]
macro_rules! println {
    () => ($crate::_ln());
    ($($arg:tt)*) => {{
        $crate::_println(core::format_args!($($arg)*));
    }}
}

struct Printer;

/// Text written before a console is installed is dropped.
impl Write for Printer {
    #[inline]
    fn write_str(&mut self, s: &str) -> Result<(), fmt::Error> {
        if let Some(c) = CONSOLE.get() {
            c.put_str(s);
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::Printer;
    use core::fmt::Write;

    #[test]
    fn test_print_without_console() {
        // nothing installed in this test binary
        assert!(super::CONSOLE.get().is_none());
        assert!(Printer.write_str("dropped").is_ok());
        crate::println!("{} too", "dropped");
    }
}
