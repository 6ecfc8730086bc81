//! Test status line.

use core::fmt;

/// Outcome printed once the countdown is over.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    Pass,
    Fail,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Pass => f.write_str("PASS"),
            Status::Fail => f.write_str("FAIL"),
        }
    }
}

/// Write the status line, on a line of its own.
#[inline]
pub fn write_status<W: fmt::Write + ?Sized>(out: &mut W, status: Status) -> fmt::Result {
    write!(out, "\r\nStatus: {}\r\n", status)
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use std::string::String;

    #[test]
    fn pass_line() {
        let mut out = String::new();
        write_status(&mut out, Status::Pass).unwrap();
        assert_eq!(out, "\r\nStatus: PASS\r\n");
    }

    #[test]
    fn fail_line() {
        let mut out = String::new();
        write_status(&mut out, Status::Fail).unwrap();
        assert_eq!(out, "\r\nStatus: FAIL\r\n");
    }
}
