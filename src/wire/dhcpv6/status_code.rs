use byteorder::{ByteOrder, NetworkEndian};
use core::fmt;

use super::{field, Error, Result};

enum_with_unknown! {
    /// Status codes carried by the Status Code option, RFC 8415 section 21.13.
    pub enum StatusCode(u16) {
        Success = 0,
        UnspecFail = 1,
        NoAddrsAvail = 2,
        NoBinding = 3,
        NotOnLink = 4,
        UseMulticast = 5,
        NoPrefixAvail = 6,
    }
}

impl StatusCode {
    /// Query whether the code reports success. Every other code, known or
    /// not, is a failure.
    pub fn is_success(&self) -> bool {
        *self == StatusCode::Success
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Self::Success => write!(f, "success"),
            Self::UnspecFail => write!(f, "unspec-fail"),
            Self::NoAddrsAvail => write!(f, "no-addrs-avail"),
            Self::NoBinding => write!(f, "no-binding"),
            Self::NotOnLink => write!(f, "not-on-link"),
            Self::UseMulticast => write!(f, "use-multicast"),
            Self::NoPrefixAvail => write!(f, "no-prefix-avail"),
            Self::Unknown(a) => write!(f, "unknown({a})"),
        }
    }
}

/// A read-only wrapper around a Status Code option.
///
/// The buffer starts at the option header. It may extend past the option;
/// accessors only look at the octets covered by option-len.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StatusCodeOption<T: AsRef<[u8]>> {
    buffer: T,
}

impl<T: AsRef<[u8]>> StatusCodeOption<T> {
    /// Imbue a raw octet buffer with Status Code option structure.
    pub const fn new_unchecked(buffer: T) -> StatusCodeOption<T> {
        StatusCodeOption { buffer }
    }

    /// Shorthand for a combination of [new_unchecked] and [check_len].
    ///
    /// [new_unchecked]: #method.new_unchecked
    /// [check_len]: #method.check_len
    pub fn new_checked(buffer: T) -> Result<StatusCodeOption<T>> {
        let option = Self::new_unchecked(buffer);
        option.check_len()?;
        Ok(option)
    }

    /// Ensure that no accessor method will panic if called.
    /// Returns `Err(Error)` if the header is truncated, if option-len is too
    /// small to hold a status code, or if option-len runs past the buffer.
    pub fn check_len(&self) -> Result<()> {
        let data = self.buffer.as_ref();
        if data.len() < field::OPT_HEADER_LEN {
            return Err(Error);
        }
        let len = NetworkEndian::read_u16(&data[field::OPT_LEN]) as usize;
        if len < field::STATUS_CODE.end || field::OPT_HEADER_LEN + len > data.len() {
            Err(Error)
        } else {
            Ok(())
        }
    }

    /// Consume the option, returning the underlying buffer.
    pub fn into_inner(self) -> T {
        self.buffer
    }

    /// Return the option code field.
    pub fn kind(&self) -> u16 {
        NetworkEndian::read_u16(&self.buffer.as_ref()[field::OPT_CODE])
    }

    fn payload(&self) -> &[u8] {
        let data = self.buffer.as_ref();
        let len = NetworkEndian::read_u16(&data[field::OPT_LEN]) as usize;
        &data[field::OPT_HEADER_LEN..field::OPT_HEADER_LEN + len]
    }

    /// Return the status code field.
    ///
    /// # Panics
    /// This function may panic if the option was not checked with
    /// [check_len](#method.check_len).
    pub fn status_code(&self) -> StatusCode {
        StatusCode::from(NetworkEndian::read_u16(&self.payload()[field::STATUS_CODE]))
    }

    /// Return the raw status message. It is meant to be UTF-8 but is not
    /// validated.
    ///
    /// # Panics
    /// This function may panic if the option was not checked with
    /// [check_len](#method.check_len).
    pub fn message(&self) -> &[u8] {
        &self.payload()[field::STATUS_MESSAGE]
    }
}

impl<T: AsRef<[u8]>> fmt::Display for StatusCodeOption<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match core::str::from_utf8(self.message()) {
            Ok(msg) => write!(f, "{}(msg='{}')", self.status_code(), msg),
            Err(_) => write!(f, "{}(msg={:X?})", self.status_code(), self.message()),
        }
    }
}

#[cfg(test)]
mod test {
    use super::super::OPT_STATUS_CODE;
    use super::*;

    static NO_ADDRS_BYTES: &[u8] = &[
        0x00, 0x0d, 0x00, 0x07, // status code, len 7
        0x00, 0x02, // no-addrs-avail
        0x6e, 0x6f, 0x6e, 0x65, 0x21, // "none!"
        0x00, 0x08, 0x00, 0x00, // trailing elapsed time, not part of the option
    ];

    #[test]
    fn test_deconstruct() {
        let option = StatusCodeOption::new_checked(NO_ADDRS_BYTES).unwrap();
        assert_eq!(option.kind(), OPT_STATUS_CODE);
        assert_eq!(option.status_code(), StatusCode::NoAddrsAvail);
        assert!(!option.status_code().is_success());
        assert_eq!(option.message(), b"none!");
    }

    #[test]
    fn test_code_only() {
        let option = StatusCodeOption::new_checked(&[0x00, 0x0d, 0x00, 0x02, 0x00, 0x00][..]).unwrap();
        assert!(option.status_code().is_success());
        assert!(option.message().is_empty());
    }

    #[test]
    fn test_unknown_code() {
        let option = StatusCodeOption::new_unchecked(&[0x00, 0x0d, 0x00, 0x02, 0x01, 0x00][..]);
        assert_eq!(option.status_code(), StatusCode::Unknown(256));
        assert!(!option.status_code().is_success());
    }

    #[test]
    fn test_check_len() {
        // Truncated header.
        assert_eq!(StatusCodeOption::new_checked(&NO_ADDRS_BYTES[..3]), Err(Error));
        // Declared payload runs past the buffer.
        assert_eq!(StatusCodeOption::new_checked(&NO_ADDRS_BYTES[..10]), Err(Error));
        // Declared payload too short for a status code.
        assert_eq!(
            StatusCodeOption::new_checked(&[0x00, 0x0d, 0x00, 0x01, 0x00, 0x00][..]),
            Err(Error)
        );
    }

    #[test]
    fn test_display() {
        let option = StatusCodeOption::new_unchecked(NO_ADDRS_BYTES);
        assert_eq!(format!("{option}"), "no-addrs-avail(msg='none!')");
        assert_eq!(format!("{}", StatusCode::Unknown(9)), "unknown(9)");
    }
}
