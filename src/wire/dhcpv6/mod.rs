// See https://datatracker.ietf.org/doc/html/rfc8415 for the DHCPv6 specification.

use byteorder::{ByteOrder, NetworkEndian};
use core::fmt;

use super::{Error, Result};

mod ia;
mod option;
mod status_code;

pub use self::ia::{extract_inner, find_ia_option, IaDescriptor, IaInner, IaType, InvalidSize};
pub use self::option::{find_option, parse_options, Dhcpv6Option, Options};
pub use self::status_code::{StatusCode, StatusCodeOption};

/// Option code of the Identity Association for Non-temporary Addresses.
pub const OPT_IA_NA: u16 = 3;
/// Option code of the Identity Association for Temporary Addresses.
pub const OPT_IA_TA: u16 = 4;
/// Option code of the Status Code option.
pub const OPT_STATUS_CODE: u16 = 13;

enum_with_unknown! {
    /// The possible message types of a DHCPv6 packet.
    pub enum MessageType(u8) {
        Solicit = 1,
        Advertise = 2,
        Request = 3,
        Confirm = 4,
        Renew = 5,
        Rebind = 6,
        Reply = 7,
        Release = 8,
        Decline = 9,
        Reconfigure = 10,
        InformationRequest = 11,
        RelayForw = 12,
        RelayRepl = 13,
    }
}

impl fmt::Display for MessageType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Self::Solicit => write!(f, "solicit"),
            Self::Advertise => write!(f, "advertise"),
            Self::Request => write!(f, "request"),
            Self::Confirm => write!(f, "confirm"),
            Self::Renew => write!(f, "renew"),
            Self::Rebind => write!(f, "rebind"),
            Self::Reply => write!(f, "reply"),
            Self::Release => write!(f, "release"),
            Self::Decline => write!(f, "decline"),
            Self::Reconfigure => write!(f, "reconfigure"),
            Self::InformationRequest => write!(f, "information-request"),
            Self::RelayForw => write!(f, "relay-forw"),
            Self::RelayRepl => write!(f, "relay-repl"),
            Self::Unknown(a) => write!(f, "unknown({a})"),
        }
    }
}

pub(crate) mod field {
    #![allow(non_snake_case)]

    use crate::wire::field::*;

    // Client/server message header, RFC 8415 section 8.
    //
    //     0                   1                   2                   3
    //     0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
    //    +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
    //    |    msg-type   |               transaction-id                  |
    //    +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
    //    .                            options                            .
    //    +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
    pub const MTYPE: usize = 0;
    pub const XID: Field = 1..4;
    pub const OPTIONS: Rest = 4..;

    // Option header, relative to the first byte of the option.
    //
    //     0                   1                   2                   3
    //     0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
    //    +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
    //    |          option-code          |           option-len          |
    //    +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
    //    |                          option-data                          |
    //    |                      (option-len octets)                      |
    //    +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
    pub const OPT_CODE: Field = 0..2;
    pub const OPT_LEN: Field = 2..4;
    pub const OPT_DATA: Rest = 4..;
    pub const OPT_HEADER_LEN: usize = OPT_DATA.start;

    // IA_NA and IA_TA payloads, relative to the first byte of option-data.
    //
    //    +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
    //    |                        IAID (4 octets)                        |
    //    +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
    //    |                        T1 (IA_NA only)                        |
    //    +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
    //    |                        T2 (IA_NA only)                        |
    //    +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
    //    .                     IA_NA- / IA_TA-options                    .
    //    +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
    //
    // An IA_NA option-len is 12 + length of IA_NA-options, an IA_TA
    // option-len is 4 + length of IA_TA-options.
    pub const IA_IAID: Field = 0..4;
    pub const IA_NA_T1: Field = IA_IAID.end..IA_IAID.end + 4;
    pub const IA_NA_T2: Field = IA_NA_T1.end..IA_NA_T1.end + 4;
    pub const IA_NA_OPTIONS: Rest = IA_NA_T2.end..;
    pub const IA_TA_OPTIONS: Rest = IA_IAID.end..;

    // Status Code payload, relative to the first byte of option-data.
    //
    //    +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
    //    |          status-code          |                               |
    //    +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+                               |
    //    .                        status-message                         .
    //    +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
    //
    // option-len is 2 + length of status-message. The message is UTF-8
    // and not null-terminated.
    pub const STATUS_CODE: Field = 0..2;
    pub const STATUS_MESSAGE: Rest = STATUS_CODE.end..;
}

/// A read-only wrapper around a DHCPv6 client/server message buffer.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Packet<T: AsRef<[u8]>> {
    buffer: T,
}

impl<T: AsRef<[u8]>> Packet<T> {
    /// Imbue a raw octet buffer with DHCPv6 packet structure.
    pub const fn new_unchecked(buffer: T) -> Packet<T> {
        Packet { buffer }
    }

    /// Shorthand for a combination of [new_unchecked] and [check_len].
    ///
    /// [new_unchecked]: #method.new_unchecked
    /// [check_len]: #method.check_len
    pub fn new_checked(buffer: T) -> Result<Packet<T>> {
        let packet = Self::new_unchecked(buffer);
        packet.check_len()?;
        Ok(packet)
    }

    /// Ensure that no accessor method will panic if called.
    /// Returns `Err(Error)` if the buffer is shorter than the message header.
    pub fn check_len(&self) -> Result<()> {
        let len = self.buffer.as_ref().len();
        if len < field::OPTIONS.start {
            Err(Error)
        } else {
            Ok(())
        }
    }

    /// Consume the packet, returning the underlying buffer.
    pub fn into_inner(self) -> T {
        self.buffer
    }

    /// Returns the message type.
    pub fn message_type(&self) -> MessageType {
        MessageType::from(self.buffer.as_ref()[field::MTYPE])
    }

    /// Returns the 24-bit transaction ID.
    pub fn transaction_id(&self) -> u32 {
        let field = &self.buffer.as_ref()[field::XID];
        NetworkEndian::read_u24(field)
    }

    /// Return the option area, i.e. everything after the message header.
    #[inline]
    pub fn options(&self) -> &[u8] {
        &self.buffer.as_ref()[field::OPTIONS]
    }
}

impl<T: AsRef<[u8]>> fmt::Display for Packet<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "DHCPv6 msg-type={} trans-id={:#08x} options-len={}",
            self.message_type(),
            self.transaction_id(),
            self.options().len()
        )
    }
}

#[cfg(test)]
mod test {
    use super::*;

    static REPLY_BYTES: &[u8] = &[
        0x07, 0x12, 0x34, 0x56, // reply, xid
        0x00, 0x08, 0x00, 0x02, 0x00, 0x00, // elapsed time
    ];

    #[test]
    fn test_deconstruct() {
        let packet = Packet::new_checked(REPLY_BYTES).unwrap();
        assert_eq!(packet.message_type(), MessageType::Reply);
        assert_eq!(packet.transaction_id(), 0x12_3456);
        assert_eq!(packet.options(), &REPLY_BYTES[4..]);
    }

    #[test]
    fn test_header_only() {
        let packet = Packet::new_checked(&REPLY_BYTES[..4]).unwrap();
        assert!(packet.options().is_empty());
    }

    #[test]
    fn test_truncated_header() {
        assert_eq!(Packet::new_checked(&REPLY_BYTES[..3]), Err(Error));
        assert_eq!(Packet::new_checked(&[][..]), Err(Error));
    }

    #[test]
    fn test_unknown_message_type() {
        let packet = Packet::new_unchecked([0xfe, 0, 0, 1]);
        assert_eq!(packet.message_type(), MessageType::Unknown(0xfe));
        assert_eq!(u8::from(packet.message_type()), 0xfe);
    }

    #[test]
    fn test_display() {
        let packet = Packet::new_unchecked(REPLY_BYTES);
        assert_eq!(
            format!("{packet}"),
            "DHCPv6 msg-type=reply trans-id=0x123456 options-len=6"
        );
    }
}
