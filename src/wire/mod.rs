/*! Low-level packet access.

The `wire` module deals with the DHCPv6 packet *representation*. It provides
read-only views over caller-owned buffers that never index outside the
buffer they were given, whatever the declared lengths inside it say.

The views come in two levels:

 * The `Packet` family of structures, e.g. [Dhcpv6Packet] or
   [StatusCodeOption], wrap a buffer and expose typed accessors for the
   fields at fixed offsets. `new_checked` verifies up front that every
   accessor is in bounds.
 * The scanning functions, e.g. [find_option] or [find_ia_option], walk a
   sequence of option records and report where a record starts. A record is
   only ever reported when its whole declared footprint fits in the buffer.

Offsets returned by the scanners are relative to the slice passed in, so
they can be used to re-slice the caller's buffer directly:

```rust
use dhcpv6_status::wire::{find_option, StatusCodeOption, DHCPV6_OPT_STATUS_CODE};

let options = [
    0x00, 0x08, 0x00, 0x02, 0x00, 0x00, // elapsed time
    0x00, 0x0d, 0x00, 0x02, 0x00, 0x02, // status code: no-addrs-avail
];
let offset = find_option(&options, DHCPV6_OPT_STATUS_CODE).unwrap();
let status = StatusCodeOption::new_checked(&options[offset..]).unwrap();
assert_eq!(u16::from(status.status_code()), 2);
```
*/

use core::fmt;

mod field {
    pub type Field = ::core::ops::Range<usize>;
    pub type Rest = ::core::ops::RangeFrom<usize>;
}

pub mod dhcpv6;

pub use self::dhcpv6::{
    extract_inner, find_ia_option, find_option, parse_options, Dhcpv6Option, IaDescriptor,
    IaInner, IaType, InvalidSize, MessageType as Dhcpv6MessageType, Options as Dhcpv6Options,
    Packet as Dhcpv6Packet, StatusCode as Dhcpv6StatusCode, StatusCodeOption,
    OPT_IA_NA as DHCPV6_OPT_IA_NA, OPT_IA_TA as DHCPV6_OPT_IA_TA,
    OPT_STATUS_CODE as DHCPV6_OPT_STATUS_CODE,
};

/// Parsing a packet failed.
///
/// Either it is malformed, or it is not supported by this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Error;

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "wire::Error")
    }
}

pub type Result<T> = core::result::Result<T, Error>;
