/*! Reply status evaluation.

A DHCPv6 server reports the outcome of a request in Status Code options.
RFC 8415 allows one in the message options, applying to the whole message,
and one inside each IA, applying to that IA only. A message without any
Status Code option is a success.

[evaluate_status] checks both places for the IA the client is negotiating:
a failure at message level wins, then the IA selected by the descriptor is
located and its nested options are checked. An IA that is absent is not
judged here; deciding what a missing IA means is up to the caller.
*/

use core::fmt;

use crate::wire::dhcpv6::{
    extract_inner, find_ia_option, find_option, IaDescriptor, InvalidSize, Packet, StatusCode,
    StatusCodeOption, OPT_STATUS_CODE,
};

/// The reply must not be accepted.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// An IA option or a Status Code option is too short for its fixed
    /// fields, or claims more octets than its enclosing area holds.
    InvalidSize,
    /// A Status Code option carries a code other than success.
    Status {
        code: StatusCode,
        /// Offset of the Status Code option from the start of the option
        /// area that was evaluated.
        offset: usize,
    },
}

impl From<InvalidSize> for Error {
    fn from(_: InvalidSize) -> Self {
        Error::InvalidSize
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::InvalidSize => write!(f, "invalid option size"),
            Error::Status { code, offset } => {
                write!(f, "status {code} in option at offset {offset}")
            }
        }
    }
}

pub type Result<T> = core::result::Result<T, Error>;

/// Decide whether the option area of a reply reports a failure for the IA
/// selected by `descriptor`.
///
/// `options` is the option area of the message, i.e. everything after the
/// 4-octet message header. Returns `Ok(())` if neither the message options
/// nor the options nested in the selected IA carry a failing status code,
/// including when the selected IA is not present at all.
pub fn evaluate_status(options: &[u8], descriptor: &IaDescriptor) -> Result<()> {
    if let Some(offset) = find_option(options, OPT_STATUS_CODE) {
        check_status(&options[offset..], offset)?;
    }

    let Some(ia_offset) = find_ia_option(options, descriptor) else {
        net_trace!("DHCPv6 reply has no {}", descriptor);
        return Ok(());
    };

    // The IA is bounded by the rest of the area, not by its own option-len.
    let ia = &options[ia_offset..];
    let inner = extract_inner(descriptor.ia_type, ia).map_err(|err| {
        net_debug!("DHCPv6 {} at offset {}: {}", descriptor, ia_offset, err);
        err
    })?;

    let nested = &ia[inner.range()];
    if let Some(offset) = find_option(nested, OPT_STATUS_CODE) {
        let offset_in_ia = inner.offset + offset;
        check_status(&ia[offset_in_ia..], ia_offset + offset_in_ia)?;
    }

    Ok(())
}

/// Decide whether a whole DHCPv6 message reports a failure for the IA
/// selected by `descriptor`. See [evaluate_status].
pub fn evaluate_packet<T: AsRef<[u8]>>(packet: &Packet<T>, descriptor: &IaDescriptor) -> Result<()> {
    evaluate_status(packet.options(), descriptor)
}

fn check_status(option: &[u8], offset: usize) -> Result<()> {
    let option = StatusCodeOption::new_checked(option).map_err(|_| {
        net_debug!("DHCPv6 status code option at offset {} too short", offset);
        Error::InvalidSize
    })?;

    let code = option.status_code();
    if code.is_success() {
        Ok(())
    } else {
        net_debug!("DHCPv6 status {} at offset {}", option, offset);
        Err(Error::Status { code, offset })
    }
}
