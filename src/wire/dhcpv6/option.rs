use byteorder::{ByteOrder, NetworkEndian};
use core::iter::FusedIterator;

use super::field;

/// A view of a single DHCPv6 option record.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Dhcpv6Option<'a> {
    pub kind: u16,
    pub data: &'a [u8],
}

impl<'a> Dhcpv6Option<'a> {
    /// Return the number of octets the record occupies, header included.
    pub fn buffer_len(&self) -> usize {
        field::OPT_HEADER_LEN + self.data.len()
    }
}

/// An iterator over the option records of an option area.
///
/// Yields the offset of each record together with a view of it. Iteration
/// stops for good at the first record whose header or declared payload does
/// not fit in what is left of the area.
#[derive(Debug, Clone)]
pub struct Options<'a> {
    buffer: &'a [u8],
    cursor: usize,
}

impl<'a> Options<'a> {
    pub fn new(buffer: &'a [u8]) -> Options<'a> {
        Options { buffer, cursor: 0 }
    }

    fn exhaust(&mut self) -> Option<(usize, Dhcpv6Option<'a>)> {
        self.cursor = self.buffer.len();
        None
    }
}

impl<'a> Iterator for Options<'a> {
    type Item = (usize, Dhcpv6Option<'a>);

    fn next(&mut self) -> Option<Self::Item> {
        let offset = self.cursor;
        let rest = self.buffer.get(offset..)?;
        if rest.len() < field::OPT_HEADER_LEN {
            #[cfg(feature = "verbose")]
            {
                if !rest.is_empty() {
                    net_trace!("DHCPv6 option header truncated at offset {}", offset);
                }
            }
            return self.exhaust();
        }

        let kind = NetworkEndian::read_u16(&rest[field::OPT_CODE]);
        let len = NetworkEndian::read_u16(&rest[field::OPT_LEN]) as usize;

        // The record end must be within the area before the payload is touched.
        let end = field::OPT_HEADER_LEN + len;
        if end > rest.len() {
            #[cfg(feature = "verbose")]
            net_trace!(
                "DHCPv6 option {} at offset {} overruns the area by {} octets",
                kind,
                offset,
                end - rest.len()
            );
            return self.exhaust();
        }

        self.cursor = offset + end;
        Some((
            offset,
            Dhcpv6Option {
                kind,
                data: &rest[field::OPT_HEADER_LEN..end],
            },
        ))
    }
}

impl<'a> FusedIterator for Options<'a> {}

/// Return an iterator over the options.
#[inline]
pub fn parse_options(buf: &[u8]) -> Options<'_> {
    Options::new(buf)
}

/// Return the offset of the first option of type `kind` in `buffer`.
///
/// Returns `None` when no complete record of that type precedes the end of
/// the buffer or the first malformed record.
pub fn find_option(buffer: &[u8], kind: u16) -> Option<usize> {
    parse_options(buffer)
        .find(|(_, option)| option.kind == kind)
        .map(|(offset, _)| offset)
}
