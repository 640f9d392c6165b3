use byteorder::{ByteOrder, NetworkEndian};
use core::fmt;
use core::ops::Range;

use super::option::parse_options;
use super::{field, Error, Result, OPT_IA_NA, OPT_IA_TA};

/// The kind of an Identity Association.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum IaType {
    /// Non-temporary addresses, carried in an IA_NA option.
    Na,
    /// Temporary addresses, carried in an IA_TA option.
    Ta,
}

impl IaType {
    /// Return the option code that carries this kind of IA.
    pub const fn option_code(&self) -> u16 {
        match self {
            IaType::Na => OPT_IA_NA,
            IaType::Ta => OPT_IA_TA,
        }
    }

    /// Return the size of the fixed fields at the start of the option
    /// payload: the IAID, plus T1 and T2 for IA_NA.
    pub const fn fixed_len(&self) -> usize {
        match self {
            IaType::Na => field::IA_NA_OPTIONS.start,
            IaType::Ta => field::IA_TA_OPTIONS.start,
        }
    }

    /// Return the smallest number of octets a well-formed option of this
    /// kind occupies, header included.
    pub const fn min_option_len(&self) -> usize {
        field::OPT_HEADER_LEN + self.fixed_len()
    }
}

impl TryFrom<u16> for IaType {
    type Error = Error;

    fn try_from(value: u16) -> Result<Self> {
        match value {
            OPT_IA_NA => Ok(IaType::Na),
            OPT_IA_TA => Ok(IaType::Ta),
            _ => Err(Error),
        }
    }
}

impl From<IaType> for u16 {
    fn from(value: IaType) -> u16 {
        value.option_code()
    }
}

impl fmt::Display for IaType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            IaType::Na => write!(f, "ia-na"),
            IaType::Ta => write!(f, "ia-ta"),
        }
    }
}

/// Selects one Identity Association among those present in a message.
///
/// Both fields are in host order.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct IaDescriptor {
    pub ia_type: IaType,
    pub iaid: u32,
}

impl IaDescriptor {
    pub const fn new(ia_type: IaType, iaid: u32) -> IaDescriptor {
        IaDescriptor { ia_type, iaid }
    }

    /// Query whether the option starting at `record` is the IA this
    /// descriptor selects.
    ///
    /// `record` starts at the option header and runs to the end of the
    /// enclosing area. The IAID is read from the four octets after the
    /// header even when option-len is smaller, so an undersized IA still
    /// matches and is rejected later by [extract_inner]. An IAID that would
    /// lie past the end of `record` never matches.
    pub fn matches(&self, record: &[u8]) -> bool {
        let kind = match record.get(field::OPT_CODE) {
            Some(kind) => NetworkEndian::read_u16(kind),
            None => return false,
        };
        if kind != self.ia_type.option_code() {
            return false;
        }
        match record.get(field::OPT_HEADER_LEN..).and_then(|data| data.get(field::IA_IAID)) {
            Some(iaid) => NetworkEndian::read_u32(iaid) == self.iaid,
            None => false,
        }
    }
}

impl fmt::Display for IaDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} iaid={:#010x}", self.ia_type, self.iaid)
    }
}

/// Return the offset of the first IA option in `buffer` selected by
/// `descriptor`.
pub fn find_ia_option(buffer: &[u8], descriptor: &IaDescriptor) -> Option<usize> {
    parse_options(buffer)
        .find(|(offset, _)| descriptor.matches(&buffer[*offset..]))
        .map(|(offset, _)| offset)
}

/// An IA option was too short to hold its fixed fields, or its declared
/// length disagreed with the octets available.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InvalidSize;

#[cfg(feature = "std")]
impl std::error::Error for InvalidSize {}

impl fmt::Display for InvalidSize {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "invalid IA option size")
    }
}

/// The location of the options nested in an IA option.
///
/// Both fields are relative to the first octet of the IA option header.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct IaInner {
    pub offset: usize,
    pub len: usize,
}

impl IaInner {
    /// Return the range of the nested options within the IA option.
    pub fn range(&self) -> Range<usize> {
        self.offset..self.offset + self.len
    }
}

/// Locate the options nested in an IA option.
///
/// `option` starts at the IA option header and may extend past the option,
/// up to the end of the enclosing area. The IA kind is taken from `ia_type`,
/// not from the option code.
///
/// Returns `Err(InvalidSize)` if `option` is shorter than the smallest
/// well-formed IA of that kind, if the declared option-len cannot hold the
/// IAID (and T1/T2 for IA_NA), or if the declared option-len runs past the
/// end of `option`.
pub fn extract_inner(ia_type: IaType, option: &[u8]) -> core::result::Result<IaInner, InvalidSize> {
    if option.len() < ia_type.min_option_len() {
        return Err(InvalidSize);
    }

    let declared = NetworkEndian::read_u16(&option[field::OPT_LEN]) as usize;
    let fixed = ia_type.fixed_len();
    if declared < fixed {
        return Err(InvalidSize);
    }
    if field::OPT_HEADER_LEN + declared > option.len() {
        return Err(InvalidSize);
    }

    Ok(IaInner {
        offset: field::OPT_HEADER_LEN + fixed,
        len: declared - fixed,
    })
}

#[cfg(test)]
mod test {
    use super::super::{find_option, OPT_STATUS_CODE};
    use super::*;

    static TWO_IA_NA_BYTES: &[u8] = &[
        0x00, 0x03, 0x00, 0x0c, // IA_NA, len 12
        0x00, 0x00, 0x00, 0x01, // iaid 1
        0x00, 0x00, 0x0e, 0x10, // t1
        0x00, 0x00, 0x15, 0x18, // t2
        0x00, 0x03, 0x00, 0x12, // IA_NA, len 18
        0x00, 0x00, 0x00, 0x02, // iaid 2
        0x00, 0x00, 0x0e, 0x10, // t1
        0x00, 0x00, 0x15, 0x18, // t2
        0x00, 0x0d, 0x00, 0x02, 0x00, 0x00, // status code: success
    ];

    static IA_TA_BYTES: &[u8] = &[
        0x00, 0x04, 0x00, 0x0a, // IA_TA, len 10
        0xde, 0xad, 0xbe, 0xef, // iaid
        0x00, 0x0d, 0x00, 0x02, 0x00, 0x00, // status code: success
    ];

    #[test]
    fn test_ia_type() {
        assert_eq!(IaType::try_from(3), Ok(IaType::Na));
        assert_eq!(IaType::try_from(4), Ok(IaType::Ta));
        assert_eq!(IaType::try_from(25), Err(Error));
        assert_eq!(u16::from(IaType::Ta), OPT_IA_TA);
        assert_eq!(IaType::Na.min_option_len(), 16);
        assert_eq!(IaType::Ta.min_option_len(), 8);
    }

    #[test]
    fn test_find_by_iaid() {
        let first = IaDescriptor::new(IaType::Na, 1);
        let second = IaDescriptor::new(IaType::Na, 2);
        assert_eq!(find_ia_option(TWO_IA_NA_BYTES, &first), Some(0));
        assert_eq!(find_ia_option(TWO_IA_NA_BYTES, &second), Some(16));
        assert_eq!(find_ia_option(TWO_IA_NA_BYTES, &IaDescriptor::new(IaType::Na, 3)), None);
    }

    #[test]
    fn test_find_requires_type() {
        // Same IAID, wrong kind of IA.
        let descriptor = IaDescriptor::new(IaType::Ta, 1);
        assert_eq!(find_ia_option(TWO_IA_NA_BYTES, &descriptor), None);

        let descriptor = IaDescriptor::new(IaType::Ta, 0xdead_beef);
        assert_eq!(find_ia_option(IA_TA_BYTES, &descriptor), Some(0));
    }

    #[test]
    fn test_find_iaid_byte_order() {
        let descriptor = IaDescriptor::new(IaType::Ta, 0xefbe_adde);
        assert_eq!(find_ia_option(IA_TA_BYTES, &descriptor), None);
    }

    #[test]
    fn test_find_undersized_ia() {
        // option-len 0, the IAID is read from the octets that follow.
        let bytes = [
            0x00, 0x03, 0x00, 0x00, // IA_NA, len 0
            0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        ];
        let descriptor = IaDescriptor::new(IaType::Na, 1);
        assert_eq!(find_ia_option(&bytes, &descriptor), Some(0));
        assert_eq!(extract_inner(IaType::Na, &bytes), Err(InvalidSize));

        // An IAID that would run past the area does not match.
        assert_eq!(find_ia_option(&bytes[..7], &descriptor), None);
        let descriptor = IaDescriptor::new(IaType::Na, 0);
        assert_eq!(find_ia_option(&bytes[..7], &descriptor), None);
    }

    #[test]
    fn test_find_truncated() {
        let descriptor = IaDescriptor::new(IaType::Na, 2);
        assert_eq!(find_ia_option(&TWO_IA_NA_BYTES[..37], &descriptor), None);
        assert_eq!(find_ia_option(&TWO_IA_NA_BYTES[..8], &descriptor), None);
    }

    #[test]
    fn test_extract_ia_na() {
        let inner = extract_inner(IaType::Na, &TWO_IA_NA_BYTES[16..]).unwrap();
        assert_eq!(inner, IaInner { offset: 16, len: 6 });
        let nested = &TWO_IA_NA_BYTES[16..][inner.range()];
        assert_eq!(find_option(nested, OPT_STATUS_CODE), Some(0));
    }

    #[test]
    fn test_extract_ia_na_without_options() {
        let inner = extract_inner(IaType::Na, TWO_IA_NA_BYTES).unwrap();
        assert_eq!(inner, IaInner { offset: 16, len: 0 });
        assert!(inner.range().is_empty());
    }

    #[test]
    fn test_extract_ia_ta() {
        let inner = extract_inner(IaType::Ta, IA_TA_BYTES).unwrap();
        assert_eq!(inner, IaInner { offset: 8, len: 6 });
    }

    #[test]
    fn test_extract_short_area() {
        assert_eq!(extract_inner(IaType::Na, &TWO_IA_NA_BYTES[..15]), Err(InvalidSize));
        assert_eq!(extract_inner(IaType::Ta, &IA_TA_BYTES[..7]), Err(InvalidSize));
        assert_eq!(extract_inner(IaType::Ta, &[]), Err(InvalidSize));
    }

    #[test]
    fn test_extract_undersized_ia_na() {
        // option-len 4: IAID only, T1 and T2 missing, though the area has
        // enough octets after it.
        let bytes = [
            0x00, 0x03, 0x00, 0x04, 0x00, 0x00, 0x00, 0x01, // IA_NA, len 4
            0x00, 0x0d, 0x00, 0x02, 0x00, 0x00, 0x00, 0x00,
        ];
        assert_eq!(extract_inner(IaType::Na, &bytes), Err(InvalidSize));
    }

    #[test]
    fn test_extract_undersized_ia_ta() {
        let bytes = [0x00, 0x04, 0x00, 0x03, 0x00, 0x00, 0x00, 0x01];
        assert_eq!(extract_inner(IaType::Ta, &bytes), Err(InvalidSize));
    }

    #[test]
    fn test_extract_overrunning_length() {
        let mut bytes = [0u8; 16];
        bytes[..4].copy_from_slice(&[0x00, 0x04, 0x00, 0x0d]);
        assert_eq!(extract_inner(IaType::Ta, &bytes), Err(InvalidSize));
        bytes[3] = 0x0c;
        assert_eq!(extract_inner(IaType::Ta, &bytes), Ok(IaInner { offset: 8, len: 8 }));
    }

    #[test]
    fn test_display() {
        let descriptor = IaDescriptor::new(IaType::Na, 0x1234);
        assert_eq!(format!("{descriptor}"), "ia-na iaid=0x00001234");
        assert_eq!(format!("{}", InvalidSize), "invalid IA option size");
    }
}
