#![no_main]
use libfuzzer_sys::fuzz_target;
use dhcpv6_status::wire::{
    extract_inner, find_ia_option, find_option, parse_options, IaDescriptor, IaType,
};

fuzz_target!(|data: &[u8]| {
    // Every record handed out lies inside the buffer, in order.
    let mut end = 0;
    for (offset, option) in parse_options(data) {
        assert_eq!(offset, end);
        end = offset + option.buffer_len();
        assert!(end <= data.len());
    }

    if data.len() < 2 {
        return;
    }
    let kind = u16::from_be_bytes([data[0], data[1]]);
    if let Some(offset) = find_option(data, kind) {
        assert!(offset + 4 <= data.len());
    }

    for ia_type in [IaType::Na, IaType::Ta] {
        let iaid = data.get(4..8).map_or(0, |b| u32::from_be_bytes([b[0], b[1], b[2], b[3]]));
        let descriptor = IaDescriptor::new(ia_type, iaid);
        if let Some(offset) = find_ia_option(data, &descriptor) {
            if let Ok(inner) = extract_inner(ia_type, &data[offset..]) {
                assert!(offset + inner.range().end <= data.len());
            }
        }
    }
});
