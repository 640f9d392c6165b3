#![no_main]
use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use dhcpv6_status::status::{evaluate_packet, Error};
use dhcpv6_status::wire::{Dhcpv6Packet, IaDescriptor, IaType};

#[derive(Debug, Arbitrary)]
struct Input<'a> {
    temporary: bool,
    iaid: u32,
    message: &'a [u8],
}

fuzz_target!(|input: Input<'_>| {
    let ia_type = if input.temporary { IaType::Ta } else { IaType::Na };
    let descriptor = IaDescriptor::new(ia_type, input.iaid);

    let packet = match Dhcpv6Packet::new_checked(input.message) {
        Ok(packet) => packet,
        Err(_) => return,
    };

    let result = evaluate_packet(&packet, &descriptor);
    assert_eq!(evaluate_packet(&packet, &descriptor), result);
    if let Err(Error::Status { offset, .. }) = result {
        // The reported option lies inside the option area, code included.
        assert!(offset + 6 <= packet.options().len());
    }
});
