use crate::signature::Token;

/// 802.11 generation of a client, derived from which capability elements it
/// includes in its association request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Generation {
    Legacy,
    N,
    Ac,
}

/// Channel width in MHz. `Mhz80Plus80` is the VHT non-contiguous 80+80 mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChannelWidth {
    Mhz20,
    Mhz40,
    Mhz80,
    Mhz160,
    Mhz80Plus80,
    Unknown,
}

/// Number of spatial streams a client supports.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpatialStreams {
    Streams(u8),
    Unknown,
}

/// Radio capability class decoded from the assoc section of a signature.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CapabilityProfile {
    pub generation: Generation,
    pub streams: SpatialStreams,
    pub width: ChannelWidth,
}

/// Decodes generation, spatial streams, and channel width from assoc tokens.
///
/// Never fails: a field that is absent or does not parse as hex degrades
/// only the value derived from it to `Unknown`. Presence of `vhtcap` or
/// `htcap` alone decides the generation, the value need not parse.
pub fn decode(assoc: &[Token]) -> CapabilityProfile {
    if keyed(assoc, "vhtcap").is_some() {
        decode_vht(assoc)
    } else if keyed(assoc, "htcap").is_some() {
        decode_ht(assoc)
    } else {
        CapabilityProfile {
            generation: Generation::Legacy,
            streams: SpatialStreams::Streams(1),
            width: ChannelWidth::Mhz20,
        }
    }
}

fn decode_ht(assoc: &[Token]) -> CapabilityProfile {
    let width = match keyed(assoc, "htcap").and_then(hex_u16) {
        Some(cap) if cap & 0x0002 != 0 => ChannelWidth::Mhz40,
        Some(_) => ChannelWidth::Mhz20,
        None => ChannelWidth::Unknown,
    };
    // The HT MCS map covers 8 MCS indices per stream, so the highest set
    // bit places the highest supported stream.
    let streams = match keyed(assoc, "htmcs").and_then(hex_u32) {
        Some(map) if map != 0 => {
            let highest = 31 - map.leading_zeros();
            SpatialStreams::Streams((highest / 8 + 1).min(4) as u8)
        }
        _ => SpatialStreams::Unknown,
    };
    CapabilityProfile { generation: Generation::N, streams, width }
}

fn decode_vht(assoc: &[Token]) -> CapabilityProfile {
    let width = match keyed(assoc, "vhtcap").and_then(hex_u32) {
        Some(cap) => match (cap >> 2) & 0b11 {
            0 => ChannelWidth::Mhz80,
            1 => ChannelWidth::Mhz160,
            2 => ChannelWidth::Mhz80Plus80,
            _ => ChannelWidth::Unknown,
        },
        None => ChannelWidth::Unknown,
    };
    // vhtrxmcs wins when both MCS maps are present.
    let streams = match keyed(assoc, "vhtrxmcs")
        .or_else(|| keyed(assoc, "vhttxmcs"))
        .and_then(hex_u32)
    {
        Some(map) => vht_stream_count(map),
        None => SpatialStreams::Unknown,
    };
    CapabilityProfile { generation: Generation::Ac, streams, width }
}

/// Counts consecutive supported streams in a VHT MCS map: eight 2-bit
/// codes from stream 1 up, where 0b11 means "not supported".
fn vht_stream_count(map: u32) -> SpatialStreams {
    let mcs = map & 0xffff;
    let mut count = 0;
    for stream in 0..8 {
        if (mcs >> (2 * stream)) & 0b11 == 0b11 {
            break;
        }
        count += 1;
    }
    SpatialStreams::Streams(count)
}

fn keyed<'a>(tokens: &'a [Token], name: &str) -> Option<&'a str> {
    tokens.iter().find_map(|token| match token {
        Token::Keyed { name: n, value } if n == name => Some(value.as_str()),
        _ => None,
    })
}

fn hex_u16(value: &str) -> Option<u16> {
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    u16::from_str_radix(value, 16).ok()
}

fn hex_u32(value: &str) -> Option<u32> {
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    u32::from_str_radix(value, 16).ok()
}
