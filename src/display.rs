use core::fmt;

use crate::capability::{CapabilityProfile, ChannelWidth, Generation, SpatialStreams};
use crate::db::Oui;
use crate::output::DeviceIdentity;
use crate::signature::{Section, SectionName, Signature, SignatureVersion, Token};

impl fmt::Display for SignatureVersion {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SignatureVersion::Wifi => f.write_str("wifi"),
            SignatureVersion::Wifi3 => f.write_str("wifi3"),
            SignatureVersion::Other(tag) => f.write_str(tag),
        }
    }
}

impl fmt::Display for SectionName {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SectionName::Probe => f.write_str("probe"),
            SectionName::Assoc => f.write_str("assoc"),
            SectionName::Oui => f.write_str("oui"),
            SectionName::Os => f.write_str("os"),
            SectionName::Other(name) => f.write_str(name),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Token::Bare(id) => write!(f, "{id}"),
            Token::VendorElement { oui, subtype } => {
                write!(f, "221({:02x}{:02x}{:02x},{})", oui[0], oui[1], oui[2], subtype)
            }
            Token::Keyed { name, value } => write!(f, "{name}:{value}"),
            Token::Literal(text) => f.write_str(text),
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Section::Named { name, tokens } => {
                write!(f, "{name}:")?;
                for (i, token) in tokens.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{token}")?;
                }
                Ok(())
            }
            Section::Opaque(text) => f.write_str(text),
        }
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.version)?;
        for section in &self.sections {
            write!(f, "|{section}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Oui {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:02x}:{:02x}:{:02x}", self.0[0], self.0[1], self.0[2])
    }
}

impl fmt::Display for Generation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            Generation::Legacy => "802.11a/b/g",
            Generation::N => "802.11n",
            Generation::Ac => "802.11ac",
        })
    }
}

impl fmt::Display for SpatialStreams {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SpatialStreams::Streams(n) => write!(f, "{n}"),
            SpatialStreams::Unknown => f.write_str("?"),
        }
    }
}

impl fmt::Display for ChannelWidth {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            ChannelWidth::Mhz20 => "20",
            ChannelWidth::Mhz40 => "40",
            ChannelWidth::Mhz80 => "80",
            ChannelWidth::Mhz160 => "160",
            ChannelWidth::Mhz80Plus80 => "80+80",
            ChannelWidth::Unknown => "??",
        })
    }
}

impl fmt::Display for CapabilityProfile {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} n:{},w:{}", self.generation, self.streams, self.width)
    }
}

impl fmt::Display for DeviceIdentity {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{};{};{}", self.chipset, self.model, self.capability)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capability_summary() {
        let profile = CapabilityProfile {
            generation: Generation::N,
            streams: SpatialStreams::Streams(2),
            width: ChannelWidth::Mhz40,
        };
        assert_eq!(profile.to_string(), "802.11n n:2,w:40");

        let profile = CapabilityProfile {
            generation: Generation::Ac,
            streams: SpatialStreams::Unknown,
            width: ChannelWidth::Mhz80Plus80,
        };
        assert_eq!(profile.to_string(), "802.11ac n:?,w:80+80");
    }

    #[test]
    fn test_oui_renders_lowercase() {
        assert_eq!(Oui([0xac, 0x22, 0x0b]).to_string(), "ac:22:0b");
    }
}
