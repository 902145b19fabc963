use nom::branch::alt;
use nom::bytes::complete::{tag, take_while_m_n};
use nom::character::complete::{char, digit1};
use nom::combinator::{all_consuming, map, map_res};
use nom::sequence::{delimited, separated_pair};
use nom::{IResult, Parser};

use crate::signature::{Section, SectionName, Signature, SignatureVersion, Token};

impl Signature {
    /// Parses the textual signature format.
    ///
    /// Total: never fails. Malformed sections and tokens are preserved
    /// verbatim as opaque values, so any input round-trips byte-exactly
    /// through `Display`. Captured-frame data is noisy by nature and must
    /// never abort the identification pipeline.
    pub fn parse(raw: &str) -> Signature {
        let mut parts = raw.split('|');
        let version = SignatureVersion::from_tag(parts.next().unwrap_or(""));
        let sections = parts.map(parse_section).collect();
        Signature { version, sections }
    }
}

fn parse_section(part: &str) -> Section {
    match part.split_once(':') {
        Some((name, body)) => Section::Named {
            name: SectionName::from_name(name),
            tokens: body.split(',').map(parse_token).collect(),
        },
        None => Section::Opaque(part.to_string()),
    }
}

fn parse_token(piece: &str) -> Token {
    if let Ok((_, token)) = all_consuming(alt((vendor_element, bare))).parse(piece) {
        // Non-canonical spellings (leading zeros, uppercase hex) must
        // survive as literals to keep round-trips byte-exact.
        if token.to_string() == piece {
            return token;
        }
    }
    match piece.split_once(':') {
        Some((name, value)) => Token::Keyed { name: name.to_string(), value: value.to_string() },
        None => Token::Literal(piece.to_string()),
    }
}

fn dec_u32(input: &str) -> IResult<&str, u32> {
    map_res(digit1, str::parse).parse(input)
}

fn oui_bytes(input: &str) -> IResult<&str, [u8; 3]> {
    map_res(
        take_while_m_n(6, 6, |c: char| c.is_ascii_hexdigit()),
        |s: &str| -> Result<[u8; 3], std::num::ParseIntError> {
            let value = u32::from_str_radix(s, 16)?;
            Ok([(value >> 16) as u8, (value >> 8) as u8, value as u8])
        },
    )
    .parse(input)
}

fn vendor_element(input: &str) -> IResult<&str, Token> {
    map(
        (
            tag("221"),
            delimited(char('('), separated_pair(oui_bytes, char(','), dec_u32), char(')')),
        ),
        |(_, (oui, subtype))| Token::VendorElement { oui, subtype },
    )
    .parse(input)
}

fn bare(input: &str) -> IResult<&str, Token> {
    map(dec_u32, Token::Bare).parse(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roundtrip(raw: &str) {
        assert_eq!(Signature::parse(raw).to_string(), raw);
    }

    #[test]
    fn test_token_variants() {
        assert_eq!(parse_token("50"), Token::Bare(50));
        assert_eq!(
            parse_token("221(0050f2,2)"),
            Token::VendorElement { oui: [0x00, 0x50, 0xf2], subtype: 2 }
        );
        assert_eq!(
            parse_token("htcap:086c"),
            Token::Keyed { name: "htcap".to_string(), value: "086c".to_string() }
        );
        assert_eq!(parse_token("garbage"), Token::Literal("garbage".to_string()));
    }

    #[test]
    fn test_non_canonical_spellings_stay_literal() {
        assert_eq!(parse_token("01"), Token::Literal("01".to_string()));
        assert_eq!(parse_token("221(0050F2,2)"), Token::Literal("221(0050F2,2)".to_string()));
        assert_eq!(parse_token("221(0050f2,02)"), Token::Literal("221(0050f2,02)".to_string()));
        assert_eq!(parse_token("221(0050f2,2"), Token::Literal("221(0050f2,2".to_string()));
    }

    #[test]
    fn test_sections() {
        let sig = Signature::parse("wifi|probe:0,1,50|assoc:0,1,htcap:012c|os:ios");
        assert_eq!(sig.version, SignatureVersion::Wifi);
        assert_eq!(sig.sections.len(), 3);
        assert_eq!(
            sig.assoc_tokens()[2],
            Token::Keyed { name: "htcap".to_string(), value: "012c".to_string() }
        );
    }

    #[test]
    fn test_absent_assoc_reads_empty() {
        let sig = Signature::parse("wifi|probe:0,1,50");
        assert!(sig.assoc_tokens().is_empty());
    }

    #[test]
    fn test_roundtrip_is_byte_exact() {
        roundtrip("wifi|probe:0,1,50,45,htcap:186e|assoc:0,1,50,48,221(0050f2,2),45,127,htcap:086c,htmcs:000000ff");
        roundtrip("wifi3|probe:0,1,50|assoc:0,1,50,extcap:0123456789abcdef|oui:google");
        roundtrip("");
        roundtrip("no pipes at all");
        roundtrip("wifi|probe|assoc:");
        roundtrip("wifi9|x:01,,221(XYZ),a:b:c");
        roundtrip("wifi|assoc:0,1,50,wps:Nexus_4");
    }
}
