/// Version tag carried as the first `|`-delimited element of a signature.
///
/// `wifi3` signatures additionally carry `cap`, `txpow`, `extcap`, and
/// `intwrk` fields that older databases never saw. Unrecognized tags are
/// preserved verbatim so malformed input still round-trips.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SignatureVersion {
    Wifi,
    Wifi3,
    Other(String),
}

impl SignatureVersion {
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "wifi" => SignatureVersion::Wifi,
            "wifi3" => SignatureVersion::Wifi3,
            other => SignatureVersion::Other(other.to_string()),
        }
    }
}

/// Name of a signature section.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SectionName {
    Probe,
    Assoc,
    Oui,
    Os,
    Other(String),
}

impl SectionName {
    pub fn from_name(name: &str) -> Self {
        match name {
            "probe" => SectionName::Probe,
            "assoc" => SectionName::Assoc,
            "oui" => SectionName::Oui,
            "os" => SectionName::Os,
            other => SectionName::Other(other.to_string()),
        }
    }

    /// Probe and assoc sections carry capability tokens. Oui and os
    /// sections are out-of-band hints and pass through every transform
    /// unchanged.
    pub fn is_capability(&self) -> bool {
        matches!(self, SectionName::Probe | SectionName::Assoc)
    }
}

/// A single token within a section.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Token {
    /// A bare information-element id, e.g. `50`.
    Bare(u32),
    /// A vendor-specific IE, textually `221(0050f2,2)`.
    VendorElement { oui: [u8; 3], subtype: u32 },
    /// A named capability field, e.g. `htcap:086c`. The value stays opaque
    /// until a consumer decodes it.
    Keyed { name: String, value: String },
    /// Anything that does not re-serialize to its source text. Kept verbatim
    /// so canonicalization and hashing stay stable over the original input.
    Literal(String),
}

/// One `name:token,token,...` section of a signature. Parts without a `:`
/// separator are kept opaque.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Section {
    Named { name: SectionName, tokens: Vec<Token> },
    Opaque(String),
}

/// A parsed signature: version tag plus ordered sections. Section and token
/// order is semantically significant, it is part of the database lookup key.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Signature {
    pub version: SignatureVersion,
    pub sections: Vec<Section>,
}

impl Signature {
    /// Tokens of the first assoc section, empty when absent.
    ///
    /// Association content is authoritative for capability classification.
    /// Some clients advertise VHT in probe frames their radio cannot
    /// actually do, so the probe section is never consulted.
    pub fn assoc_tokens(&self) -> &[Token] {
        self.sections
            .iter()
            .find_map(|section| match section {
                Section::Named { name: SectionName::Assoc, tokens } => Some(tokens.as_slice()),
                _ => None,
            })
            .unwrap_or(&[])
    }
}
