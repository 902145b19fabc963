use std::collections::HashMap;

/// The first three bytes of a MAC address, identifying the manufacturer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Oui(pub [u8; 3]);

impl Oui {
    /// Extracts the OUI from a colon-hex MAC address (or a bare OUI like
    /// `00:24:e4`). A malformed address yields `None`, never an error.
    pub fn from_mac(mac: &str) -> Option<Oui> {
        let mut parts = mac.split(':');
        let mut bytes = [0u8; 3];
        for byte in &mut bytes {
            let part = parts.next()?;
            if part.len() != 2 || !part.bytes().all(|b| b.is_ascii_hexdigit()) {
                return None;
            }
            *byte = u8::from_str_radix(part, 16).ok()?;
        }
        Some(Oui(bytes))
    }
}

/// What a fingerprint entry knows about a device: the chipset, and the
/// product model when the signature is unique to one device.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeviceRecord {
    pub chipset: String,
    pub model: Option<String>,
}

/// Read-only lookups the matcher performs against reference data.
///
/// Injected rather than ambient so tests can supply deterministic doubles.
/// Implementations must be safe for concurrent reads; the matcher never
/// writes.
pub trait FingerprintLookup {
    /// Exact match of a canonical signature string to a device record.
    fn chipset_by_signature(&self, canonical: &str) -> Option<&DeviceRecord>;

    /// Model for a (canonical signature, OUI) pair. Resolves signatures
    /// that are generic across many products to a vendor-specific model.
    fn model_by_oui(&self, canonical: &str, oui: Oui) -> Option<&str>;
}

/// In-memory taxonomy database, loaded once and treated as immutable.
///
/// The default instance embeds `config/taxonomy.fp`; see `db_parse` for the
/// text format.
#[derive(Debug, Clone)]
pub struct Database {
    pub chipsets: HashMap<String, DeviceRecord>,
    pub models: HashMap<(String, Oui), String>,
}

impl FingerprintLookup for Database {
    fn chipset_by_signature(&self, canonical: &str) -> Option<&DeviceRecord> {
        self.chipsets.get(canonical)
    }

    fn model_by_oui(&self, canonical: &str, oui: Oui) -> Option<&str> {
        self.models.get(&(canonical.to_string(), oui)).map(String::as_str)
    }
}

impl Default for Database {
    fn default() -> Self {
        include_str!("../config/taxonomy.fp")
            .parse()
            .expect("parse default taxonomy database")
    }
}
