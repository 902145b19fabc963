use sha2::{Digest, Sha256};
use tracing::{debug, trace};

use crate::canonical;
use crate::capability;
use crate::db::{DeviceRecord, FingerprintLookup, Oui};
use crate::output::DeviceIdentity;
use crate::signature::Signature;

const UNKNOWN_MODEL: &str = "Unknown";

/// Resolves device identities against a read-only taxonomy database.
///
/// Lookup keys are tried in strict priority order: the raw signature text,
/// its v2 canonical form, then the v1 form of that. Each tier is a plain
/// exact-string lookup; the first hit wins. When every tier misses, the
/// chipset degrades to a deterministic content hash of the raw signature.
pub struct SignatureMatcher<'a, D: FingerprintLookup> {
    database: &'a D,
}

impl<'a, D: FingerprintLookup> SignatureMatcher<'a, D> {
    pub fn new(database: &'a D) -> Self {
        Self { database }
    }

    /// Identifies a client from its signature and MAC address.
    ///
    /// Total: any input, including empty or garbage strings, produces a
    /// fully-formed identity. The capability summary is computed
    /// independently of match success.
    pub fn identify(&self, signature: &str, mac: &str) -> DeviceIdentity {
        let parsed = Signature::parse(signature);
        let v2 = canonical::to_v2(&parsed);
        let v1 = canonical::to_v1(&v2);
        let keys = [signature.to_string(), v2.to_string(), v1.to_string()];

        let record = self.lookup_chipset(&keys);
        let chipset = match record {
            Some(record) => record.chipset.clone(),
            None => {
                let label = checksum_label(signature);
                debug!(chipset = %label, "no fingerprint match, using content hash");
                label
            }
        };

        let model = record
            .and_then(|record| record.model.clone())
            .or_else(|| self.lookup_model(&keys, mac))
            .unwrap_or_else(|| UNKNOWN_MODEL.to_string());

        let capability = capability::decode(parsed.assoc_tokens()).to_string();

        DeviceIdentity { chipset, model, capability }
    }

    fn lookup_chipset(&self, keys: &[String]) -> Option<&'a DeviceRecord> {
        keys.iter().enumerate().find_map(|(tier, key)| {
            let record = self.database.chipset_by_signature(key)?;
            debug!(tier, chipset = %record.chipset, "fingerprint match");
            Some(record)
        })
    }

    fn lookup_model(&self, keys: &[String], mac: &str) -> Option<String> {
        let oui = Oui::from_mac(mac)?;
        keys.iter().find_map(|key| {
            let model = self.database.model_by_oui(key, oui)?;
            trace!(%oui, model, "model resolved by OUI");
            Some(model.to_string())
        })
    }
}

/// Deterministic fallback label: identical signatures always hash alike,
/// distinct ones practically never collide.
fn checksum_label(signature: &str) -> String {
    format!("SHA:{:x}", Sha256::digest(signature.as_bytes()))
}
