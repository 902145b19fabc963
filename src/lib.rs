#![forbid(unsafe_code)]

//! Passive Wi-Fi client taxonomy.
//!
//! Identifies the make, chipset, and radio capability class of a wireless
//! client from the information elements it advertises in 802.11 Probe
//! Request and Association Request frames, plus its MAC address. Input is a
//! compact textual signature such as
//! `wifi|probe:0,1,50,htcap:186e|assoc:0,1,50,48,htcap:086c,htmcs:000000ff`;
//! output is always a `(chipset, model, capability)` triple. Signatures
//! come from noisy, sometimes adversarial firmware, so no input ever fails:
//! unmatched devices get a deterministic content-hash chipset label, unknown
//! models the literal `Unknown`, and undecodable capability fields render
//! as `?`/`??`.
//!
//! Matching runs in tiers against a read-only fingerprint database: the raw
//! signature, then its v2 and v1 canonical downgrades, which rebuild the
//! keys older database generations were recorded under.

pub mod canonical;
pub mod capability;
pub mod db;
mod db_parse;
mod display;
pub mod error;
pub mod matcher;
pub mod output;
mod parse;
pub mod signature;

pub use canonical::{make_v1_signature, make_v2_signature};
pub use db::{Database, DeviceRecord, FingerprintLookup, Oui};
pub use error::TaxonomyError;
pub use matcher::SignatureMatcher;
pub use output::DeviceIdentity;
pub use signature::Signature;

use lazy_static::lazy_static;

lazy_static! {
    static ref DEFAULT_DATABASE: Database = Database::default();
}

/// Identifies a wireless client against the built-in taxonomy database.
///
/// # Parameters
/// - `signature`: the textual probe/assoc signature of the client.
/// - `mac`: the client MAC address in colon-hex form; only the leading
///   three bytes (the OUI) are used.
///
/// # Returns
/// The `(chipset, model, capability)` triple. Never fails: every input,
/// including empty or malformed strings, yields a fully-formed result.
pub fn identify_wifi_device(signature: &str, mac: &str) -> (String, String, String) {
    SignatureMatcher::new(&*DEFAULT_DATABASE)
        .identify(signature, mac)
        .into()
}
