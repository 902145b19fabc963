/// Identity resolved for a wireless client.
///
/// Always fully formed: `chipset` falls back to a deterministic content
/// hash, `model` to the literal `Unknown`, and `capability` degrades field
/// by field rather than failing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeviceIdentity {
    /// Chipset name, or `SHA:<hex>` when no fingerprint matched.
    pub chipset: String,
    /// Product model, or `Unknown`.
    pub model: String,
    /// Capability summary, e.g. `802.11n n:2,w:40`.
    pub capability: String,
}

impl From<DeviceIdentity> for (String, String, String) {
    fn from(identity: DeviceIdentity) -> Self {
        (identity.chipset, identity.model, identity.capability)
    }
}
