//! Backward-compatibility canonicalization of signatures.
//!
//! The fingerprint corpus was collected across several schema versions.
//! Downgrading a signature to the older variants rebuilds the lookup keys
//! those database entries were recorded under. Both transforms are pure,
//! idempotent, and preserve token order and hint sections.

use crate::signature::{Section, Signature, SignatureVersion, Token};

/// Keyed fields that already existed in the v1 schema.
const V1_KEYED: [&str; 3] = ["htcap", "vhtcap", "wps"];

/// Downgrades a `wifi3` signature to the base `wifi` schema.
///
/// Drops `cap` and `txpow` fields, and rewrites `extcap` values to the v2
/// spelling: first eight characters, byte-grouped and reversed. Anything
/// not tagged `wifi3` is returned unchanged.
pub fn to_v2(sig: &Signature) -> Signature {
    if sig.version != SignatureVersion::Wifi3 {
        return sig.clone();
    }
    let sections = sig
        .sections
        .iter()
        .map(|section| match section {
            Section::Named { name, tokens } if name.is_capability() => Section::Named {
                name: name.clone(),
                tokens: tokens.iter().filter_map(v2_token).collect(),
            },
            other => other.clone(),
        })
        .collect();
    Signature { version: SignatureVersion::Wifi, sections }
}

fn v2_token(token: &Token) -> Option<Token> {
    match token {
        Token::Keyed { name, .. } if name == "cap" || name == "txpow" => None,
        Token::Keyed { name, value } if name == "extcap" => {
            Some(Token::Keyed { name: name.clone(), value: v2_extcap(value) })
        }
        other => Some(other.clone()),
    }
}

/// v2 recorded the extended-capabilities bitmap as at most four bytes in
/// reversed byte order. A trailing odd character stands alone as a short
/// final group; anything past eight characters is discarded.
fn v2_extcap(value: &str) -> String {
    let usable: Vec<char> = value.chars().take(8).collect();
    usable.chunks(2).rev().flatten().collect()
}

/// Downgrades a signature to the v1 schema, which only knew bare IE ids,
/// vendor elements, and the `htcap`, `vhtcap`, and `wps` fields. Every
/// other keyed field is dropped. The version tag is left unchanged.
pub fn to_v1(sig: &Signature) -> Signature {
    let sections = sig
        .sections
        .iter()
        .map(|section| match section {
            Section::Named { name, tokens } if name.is_capability() => Section::Named {
                name: name.clone(),
                tokens: tokens
                    .iter()
                    .filter(|token| match token {
                        Token::Keyed { name, .. } => V1_KEYED.contains(&name.as_str()),
                        _ => true,
                    })
                    .cloned()
                    .collect(),
            },
            other => other.clone(),
        })
        .collect();
    Signature { version: sig.version.clone(), sections }
}

/// Renders the v1 canonical form of a raw signature string.
pub fn make_v1_signature(signature: &str) -> String {
    to_v1(&Signature::parse(signature)).to_string()
}

/// Renders the v2 canonical form of a raw signature string.
pub fn make_v2_signature(signature: &str) -> String {
    to_v2(&Signature::parse(signature)).to_string()
}
