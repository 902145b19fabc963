//! Text format for the taxonomy database.
//!
//! Line-based: `;` starts a comment, `[chipset]` / `[model]` open a group,
//! and `name = value` lines build records within it.
//!
//! ```text
//! [chipset]
//! label = BCM4331;MacBook Pro 17" late 2011 (A1297)
//! sig   = wifi|probe:...|assoc:...
//!
//! [model]
//! label = Withings
//! oui   = 00:24:e4
//! sig   = wifi|probe:...|assoc:...
//! ```
//!
//! A chipset label is `chipset` or `chipset;model`; every following `sig`
//! line keys that record. A model record maps every listed (sig, oui) pair
//! to its label.

use std::collections::HashMap;
use std::str::FromStr;

use tracing::warn;

use crate::db::{Database, DeviceRecord, Oui};
use crate::error::TaxonomyError;

#[derive(Clone, Copy)]
enum Group {
    Chipset,
    Model,
    Unknown,
}

#[derive(Default)]
struct ModelRecord {
    label: String,
    ouis: Vec<Oui>,
    sigs: Vec<String>,
}

impl FromStr for Database {
    type Err = TaxonomyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chipsets = HashMap::new();
        let mut models = HashMap::new();
        let mut group = None;
        let mut chipset: Option<DeviceRecord> = None;
        let mut model: Option<ModelRecord> = None;

        for (idx, raw_line) in s.lines().enumerate() {
            let line = raw_line.trim();
            if line.is_empty() || line.starts_with(';') {
                continue;
            }

            if line.starts_with('[') && line.ends_with(']') {
                flush_model(&mut models, model.take());
                chipset = None;
                group = Some(match &line[1..line.len() - 1] {
                    "chipset" => Group::Chipset,
                    "model" => Group::Model,
                    other => {
                        warn!("skip unknown group `{}`", other);
                        Group::Unknown
                    }
                });
                continue;
            }

            let (name, value) = line
                .split_once('=')
                .map(|(name, value)| (name.trim(), value.trim()))
                .ok_or_else(|| {
                    TaxonomyError::Parse(format!("line {}: expected `name = value`: {}", idx + 1, line))
                })?;

            match group {
                Some(Group::Chipset) => match name {
                    "label" => {
                        let (chip, product) = match value.split_once(';') {
                            Some((chip, product)) => (chip, Some(product.to_string())),
                            None => (value, None),
                        };
                        chipset = Some(DeviceRecord { chipset: chip.to_string(), model: product });
                    }
                    "sig" => {
                        let record = chipset.clone().ok_or_else(|| {
                            TaxonomyError::Parse(format!("line {}: `sig` without `label`", idx + 1))
                        })?;
                        chipsets.insert(value.to_string(), record);
                    }
                    _ => warn!("skip unknown chipset entry: {} = {}", name, value),
                },
                Some(Group::Model) => match name {
                    "label" => {
                        flush_model(&mut models, model.take());
                        model = Some(ModelRecord { label: value.to_string(), ..Default::default() });
                    }
                    "oui" => {
                        let record = model.as_mut().ok_or_else(|| {
                            TaxonomyError::Parse(format!("line {}: `oui` without `label`", idx + 1))
                        })?;
                        let oui = Oui::from_mac(value).ok_or_else(|| {
                            TaxonomyError::Parse(format!("line {}: bad OUI: {}", idx + 1, value))
                        })?;
                        record.ouis.push(oui);
                    }
                    "sig" => {
                        let record = model.as_mut().ok_or_else(|| {
                            TaxonomyError::Parse(format!("line {}: `sig` without `label`", idx + 1))
                        })?;
                        record.sigs.push(value.to_string());
                    }
                    _ => warn!("skip unknown model entry: {} = {}", name, value),
                },
                Some(Group::Unknown) => {}
                None => {
                    return Err(TaxonomyError::Parse(format!(
                        "line {}: entry outside any group: {}",
                        idx + 1,
                        line
                    )))
                }
            }
        }
        flush_model(&mut models, model.take());

        Ok(Database { chipsets, models })
    }
}

fn flush_model(models: &mut HashMap<(String, Oui), String>, record: Option<ModelRecord>) {
    let Some(record) = record else { return };
    if record.ouis.is_empty() || record.sigs.is_empty() {
        warn!("model `{}` has no (sig, oui) pair", record.label);
    }
    for sig in &record.sigs {
        for oui in &record.ouis {
            models.insert((sig.clone(), *oui), record.label.clone());
        }
    }
}
