// ─────────────────────────────────────────────────────────────────────
// SCPN Fusion Core — Plasma Source Interchange Format
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Single-line key/value record used to hand a [`PlasmaConfig`] across a
//! process boundary.
//!
//! ```text
//! schema_version=1, major_radius=9.06, minor_radius=2.92258, ..., max_toroidal_angle=360.0
//! ```
//!
//! Entries are separated by `,`, keys and values by the first `=`. The first
//! entry is always `schema_version`; the remaining keys follow the field order
//! of [`PlasmaConfig`]. Floats use the shortest representation that parses
//! back to the same bits, so `parse(format(x)) == x`.

use std::collections::HashMap;
use std::str::FromStr;

use crate::config::PlasmaConfig;
use crate::error::{PlasmaError, PlasmaResult};

pub const SCHEMA_VERSION: u32 = 1;

const SCHEMA_KEY: &str = "schema_version";
const SEPARATOR: &str = ", ";

/// Render `config` as an interchange record.
pub fn format_config(config: &PlasmaConfig) -> String {
    let entries: [(&str, String); 21] = [
        (SCHEMA_KEY, SCHEMA_VERSION.to_string()),
        ("major_radius", format!("{:?}", config.major_radius)),
        ("minor_radius", format!("{:?}", config.minor_radius)),
        ("elongation", format!("{:?}", config.elongation)),
        ("triangularity", format!("{:?}", config.triangularity)),
        ("shafranov_shift", format!("{:?}", config.shafranov_shift)),
        ("pedestal_radius", format!("{:?}", config.pedestal_radius)),
        ("ion_density_pedestal", format!("{:?}", config.ion_density_pedestal)),
        ("ion_density_separatrix", format!("{:?}", config.ion_density_separatrix)),
        ("ion_density_origin", format!("{:?}", config.ion_density_origin)),
        (
            "ion_density_peaking_factor",
            format!("{:?}", config.ion_density_peaking_factor),
        ),
        (
            "ion_temperature_pedestal",
            format!("{:?}", config.ion_temperature_pedestal),
        ),
        (
            "ion_temperature_separatrix",
            format!("{:?}", config.ion_temperature_separatrix),
        ),
        ("ion_temperature_origin", format!("{:?}", config.ion_temperature_origin)),
        (
            "ion_temperature_peaking_factor",
            format!("{:?}", config.ion_temperature_peaking_factor),
        ),
        ("ion_temperature_beta", format!("{:?}", config.ion_temperature_beta)),
        ("plasma_type", config.plasma_type.clone()),
        ("plasma_id", config.plasma_id.to_string()),
        ("number_of_bins", config.number_of_bins.to_string()),
        ("min_toroidal_angle", format!("{:?}", config.min_toroidal_angle)),
        ("max_toroidal_angle", format!("{:?}", config.max_toroidal_angle)),
    ];

    entries
        .iter()
        .map(|(key, value)| format!("{key}={value}"))
        .collect::<Vec<_>>()
        .join(SEPARATOR)
}

/// Parse an interchange record and validate the resulting config.
pub fn parse_config(record: &str) -> PlasmaResult<PlasmaConfig> {
    let mut fields = split_record(record)?;

    let version: u32 = take_parsed(&mut fields, SCHEMA_KEY)?;
    if version != SCHEMA_VERSION {
        return Err(PlasmaError::Interchange(format!(
            "unsupported schema_version {version}, expected {SCHEMA_VERSION}"
        )));
    }

    let config = PlasmaConfig {
        major_radius: take_parsed(&mut fields, "major_radius")?,
        minor_radius: take_parsed(&mut fields, "minor_radius")?,
        elongation: take_parsed(&mut fields, "elongation")?,
        triangularity: take_parsed(&mut fields, "triangularity")?,
        shafranov_shift: take_parsed(&mut fields, "shafranov_shift")?,
        pedestal_radius: take_parsed(&mut fields, "pedestal_radius")?,
        ion_density_pedestal: take_parsed(&mut fields, "ion_density_pedestal")?,
        ion_density_separatrix: take_parsed(&mut fields, "ion_density_separatrix")?,
        ion_density_origin: take_parsed(&mut fields, "ion_density_origin")?,
        ion_density_peaking_factor: take_parsed(&mut fields, "ion_density_peaking_factor")?,
        ion_temperature_pedestal: take_parsed(&mut fields, "ion_temperature_pedestal")?,
        ion_temperature_separatrix: take_parsed(&mut fields, "ion_temperature_separatrix")?,
        ion_temperature_origin: take_parsed(&mut fields, "ion_temperature_origin")?,
        ion_temperature_peaking_factor: take_parsed(
            &mut fields,
            "ion_temperature_peaking_factor",
        )?,
        ion_temperature_beta: take_parsed(&mut fields, "ion_temperature_beta")?,
        plasma_type: take_raw(&mut fields, "plasma_type")?,
        plasma_id: take_parsed(&mut fields, "plasma_id")?,
        number_of_bins: take_parsed(&mut fields, "number_of_bins")?,
        min_toroidal_angle: take_parsed(&mut fields, "min_toroidal_angle")?,
        max_toroidal_angle: take_parsed(&mut fields, "max_toroidal_angle")?,
    };

    if !fields.is_empty() {
        let mut unknown: Vec<&str> = fields.keys().copied().collect();
        unknown.sort_unstable();
        return Err(PlasmaError::Interchange(format!(
            "unknown keys: {}",
            unknown.join(", ")
        )));
    }

    config.validate()?;
    Ok(config)
}

fn split_record(record: &str) -> PlasmaResult<HashMap<&str, &str>> {
    let mut fields = HashMap::new();
    for (position, entry) in record.split(',').enumerate() {
        let entry = entry.trim();
        let (key, value) = entry.split_once('=').ok_or_else(|| {
            PlasmaError::Interchange(format!("entry {position} has no '=': {entry:?}"))
        })?;
        let key = key.trim();
        if position == 0 && key != SCHEMA_KEY {
            return Err(PlasmaError::Interchange(format!(
                "record must start with {SCHEMA_KEY}, found {key:?}"
            )));
        }
        if fields.insert(key, value.trim()).is_some() {
            return Err(PlasmaError::Interchange(format!("duplicate key {key:?}")));
        }
    }
    Ok(fields)
}

fn take_raw(fields: &mut HashMap<&str, &str>, key: &str) -> PlasmaResult<String> {
    fields
        .remove(key)
        .map(str::to_string)
        .ok_or_else(|| PlasmaError::Interchange(format!("missing key {key:?}")))
}

fn take_parsed<T>(fields: &mut HashMap<&str, &str>, key: &str) -> PlasmaResult<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let raw = take_raw(fields, key)?;
    raw.parse::<T>()
        .map_err(|e| PlasmaError::Interchange(format!("{key}={raw:?}: {e}")))
}

impl FromStr for PlasmaConfig {
    type Err = PlasmaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_config(s)
    }
}

impl PlasmaConfig {
    pub fn to_interchange(&self) -> String {
        format_config(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference_config() -> PlasmaConfig {
        PlasmaConfig {
            major_radius: 9.06,
            minor_radius: 2.92258,
            elongation: 1.557,
            triangularity: 0.27,
            shafranov_shift: 0.44789,
            pedestal_radius: 2.338064,
            ion_density_peaking_factor: 1.0,
            ion_temperature_beta: 6.0,
            ..PlasmaConfig::default()
        }
    }

    #[test]
    fn test_format_starts_with_schema_version() {
        let record = format_config(&reference_config());
        assert!(record.starts_with("schema_version=1, major_radius=9.06, "));
        assert!(record.ends_with("max_toroidal_angle=360.0"));
        assert_eq!(record.split(", ").count(), 21);
    }

    #[test]
    fn test_roundtrip_reference() {
        let cfg = reference_config();
        let parsed = parse_config(&format_config(&cfg)).unwrap();
        assert_eq!(parsed, cfg);
        // Second pass renders the same text
        assert_eq!(format_config(&parsed), format_config(&cfg));
    }

    #[test]
    fn test_from_str_and_whitespace_tolerance() {
        let cfg = reference_config();
        let spaced = format_config(&cfg).replace(", ", " ,  ").replace('=', " = ");
        let parsed: PlasmaConfig = spaced.parse().unwrap();
        assert_eq!(parsed, cfg);
    }

    #[test]
    fn test_rejects_missing_schema_version() {
        let record = format_config(&reference_config());
        let without = record.replacen("schema_version=1, ", "", 1);
        let err = parse_config(&without).unwrap_err();
        assert!(err.to_string().contains("schema_version"), "got {err}");
    }

    #[test]
    fn test_rejects_future_schema_version() {
        let record = format_config(&reference_config()).replacen("schema_version=1", "schema_version=2", 1);
        assert!(matches!(parse_config(&record), Err(PlasmaError::Interchange(_))));
    }

    #[test]
    fn test_rejects_unknown_key() {
        let record = format!("{}, single_null=true", format_config(&reference_config()));
        let err = parse_config(&record).unwrap_err();
        assert!(err.to_string().contains("single_null"), "got {err}");
    }

    #[test]
    fn test_rejects_duplicate_key() {
        let record = format!("{}, elongation=2.0", format_config(&reference_config()));
        let err = parse_config(&record).unwrap_err();
        assert!(err.to_string().contains("duplicate"), "got {err}");
    }

    #[test]
    fn test_rejects_missing_key() {
        let record = format_config(&reference_config()).replace(", triangularity=0.27", "");
        let err = parse_config(&record).unwrap_err();
        assert!(err.to_string().contains("triangularity"), "got {err}");
    }

    #[test]
    fn test_rejects_bad_number() {
        let record = format_config(&reference_config()).replace("elongation=1.557", "elongation=tall");
        let err = parse_config(&record).unwrap_err();
        assert!(err.to_string().contains("elongation"), "got {err}");
    }

    #[test]
    fn test_parsed_config_is_validated() {
        let record = format_config(&reference_config()).replace("number_of_bins=100", "number_of_bins=0");
        assert!(matches!(parse_config(&record), Err(PlasmaError::ConfigError(_))));
    }
}
