use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::Deserialize;
use toml::Value;

use trx_core::PchanConfig;

use crate::trx_config::TrxConfig;

/// Build `TrxConfig` from a TOML string
pub fn from_toml_str(toml_str: &str) -> Result<TrxConfig, Box<dyn std::error::Error>> {
    let root: TomlConfigRoot = toml::from_str(toml_str)?;

    // Various sanity checks
    let expected_config_version = "0.3";
    if !root.config_version.eq(expected_config_version) {
        return Err(format!(
            "Unrecognized config_version: {}, expect {}",
            root.config_version, expected_config_version
        )
        .into());
    }
    if !root.extra.is_empty() {
        return Err(format!("Unrecognized top-level fields: {:?}", sorted_keys(&root.extra)).into());
    }

    let mut cfg = TrxConfig {
        debug_log: root.debug_log,
        ..TrxConfig::default()
    };

    for ts in root.timeslot {
        if !ts.extra.is_empty() {
            return Err(format!("Unrecognized fields in timeslot: {:?}", sorted_keys(&ts.extra)).into());
        }
        let Some(slot) = cfg.timeslots.get_mut(ts.index as usize) else {
            return Err(format!("Timeslot index {} out of range 0..=7", ts.index).into());
        };
        if slot.is_some() {
            return Err(format!("Timeslot {} configured twice", ts.index).into());
        }
        *slot = Some(ts.pchan);
    }

    Ok(cfg)
}

/// Build `TrxConfig` from any reader.
pub fn from_reader<R: Read>(reader: R) -> Result<TrxConfig, Box<dyn std::error::Error>> {
    let mut contents = String::new();
    let mut reader = BufReader::new(reader);
    reader.read_to_string(&mut contents)?;
    from_toml_str(&contents)
}

/// Build `TrxConfig` from a file path.
pub fn from_file<P: AsRef<Path>>(path: P) -> Result<TrxConfig, Box<dyn std::error::Error>> {
    let f = File::open(path)?;
    let r = BufReader::new(f);
    from_reader(r)
}

fn sorted_keys(map: &HashMap<String, Value>) -> Vec<&str> {
    let mut v: Vec<&str> = map.keys().map(|s| s.as_str()).collect();
    v.sort_unstable();
    v
}

/// ----------------------- DTOs for input shape -----------------------

#[derive(Deserialize)]
struct TomlConfigRoot {
    config_version: String,
    debug_log: Option<String>,

    #[serde(default)]
    timeslot: Vec<TimeslotDto>,

    #[serde(flatten)]
    extra: HashMap<String, Value>,
}

#[derive(Deserialize)]
struct TimeslotDto {
    index: u8,
    pchan: PchanConfig,

    #[serde(flatten)]
    extra: HashMap<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    const GOOD_CONFIG: &str = r#"
        config_version = "0.3"

        [[timeslot]]
        index = 0
        pchan = "CcchSdcch4"

        [[timeslot]]
        index = 2
        pchan = "TchF"
    "#;

    #[test]
    fn test_load_good_config() {
        let cfg = from_toml_str(GOOD_CONFIG).unwrap();
        assert_eq!(cfg.debug_log, None);
        assert_eq!(cfg.num_configured(), 2);
        assert_eq!(cfg.timeslots[0], Some(PchanConfig::CcchSdcch4));
        assert_eq!(cfg.timeslots[2], Some(PchanConfig::TchF));
        assert_eq!(cfg.timeslots[1], None);
    }

    #[test]
    fn test_reject_wrong_version() {
        let toml = r#"config_version = "9.9""#;
        assert!(from_toml_str(toml).is_err());
    }

    #[test]
    fn test_reject_unknown_fields() {
        let toml = r#"
            config_version = "0.3"
            frobnicate = true
        "#;
        let err = from_toml_str(toml).unwrap_err();
        assert!(err.to_string().contains("frobnicate"));
    }

    #[test]
    fn test_reject_out_of_range_timeslot() {
        let toml = r#"
            config_version = "0.3"

            [[timeslot]]
            index = 8
            pchan = "Sdcch8"
        "#;
        assert!(from_toml_str(toml).is_err());
    }

    #[test]
    fn test_reject_duplicate_timeslot() {
        let toml = r#"
            config_version = "0.3"

            [[timeslot]]
            index = 1
            pchan = "Sdcch8"

            [[timeslot]]
            index = 1
            pchan = "TchF"
        "#;
        assert!(from_toml_str(toml).is_err());
    }

    #[test]
    fn test_reject_unknown_pchan() {
        let toml = r#"
            config_version = "0.3"

            [[timeslot]]
            index = 1
            pchan = "CbchSdcch4"
        "#;
        assert!(from_toml_str(toml).is_err());
    }
}
