//! Configuration Tests.

use std::io::Write;

use mips_core::common::SimError;
use mips_core::config::Config;
use pretty_assertions::assert_eq;

use crate::common::harness::ok;

#[test]
fn empty_object_is_all_defaults() {
    let config = ok(Config::from_json_str("{}"));
    assert_eq!(config, Config::default());
    assert_eq!(config.general.max_cycles, 1_000_000);
    assert_eq!(config.general.reset_vector, 0);
    assert!(!config.general.trace_instructions);
    assert_eq!(config.memory.instruction_base, 0);
}

#[test]
fn partial_sections_keep_other_defaults() {
    let config = ok(Config::from_json_str(
        r#"{ "memory": { "instruction_base": 8192 } }"#,
    ));
    assert_eq!(config.memory.instruction_base, 0x2000);
    assert_eq!(config.memory.data_base, 0);
    assert_eq!(config.general, Config::default().general);
}

#[test]
fn wrong_types_are_config_errors() {
    let result = Config::from_json_str(r#"{ "general": { "max_cycles": "lots" } }"#);
    assert!(matches!(result, Err(SimError::Config(_))));
}

#[test]
fn loads_from_file() {
    let mut file = ok(tempfile::NamedTempFile::new());
    ok(file.write_all(br#"{ "general": { "trace_instructions": true } }"#));
    ok(file.flush());

    let config = ok(Config::from_file(file.path()));
    assert!(config.general.trace_instructions);
}

#[test]
fn missing_file_is_io_error() {
    let dir = ok(tempfile::tempdir());
    assert!(matches!(
        Config::from_file(dir.path().join("nope.json")),
        Err(SimError::Io { .. })
    ));
}
