//! Configuration tests: defaults and JSON deserialization.

use rv32sim_core::Config;

#[test]
fn default_configuration() {
    let config = Config::default();
    assert_eq!(config.general.start_pc, 0);
    assert!(!config.general.trace);
    assert_eq!(config.general.max_cycles, None);
    assert_eq!(config.memory.dmem_limit, None);
}

#[test]
fn partial_json_overrides_defaults() {
    let config = Config::from_json(r#"{"general":{"max_cycles":1000,"trace":true}}"#).unwrap();
    assert_eq!(config.general.max_cycles, Some(1000));
    assert!(config.general.trace);
    assert_eq!(config.general.start_pc, 0, "unset fields keep defaults");
}

#[test]
fn memory_section_deserializes() {
    let config = Config::from_json(r#"{"memory":{"dmem_limit":65536}}"#).unwrap();
    assert_eq!(config.memory.dmem_limit, Some(65536));
}

#[test]
fn empty_document_is_the_default_config() {
    let config = Config::from_json("{}").unwrap();
    assert_eq!(config.general.max_cycles, None);
    assert_eq!(config.memory.dmem_limit, None);
}

#[test]
fn malformed_json_is_rejected() {
    assert!(Config::from_json(r#"{"general":{"start_pc":"zero"}}"#).is_err());
}
