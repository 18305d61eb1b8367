//! Tests for layered configuration loading.

use std::io::Write;

use figment::Jail;

use crate::config::{GraphPathConfig, OutputFormat, CONFIG_FILE_NAME};
use crate::error::Error;

#[test]
fn test_defaults() {
    let config = GraphPathConfig::default();
    assert_eq!(config.log_level, "warn");
    assert_eq!(config.display.precision, 1);
    assert_eq!(config.display.infinity_symbol, "∞");
    assert_eq!(config.display.format, OutputFormat::Table);
    assert!(config.display.color);
}

#[test]
fn test_partial_toml_keeps_defaults() {
    let config = GraphPathConfig::from_toml_str(
        r#"
        [display]
        precision = 3
        format = "json"
        "#,
    )
    .unwrap();

    assert_eq!(config.display.precision, 3);
    assert_eq!(config.display.format, OutputFormat::Json);
    assert_eq!(config.display.infinity_symbol, "∞");
    assert_eq!(config.log_level, "warn");
}

#[test]
fn test_precision_out_of_range_rejected() {
    let err = GraphPathConfig::from_toml_str("[display]\nprecision = 42\n").unwrap_err();
    assert!(matches!(err, Error::Config(_)));
    assert!(err.to_string().contains("precision"));
}

#[test]
fn test_empty_infinity_symbol_rejected() {
    let err = GraphPathConfig::from_toml_str("[display]\ninfinity_symbol = \"\"\n").unwrap_err();
    assert_eq!(err.code(), "CONFIG");
}

#[test]
fn test_malformed_toml_is_config_error() {
    let err = GraphPathConfig::from_toml_str("[display\nprecision = ").unwrap_err();
    assert!(matches!(err, Error::Config(_)));
}

// Tests that read the environment run inside a `Jail` so they serialize with
// the test that sets `GRAPHPATH_*` variables.

#[test]
fn test_load_explicit_file() {
    Jail::expect_with(|_jail| {
        let mut file = tempfile::NamedTempFile::new().map_err(|e| e.to_string())?;
        writeln!(file, "log_level = \"debug\"").map_err(|e| e.to_string())?;
        writeln!(file, "[display]").map_err(|e| e.to_string())?;
        writeln!(file, "infinity_symbol = \"inf\"").map_err(|e| e.to_string())?;

        let config = GraphPathConfig::load(Some(file.path())).map_err(|e| e.to_string())?;

        assert_eq!(config.log_level, "debug");
        assert_eq!(config.display.infinity_symbol, "inf");
        assert_eq!(config.display.precision, 1);
        Ok(())
    });
}

#[test]
fn test_missing_file_falls_back_to_defaults() {
    Jail::expect_with(|jail| {
        let path = jail.directory().join("absent.toml");
        let config = GraphPathConfig::load(Some(&path)).map_err(|e| e.to_string())?;
        assert_eq!(config, GraphPathConfig::default());
        Ok(())
    });
}

#[test]
fn test_env_overrides_file() {
    Jail::expect_with(|jail| {
        jail.create_file(
            CONFIG_FILE_NAME,
            r#"
            [display]
            precision = 2
            color = true
            "#,
        )?;
        jail.set_env("GRAPHPATH_DISPLAY__COLOR", "false");
        jail.set_env("GRAPHPATH_LOG_LEVEL", "trace");

        let path = jail.directory().join(CONFIG_FILE_NAME);
        let config = GraphPathConfig::load(Some(&path)).map_err(|e| e.to_string())?;

        assert_eq!(config.display.precision, 2);
        assert!(!config.display.color);
        assert_eq!(config.log_level, "trace");
        Ok(())
    });
}

#[test]
fn test_no_path_ignores_working_directory_file() {
    Jail::expect_with(|jail| {
        jail.create_file(CONFIG_FILE_NAME, "[display]\nprecision = 99\n")?;
        jail.create_file("graphpath.toml", "[display]\nprecision = 99\n")?;

        let config = GraphPathConfig::load(None).map_err(|e| e.to_string())?;
        assert_eq!(config, GraphPathConfig::default());
        Ok(())
    });
}

#[test]
fn test_no_path_still_reads_env() {
    Jail::expect_with(|jail| {
        jail.set_env("GRAPHPATH_DISPLAY__PRECISION", "3");
        let config = GraphPathConfig::load(None).map_err(|e| e.to_string())?;
        assert_eq!(config.display.precision, 3);
        Ok(())
    });
}

#[test]
fn test_output_format_from_str() {
    assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
    assert_eq!("table".parse::<OutputFormat>().unwrap(), OutputFormat::Table);
    assert!("xml".parse::<OutputFormat>().is_err());
}

#[test]
fn test_toml_output_parses_back() {
    let mut config = GraphPathConfig::default();
    config.display.precision = 4;
    config.display.format = OutputFormat::Json;

    let text = config.to_toml_string().unwrap();
    assert!(text.contains("precision = 4"));
    assert!(text.contains("format = \"json\""));

    assert_eq!(GraphPathConfig::from_toml_str(&text).unwrap(), config);
}
