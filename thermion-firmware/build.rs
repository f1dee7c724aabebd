//! Build script for thermion-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates thermometer.toml at compile time
//! - Generates the board configuration constant

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use thermion_core::config::{ConfigError, ThermometerConfig};

fn main() {
    setup_linker();
    let config = validate_config();
    generate_config(&config);
}

/// Set up linker search paths for memory.x
fn setup_linker() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    // Copy memory.x to the output directory
    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    // Tell rustc where to find memory.x
    println!("cargo:rustc-link-search={}", out_dir.display());

    println!("cargo:rustc-link-arg-bins=--nmagic");
    println!("cargo:rustc-link-arg-bins=-Tlink.x");
    println!("cargo:rustc-link-arg-bins=-Tlink-rp.x");
    if env::var_os("CARGO_FEATURE_DEFMT").is_some() {
        println!("cargo:rustc-link-arg-bins=-Tdefmt.x");
    }

    // Re-run if memory.x changes
    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Validate thermometer.toml and return the parsed configuration
fn validate_config() -> ThermometerConfig {
    println!("cargo:rerun-if-changed=thermometer.toml");

    let config_path = Path::new("thermometer.toml");

    if !config_path.exists() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: thermometer.toml not found!                              ║\n\
            ║                                                                  ║\n\
            ║  The firmware requires a thermometer.toml configuration file.    ║\n\
            ║  Please create one in the thermion-firmware directory.           ║\n\
            ╚══════════════════════════════════════════════════════════════════╝\n"
        );
    }

    let config_content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Failed to read thermometer.toml                          ║\n\
                ║                                                                  ║\n\
                ║  Error: {:<56} ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                e
            );
        }
    };

    // Parse and validate TOML syntax
    let document: toml::Value = match toml::from_str(&config_content) {
        Ok(value) => value,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Invalid TOML syntax in thermometer.toml                  ║\n\
                ╠══════════════════════════════════════════════════════════════════╣\n\
                {}\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                format_error_lines(&e.to_string())
            );
        }
    };

    let section = match document.get("thermometer") {
        Some(toml::Value::Table(t)) => toml::Value::Table(t.clone()),
        Some(_) => fail_section("[thermometer] must be a table"),
        None => fail_section("Missing [thermometer] section"),
    };

    // Missing keys fall back to the defaults, unknown keys are rejected
    let config: ThermometerConfig = match section.try_into() {
        Ok(config) => config,
        Err(e) => fail_section(&e.to_string()),
    };

    if let Err(e) = config.validate() {
        fail_section(describe(e));
    }

    println!("cargo:warning=thermometer.toml validated successfully");
    config
}

/// Explain a range check failure
fn describe(error: ConfigError) -> &'static str {
    match error {
        ConfigError::AddressPinsOutOfRange => "address_pins must be 0-7",
        ConfigError::SettleTooShort => "settle_us must be at least 5",
        ConfigError::PollIntervalTooShort => "poll_interval_ms must be at least 10",
        ConfigError::PowerOnValueOutOfRange => "power_on_value must be 0-99",
    }
}

/// Abort the build with a boxed error about the [thermometer] section
fn fail_section(msg: &str) -> ! {
    panic!(
        "\n\
        ╔══════════════════════════════════════════════════════════════════╗\n\
        ║  ERROR: Invalid thermometer configuration                        ║\n\
        ╠══════════════════════════════════════════════════════════════════╣\n\
        {}\n\
        ╚══════════════════════════════════════════════════════════════════╝\n",
        format_error_lines(msg)
    );
}

/// Format error message lines with box drawing
fn format_error_lines(msg: &str) -> String {
    msg.lines()
        .map(|line| {
            let truncated = if line.len() > 64 {
                format!("{}...", &line[..61])
            } else {
                line.to_string()
            };
            format!("║  {:<64} ║", truncated)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Write the validated configuration as a Rust constant
fn generate_config(config: &ThermometerConfig) {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    let mut f = File::create(out_dir.join("thermometer_config.rs")).unwrap();

    writeln!(f, "/// Board configuration from thermometer.toml").unwrap();
    writeln!(f, "pub const BOARD_CONFIG: ThermometerConfig = ThermometerConfig {{").unwrap();
    writeln!(f, "    address_pins: {},", config.address_pins).unwrap();
    writeln!(f, "    settle_us: {},", config.settle_us).unwrap();
    writeln!(f, "    poll_interval_ms: {},", config.poll_interval_ms).unwrap();
    writeln!(f, "    power_on_value: {},", config.power_on_value).unwrap();
    writeln!(f, "}};").unwrap();
}
