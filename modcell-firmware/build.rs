//! Build script for modcell-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates cell.toml and compiles it into the firmware

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use modcell_core::config::CellConfig;

/// Keys accepted in cell.toml, per table ("" is the top level)
const KNOWN_KEYS: &[(&str, &[&str])] = &[
    ("", &["tick_interval_ms", "baudrate", "sensors", "watchdog"]),
    (
        "sensors",
        &[
            "light_barrier_inverted",
            "home_switch_inverted",
            "quarter_switch_inverted",
        ],
    ),
    (
        "watchdog",
        &[
            "rotation_timeout_ms",
            "handshake_timeout_ms",
            "translation_timeout_ms",
        ],
    ),
];

fn main() {
    setup_linker();
    let config = validate_config();
    generate_config(&config);
}

/// Set up linker search paths for memory.x
fn setup_linker() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    println!("cargo:rustc-link-search={}", out_dir.display());

    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Validate cell.toml at compile time
fn validate_config() -> CellConfig {
    println!("cargo:rerun-if-changed=cell.toml");

    let config_path = Path::new("cell.toml");

    if !config_path.exists() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: cell.toml not found!                                     ║\n\
            ║                                                                  ║\n\
            ║  The firmware requires a cell.toml configuration file.           ║\n\
            ║  Please create one in the modcell-firmware directory.            ║\n\
            ╚══════════════════════════════════════════════════════════════════╝\n"
        );
    }

    let content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Failed to read cell.toml                                 ║\n\
                ║                                                                  ║\n\
                ║  Error: {:<56} ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                e
            );
        }
    };

    let value: toml::Value = match toml::from_str(&content) {
        Ok(value) => value,
        Err(e) => fail("Invalid TOML syntax in cell.toml", &e.to_string()),
    };

    check_unknown_keys(&value);

    let config: CellConfig = match value.try_into() {
        Ok(config) => config,
        Err(e) => fail("Invalid value in cell.toml", &e.to_string()),
    };

    if let Err(e) = config.validate() {
        fail("Rejected configuration in cell.toml", &format!("{:?}", e));
    }

    println!("cargo:warning=cell.toml validated successfully");
    config
}

/// Reject keys the firmware would silently ignore
fn check_unknown_keys(value: &toml::Value) {
    let mut errors = Vec::new();

    for (table, known) in KNOWN_KEYS {
        let entries = if table.is_empty() {
            value.as_table()
        } else {
            value.get(table).and_then(toml::Value::as_table)
        };
        let Some(entries) = entries else {
            continue;
        };

        for key in entries.keys() {
            if !known.contains(&key.as_str()) {
                if table.is_empty() {
                    errors.push(format!("Unknown key `{}`", key));
                } else {
                    errors.push(format!("Unknown key `{}.{}`", table, key));
                }
            }
        }
    }

    if !errors.is_empty() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: Unknown keys in cell.toml                                ║\n\
            ╠══════════════════════════════════════════════════════════════════╣\n\
            {}\n\
            ╚══════════════════════════════════════════════════════════════════╝\n",
            errors
                .iter()
                .map(|e| format!("║  • {:<62} ║", e))
                .collect::<Vec<_>>()
                .join("\n")
        );
    }
}

/// Abort the build with a framed error
fn fail(title: &str, detail: &str) -> ! {
    panic!(
        "\n\
        ╔══════════════════════════════════════════════════════════════════╗\n\
        ║  ERROR: {:<56} ║\n\
        ╠══════════════════════════════════════════════════════════════════╣\n\
        ║                                                                  ║\n\
        {}\n\
        ║                                                                  ║\n\
        ╚══════════════════════════════════════════════════════════════════╝\n",
        title,
        format_error_lines(detail)
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

/// Emit the validated configuration as a Rust constant
fn generate_config(config: &CellConfig) {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    let sensors = &config.sensors;
    let watchdog = &config.watchdog;

    let code = format!(
        "/// Configuration compiled from cell.toml\n\
         pub const CELL_CONFIG: modcell_core::config::CellConfig = modcell_core::config::CellConfig {{\n    \
             tick_interval_ms: {},\n    \
             baudrate: {},\n    \
             sensors: modcell_core::config::SensorPolarity {{\n        \
                 light_barrier_inverted: {},\n        \
                 home_switch_inverted: {},\n        \
                 quarter_switch_inverted: {},\n    \
             }},\n    \
             watchdog: modcell_core::config::WatchdogConfig {{\n        \
                 rotation_timeout_ms: {:?},\n        \
                 handshake_timeout_ms: {:?},\n        \
                 translation_timeout_ms: {:?},\n    \
             }},\n\
         }};\n",
        config.tick_interval_ms,
        config.baudrate,
        sensors.light_barrier_inverted,
        sensors.home_switch_inverted,
        sensors.quarter_switch_inverted,
        watchdog.rotation_timeout_ms,
        watchdog.handshake_timeout_ms,
        watchdog.translation_timeout_ms,
    );

    fs::write(out_dir.join("cell_config.rs"), code).unwrap();
}
