//! Presetwire CLI: encode preset files into share codes and decode share
//! codes back into presets.

use clap::{Parser, Subcommand};
use presetwire::exit_codes::{
    EXIT_ERROR, EXIT_FORMAT_ERROR, EXIT_INTEGRITY_ERROR, EXIT_IO_ERROR, EXIT_PANIC,
    EXIT_SUCCESS, EXIT_VALIDATION_ERROR,
};
use presetwire::{CanonicalPreset, ShareFormat, SharingError, decode_preset, encode_preset};
use serde::Deserialize;
use std::path::PathBuf;
use std::{panic, process};

#[derive(Parser, Debug)]
#[command(version = presetwire::version::full_version(), about = "Share codec for sound presets")]
struct Args {
    /// Log level (trace, debug, info, warn, error, or json:<level>)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Encode a preset JSON file into a share code
    Encode {
        /// Path to the preset JSON file
        preset: PathBuf,

        /// Emit the 18-character compact code instead of a link
        #[arg(long)]
        compact: bool,
    },
    /// Decode a share code and print the preset as JSON
    Decode {
        /// The pasted share code or link
        code: String,
    },
}

/// Store-shaped preset file: arrays may carry legacy 11/12-channel arity
#[derive(Debug, Deserialize)]
struct PresetFile {
    name: String,
    volumes: Vec<f32>,
    #[serde(default)]
    versions: Vec<u8>,
    emotion: Option<String>,
    description: Option<String>,
}

fn main() {
    panic::set_hook(Box::new(|panic_info| {
        eprintln!("PANIC: {panic_info}");
        process::exit(EXIT_PANIC);
    }));

    let result = panic::catch_unwind(run);

    match result {
        Ok(exit_code) => process::exit(exit_code),
        Err(_) => {
            eprintln!("Fatal: unhandled panic");
            process::exit(EXIT_PANIC);
        }
    }
}

fn run() -> i32 {
    let args = Args::parse();

    if let Some(ref level) = args.log_level {
        presetwire::logger::JsonLogger::init_with_level(level);
    } else {
        presetwire::logger::JsonLogger::init();
    }

    match args.command {
        Command::Encode { preset, compact } => {
            let data = match std::fs::read_to_string(&preset) {
                Ok(data) => data,
                Err(e) => {
                    eprintln!("Failed to read {}: {e}", preset.display());
                    return EXIT_IO_ERROR;
                }
            };
            let file: PresetFile = match serde_json::from_str(&data) {
                Ok(file) => file,
                Err(e) => {
                    eprintln!("Invalid preset file: {e}");
                    return EXIT_IO_ERROR;
                }
            };
            let canonical = CanonicalPreset::from_store(
                file.name,
                &file.volumes,
                &file.versions,
                file.emotion,
                file.description,
            );
            let format = if compact {
                ShareFormat::Compact
            } else {
                ShareFormat::Link
            };

            match encode_preset(&canonical, format) {
                Ok(code) => {
                    println!("{code}");
                    EXIT_SUCCESS
                }
                Err(e) => {
                    eprintln!("Encode error: {e}");
                    error_exit_code(e)
                }
            }
        }
        Command::Decode { code } => match decode_preset(&code) {
            Ok(preset) => {
                let out = serde_json::json!({
                    "name": preset.name,
                    "volumes": preset.volumes.to_vec(),
                    "versions": preset.versions.to_vec(),
                    "emotion": preset.emotion,
                    "description": preset.description,
                });
                println!("{out}");
                EXIT_SUCCESS
            }
            Err(e) => {
                eprintln!("Decode error: {e}");
                error_exit_code(e)
            }
        },
    }
}

fn error_exit_code(error: SharingError) -> i32 {
    match error {
        SharingError::InvalidFormat
        | SharingError::CorruptedData
        | SharingError::UnsupportedVersion
        | SharingError::CodeTooLong => EXIT_FORMAT_ERROR,
        SharingError::ChecksumMismatch | SharingError::Expired | SharingError::MaliciousCode => {
            EXIT_INTEGRITY_ERROR
        }
        SharingError::InvalidDataSize
        | SharingError::InvalidVolumeRange
        | SharingError::InvalidVersionRange => EXIT_VALIDATION_ERROR,
        SharingError::EncodingFailed => EXIT_ERROR,
    }
}
