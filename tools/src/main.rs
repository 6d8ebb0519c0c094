//! iban-runner: headless front end for ibanforge-core.
//!
//! Usage:
//!   iban-runner --country DE --seed 1234
//!   iban-runner --validate "DE89 3704 0044 0532 0130 00"
//!   iban-runner --ipc-mode [--config engine.json]

use anyhow::Result;
use ibanforge_core::{
    wire::{handle_generate, handle_validate, GenerateQuery, ValidateQuery, WireResponse},
    EngineConfig,
};
use std::env;
use std::io::{self, BufRead, Write};

#[derive(serde::Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum IpcCommand {
    Generate {
        country: Option<String>,
        seed: Option<String>,
    },
    Validate {
        iban: Option<String>,
    },
    Quit,
}

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let config = match string_arg(&args, "--config") {
        Some(path) => EngineConfig::load(&path)?,
        None => EngineConfig::default(),
    };

    if args.iter().any(|a| a == "--ipc-mode") {
        return run_ipc_loop(&config);
    }

    let response = if let Some(iban) = string_arg(&args, "--validate") {
        handle_validate(&ValidateQuery { iban: Some(iban) }, &config)
    } else {
        let query = GenerateQuery {
            country: string_arg(&args, "--country"),
            seed: string_arg(&args, "--seed"),
        };
        handle_generate(&query, &config)
    };

    println!("{}", serde_json::to_string_pretty(&response.body)?);
    if response.status != 200 {
        std::process::exit(2);
    }
    Ok(())
}

fn run_ipc_loop(config: &EngineConfig) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut handle = stdin.lock();
    let mut buffer = String::new();

    loop {
        buffer.clear();
        let bytes_read = handle.read_line(&mut buffer)?;
        if bytes_read == 0 {
            break; // EOF
        }
        if buffer.trim().is_empty() {
            continue;
        }

        let cmd: IpcCommand = match serde_json::from_str(&buffer) {
            Ok(c) => c,
            Err(e) => {
                let err_json = serde_json::json!({ "error": e.to_string() });
                writeln!(stdout, "{}", err_json)?;
                stdout.flush()?;
                continue;
            }
        };

        let response: WireResponse = match cmd {
            IpcCommand::Quit => break,
            IpcCommand::Generate { country, seed } => {
                handle_generate(&GenerateQuery { country, seed }, config)
            }
            IpcCommand::Validate { iban } => handle_validate(&ValidateQuery { iban }, config),
        };
        log::debug!("ipc response status {}", response.status);
        writeln!(stdout, "{}", serde_json::to_string(&response)?)?;
        stdout.flush()?;
    }
    Ok(())
}

fn string_arg(args: &[String], flag: &str) -> Option<String> {
    args.windows(2)
        .find(|w| w[0] == flag)
        .map(|w| w[1].clone())
}
