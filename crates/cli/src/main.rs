use std::fs;
use std::io::Read;
use std::process::ExitCode;

use clap::Parser;
use sqlpretty_lib::FormatConfig;

mod commands;

use commands::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();

    // the library reports config corrections (e.g. a non-positive lineWidth)
    // through `log::warn!`; route them to stderr
    if let Err(err) = fern::Dispatch::new()
        .level(log::LevelFilter::Warn)
        .chain(std::io::stderr())
        .apply()
    {
        eprintln!("sqlpretty: failed to initialise logging: {err}");
    }

    match run(&cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            eprintln!("sqlpretty: {err}");
            ExitCode::FAILURE
        }
    }
}

/// Returns whether every input was clean (always true outside `--check`).
fn run(cli: &Cli) -> Result<bool, String> {
    let config = load_config(cli)?;
    let use_stdin =
        cli.paths.is_empty() || (cli.paths.len() == 1 && cli.paths[0].as_os_str() == "-");

    if use_stdin {
        let mut source = String::new();
        std::io::stdin()
            .read_to_string(&mut source)
            .map_err(|err| format!("reading stdin: {err}"))?;

        let formatted = sqlpretty_lib::format(&source, &config).map_err(|err| err.to_string())?;
        if cli.check {
            return Ok(source.trim_end() == formatted);
        }
        println!("{formatted}");
        return Ok(true);
    }

    let mut clean = true;
    for path in &cli.paths {
        let source = fs::read_to_string(path)
            .map_err(|err| format!("reading {}: {err}", path.display()))?;
        let formatted = sqlpretty_lib::format(&source, &config)
            .map_err(|err| format!("{}: {err}", path.display()))?;

        if cli.check {
            if source.trim_end() != formatted {
                eprintln!("{} is not formatted", path.display());
                clean = false;
            }
        } else if cli.write {
            fs::write(path, format!("{formatted}\n"))
                .map_err(|err| format!("writing {}: {err}", path.display()))?;
        } else {
            println!("{formatted}");
        }
    }

    Ok(clean)
}

fn load_config(cli: &Cli) -> Result<FormatConfig, String> {
    let mut config = match &cli.config {
        Some(path) => {
            let text = fs::read_to_string(path)
                .map_err(|err| format!("reading {}: {err}", path.display()))?;
            serde_json::from_str(&text)
                .map_err(|err| format!("parsing {}: {err}", path.display()))?
        }
        None => FormatConfig::default(),
    };

    if let Some(dialect) = &cli.dialect {
        config.language = dialect.clone();
    }

    Ok(config)
}
