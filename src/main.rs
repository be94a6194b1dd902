use clap::Parser;
use isogram_check::utils::{logger, validation::Validate};
use isogram_check::{render, CheckEngine, CliConfig, IsogramError, TomlConfig};

fn main() {
    let mut config = CliConfig::parse();

    if config.json_logs {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = prepare(&mut config) {
        fail(&e);
    }

    let engine = CheckEngine::from_config(config.input_source(), &config);
    let report = match engine.run() {
        Ok(report) => report,
        Err(e) => fail(&e),
    };

    let rendered = match render(&report, config.output_format()) {
        Ok(rendered) => rendered,
        Err(e) => fail(&e),
    };
    if !rendered.is_empty() {
        println!("{}", rendered);
    }

    if !report.all_isograms() {
        std::process::exit(1);
    }
}

/// Validates flags, then layers the config file under them.
fn prepare(config: &mut CliConfig) -> isogram_check::Result<()> {
    config.validate()?;
    if let Some(path) = config.config.clone() {
        let file = TomlConfig::from_file(&path)?;
        file.validate()?;
        tracing::debug!("Loaded config from {}", path);
        config.merge_file(&file);
    }
    Ok(())
}

fn fail(e: &IsogramError) -> ! {
    tracing::error!("{}", e);
    eprintln!("error: {}", e.user_friendly_message());
    std::process::exit(e.exit_code());
}
