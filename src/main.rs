//! svg2xaml - convert icon-style SVG documents into WPF XAML resources.

use anyhow::{Context, Result};
use clap::Parser;
use std::fs;

use svg2xaml::cli::Cli;
use svg2xaml::config::Config;
use svg2xaml::convert::{apply_key, convert_document, reformat_svg};
use svg2xaml::key::finalize_key;
use svg2xaml::log;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli)?;
    run(&cli, &config)
}

/// Load configuration next to the invocation; a missing file means defaults.
fn load_config(cli: &Cli) -> Result<Config> {
    if cli.config.exists() {
        Config::from_path(&cli.config)
            .with_context(|| format!("failed to load config `{}`", cli.config.display()))
    } else {
        Ok(Config::default())
    }
}

fn run(cli: &Cli, config: &Config) -> Result<()> {
    let source = fs::read_to_string(&cli.input)
        .with_context(|| format!("failed to read `{}`", cli.input.display()))?;

    let xaml = convert_document(&source)
        .with_context(|| format!("failed to convert `{}`", cli.input.display()))?;

    let source_name = cli
        .input
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or_default();
    let key = finalize_key(cli.key.as_deref(), source_name, &config.key);
    let xaml = apply_key(&xaml, &key);

    if cli.print_source {
        log!("source"; "\n{}", reformat_svg(&source));
    }

    if cli.stdout {
        println!("{xaml}");
        return Ok(());
    }

    let output = cli
        .output
        .clone()
        .unwrap_or_else(|| cli.input.with_extension(config.output.extension.as_str()));
    fs::write(&output, &xaml)
        .with_context(|| format!("failed to write `{}`", output.display()))?;
    log!("convert"; "wrote `{}` (key: {key})", output.display());

    Ok(())
}
