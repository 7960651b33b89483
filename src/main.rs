mod cli;
mod config;
mod core;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands, RunArgs};
use std::path::{Path, PathBuf};

fn main() {
    let exit_code = match run() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err:#}");
            2
        }
    };

    std::process::exit(exit_code);
}

fn run() -> Result<i32> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Evaluate(args) => run_evaluate(args),
        Commands::Init(args) => {
            if args.config.is_some() {
                eprintln!(
                    "warning: --config is ignored by `habitscore init`; writing ./habitscore.toml"
                );
            }

            let path = std::env::current_dir()?.join("habitscore.toml");
            config::write_default_config(&path)?;
            println!("created {}", path.display());
            Ok(0)
        }
        Commands::Template(args) => {
            core::survey::write_template(&args.path)?;
            println!("created {}", args.path.display());
            Ok(0)
        }
        Commands::Questions => {
            core::report::print_questionnaire();
            Ok(0)
        }
    }
}

fn run_evaluate(args: RunArgs) -> Result<i32> {
    let cwd = std::env::current_dir()?;
    let loaded = config::load_config(args.config.as_deref(), &cwd)?;
    let input = resolve_input(&cwd, &args.input);
    let answers = core::survey::load_answers(&input)?;
    let report = core::evaluate(&answers, &loaded.config)?;

    let output_json = args.json || loaded.config.general.json;
    if output_json {
        let json_report = core::report::JsonReport::from(&report);
        println!("{}", serde_json::to_string_pretty(&json_report)?);
    } else {
        core::report::print_human(&report, &loaded.config.report);
    }

    if report.exit.ok { Ok(0) } else { Ok(1) }
}

fn resolve_input(cwd: &Path, path: &PathBuf) -> PathBuf {
    if path.is_absolute() {
        path.clone()
    } else {
        cwd.join(path)
    }
}
