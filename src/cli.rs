use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "habitscore",
    version,
    about = "Lifestyle risk barometer for a child's survey answers"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Score an answers file and print the report
    Evaluate(RunArgs),
    /// Write a default habitscore.toml to the current directory
    Init(InitArgs),
    /// Write a starter answers file with every question at its healthiest label
    Template(TemplateArgs),
    /// Print the questionnaire with every answer label
    Questions,
}

#[derive(Debug, Args, Clone)]
pub struct RunArgs {
    pub input: PathBuf,
    #[arg(long)]
    pub config: Option<PathBuf>,
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct InitArgs {
    #[arg(long)]
    pub config: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct TemplateArgs {
    #[arg(long, default_value = "answers.toml")]
    pub path: PathBuf,
}
