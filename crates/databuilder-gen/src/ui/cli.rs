use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use databuilder_gen::generator::{converter::SetterStyle, orchestrator::OutputFormat};

use super::colors::{ColorMode, Colors, ThemeMode};

#[derive(Parser, Debug)]
#[command(name = "databuilder-gen")]
#[command(author, version, about = "Kotlin data class builder generator")]
#[command(styles = Colors::clap_styles())]
pub struct Cli {
  #[command(subcommand)]
  pub command: Commands,

  /// Control color output
  #[arg(long, value_enum, default_value = "auto", global = true)]
  pub color: ColorMode,

  /// Terminal theme (dark or light background)
  #[arg(long, value_enum, default_value = "auto", global = true)]
  pub theme: ThemeMode,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
  /// List declarations and fields from a host dump
  List {
    #[command(subcommand)]
    list_command: ListCommands,
  },
  /// Generate builders from a host dump
  Generate(GenerateCommand),
}

#[derive(Args, Debug, Clone)]
pub struct GenerateCommand {
  /// Path to the host dump JSON file
  #[arg(short, long, value_name = "FILE")]
  pub input: PathBuf,

  /// Directory the generated files are written under, one subdirectory per package segment
  #[arg(short, long, value_name = "DIR")]
  pub output: PathBuf,

  /// What to write for each declaration
  #[arg(short, long, value_enum, default_value = "kotlin")]
  pub format: OutputFormatArg,

  /// Prefix of the generated setters
  #[arg(long, value_enum, default_value = "set")]
  pub setter_style: SetterStyleArg,

  /// Name of the companion factory function
  #[arg(long, value_name = "NAME", default_value = "builder")]
  pub factory_name: String,

  /// Generate only these declarations (comma-separated names)
  #[arg(long, value_name = "NAMES", value_delimiter = ',')]
  pub only: Option<Vec<String>>,

  /// Enable verbose output with detailed progress information
  #[arg(short, long, default_value_t = false)]
  pub verbose: bool,

  /// Suppress non-essential output (errors only)
  #[arg(short, long, default_value_t = false)]
  pub quiet: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum OutputFormatArg {
  Kotlin,
  Model,
}

impl From<OutputFormatArg> for OutputFormat {
  fn from(value: OutputFormatArg) -> Self {
    match value {
      OutputFormatArg::Kotlin => OutputFormat::Kotlin,
      OutputFormatArg::Model => OutputFormat::Model,
    }
  }
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum SetterStyleArg {
  Set,
  With,
}

impl From<SetterStyleArg> for SetterStyle {
  fn from(value: SetterStyleArg) -> Self {
    match value {
      SetterStyleArg::Set => SetterStyle::Set,
      SetterStyleArg::With => SetterStyle::With,
    }
  }
}

#[derive(Subcommand, Debug)]
pub enum ListCommands {
  /// List the declarations in a host dump
  Declarations {
    /// Path to the host dump JSON file
    #[arg(short, long, value_name = "FILE")]
    input: PathBuf,
  },
  /// List classified fields, for one declaration or all of them
  Fields {
    /// Path to the host dump JSON file
    #[arg(short, long, value_name = "FILE")]
    input: PathBuf,

    /// Only this declaration
    #[arg(short, long, value_name = "NAME")]
    declaration: Option<String>,
  },
}
