use std::path::PathBuf;

use anyhow::Context;
use chrono::{Local, Timelike};
use crossterm::style::Stylize;
use databuilder_gen::generator::{
  converter::BuilderConfig,
  metrics::GenerationStats,
  orchestrator::{GeneratedFile, Orchestrator, OutputFormat},
};

use super::load_dump;
use crate::ui::{Colors, GenerateCommand};

fn format_timestamp() -> String {
  let now = Local::now();
  format!("[{:02}:{:02}:{:02}]", now.hour(), now.minute(), now.second())
}

#[derive(Debug, Clone)]
pub struct GenerateConfig {
  pub input: PathBuf,
  pub output: PathBuf,
  pub format: OutputFormat,
  pub builder: BuilderConfig,
  pub only: Option<Vec<String>>,
  pub verbose: bool,
  pub quiet: bool,
}

impl GenerateConfig {
  pub fn from_command(command: GenerateCommand) -> anyhow::Result<Self> {
    let GenerateCommand {
      input,
      output,
      format,
      setter_style,
      factory_name,
      only,
      verbose,
      quiet,
    } = command;

    anyhow::ensure!(!(verbose && quiet), "--verbose and --quiet cannot be combined");
    anyhow::ensure!(!factory_name.trim().is_empty(), "--factory-name must not be empty");

    let builder = BuilderConfig::builder()
      .setter_style(setter_style.into())
      .factory_name(factory_name.trim())
      .build();

    Ok(Self {
      input,
      output,
      format: format.into(),
      builder,
      only: only.filter(|names| !names.is_empty()),
      verbose,
      quiet,
    })
  }

  async fn write_files(&self, files: &[GeneratedFile]) -> anyhow::Result<()> {
    for file in files {
      let path = self.output.join(&file.path);
      if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent)
          .await
          .with_context(|| format!("failed to create {}", parent.display()))?;
      }
      tokio::fs::write(&path, &file.contents)
        .await
        .with_context(|| format!("failed to write {}", path.display()))?;
    }
    Ok(())
  }
}

struct GenerateLogger<'a> {
  config: &'a GenerateConfig,
  colors: &'a Colors,
}

impl<'a> GenerateLogger<'a> {
  fn new(config: &'a GenerateConfig, colors: &'a Colors) -> Self {
    Self { config, colors }
  }

  fn info(&self, message: &str) {
    if !self.config.quiet {
      println!("{} {message}", format_timestamp().with(self.colors.timestamp()));
    }
  }

  fn detail(&self, message: &str) {
    if self.config.verbose {
      println!("            {}", message.with(self.colors.muted()));
    }
  }

  fn stat(&self, label: &str, value: String) {
    if !self.config.quiet {
      println!(
        "            {:<25} {}",
        label.with(self.colors.label()),
        value.with(self.colors.value())
      );
    }
  }

  fn log_loading(&self) {
    self.info(
      &format!("Loading host dump from: {}", self.config.input.display())
        .with(self.colors.primary())
        .to_string(),
    );
  }

  fn log_generating(&self, declarations: usize) {
    let noun = if declarations == 1 { "declaration" } else { "declarations" };
    self.info(
      &format!("Generating builders for {declarations} {noun}...")
        .with(self.colors.primary())
        .to_string(),
    );
  }

  fn print_statistics(&self, stats: &GenerationStats) {
    if self.config.quiet {
      return;
    }

    self.stat("Declarations:", stats.declarations_seen.to_string());
    self.stat("Builders generated:", stats.builders_generated.to_string());
    self.stat("", format!("{} fields", stats.fields_generated));
    self.stat("", format!("{} lateinit", stats.deferred_fields));
    self.stat("", format!("{} build branches", stats.guarded_branches));
    if stats.factories_generated > 0 {
      self.stat("Companion factories:", stats.factories_generated.to_string());
    }
    let skipped = stats.skipped_count();
    if skipped > 0 {
      self.stat("Skipped:", skipped.to_string());
    }
    if !stats.warnings.is_empty() {
      self.stat("Warnings:", stats.warnings.len().to_string());
    }
    self.print_warnings(stats);
  }

  fn print_warnings(&self, stats: &GenerationStats) {
    for line in self.warning_lines(stats) {
      eprintln!("{line}");
    }
  }

  /// Skipped declarations always, other warnings only when verbose; led by a blank line when non-empty.
  fn warning_lines(&self, stats: &GenerationStats) -> Vec<String> {
    let mut lines = stats
      .warnings
      .iter()
      .filter(|warning| warning.is_skipped_item() || self.config.verbose)
      .map(|warning| {
        let tag = if warning.is_skipped_item() { "Skipped:" } else { "Warning:" };
        format!(
          "{} {}",
          tag.with(self.colors.accent()),
          warning.to_string().with(self.colors.primary())
        )
      })
      .collect::<Vec<_>>();
    if !lines.is_empty() {
      lines.insert(0, String::new());
    }
    lines
  }

  fn log_writing(&self, files: &[GeneratedFile]) {
    self.info(
      &format!("Writing {} file(s) to: {}", files.len(), self.config.output.display())
        .with(self.colors.primary())
        .to_string(),
    );
    for file in files {
      self.detail(&file.path.display().to_string());
    }
  }

  fn log_success(&self) {
    if !self.config.quiet {
      println!();
      println!(
        "{} {}",
        format_timestamp().with(self.colors.timestamp()),
        "Successfully generated builders".with(self.colors.success())
      );
    }
  }
}

pub async fn generate_code(config: GenerateConfig, colors: &Colors) -> anyhow::Result<()> {
  let logger = GenerateLogger::new(&config, colors);

  logger.log_loading();
  let dump = load_dump(&config.input).await?;

  let orchestrator = Orchestrator::new(dump, config.builder.clone(), config.only.clone())?;
  let source_label = config.input.display().to_string();

  logger.log_generating(orchestrator.summarize().len());
  let (files, stats) = orchestrator.generate_files(config.format, &source_label)?;
  logger.print_statistics(&stats);

  logger.log_writing(&files);
  config.write_files(&files).await?;

  logger.log_success();
  Ok(())
}

#[cfg(test)]
mod tests {
  use databuilder_gen::generator::metrics::GenerationWarning;

  use super::*;
  use crate::ui::{
    cli::{OutputFormatArg, SetterStyleArg},
    colors::Theme,
  };

  const DUMP: &str = r#"{
    "declarations": [
      {
        "name": "Person",
        "package": "com.example",
        "has_companion": true,
        "creator": { "companionable": true },
        "parameters": [
          { "name": "name", "type": "java.lang.String" },
          { "name": "age", "type": "int", "has_default": true }
        ]
      },
      { "name": "Broken", "package": "com.example" }
    ]
  }"#;

  fn command(input: PathBuf, output: PathBuf) -> GenerateCommand {
    GenerateCommand {
      input,
      output,
      format: OutputFormatArg::Kotlin,
      setter_style: SetterStyleArg::Set,
      factory_name: "builder".to_string(),
      only: None,
      verbose: false,
      quiet: true,
    }
  }

  #[test]
  fn test_from_command_maps_builder_options() {
    let mut cmd = command(PathBuf::from("in.json"), PathBuf::from("out"));
    cmd.setter_style = SetterStyleArg::With;
    cmd.factory_name = " create ".to_string();
    cmd.only = Some(vec![]);

    let config = GenerateConfig::from_command(cmd).unwrap();
    assert_eq!(config.builder.setter_style.prefix(), "with");
    assert_eq!(config.builder.factory_name, "create");
    assert_eq!(config.format, OutputFormat::Kotlin);
    assert!(config.only.is_none());
  }

  #[test]
  fn test_from_command_rejects_verbose_and_quiet() {
    let mut cmd = command(PathBuf::from("in.json"), PathBuf::from("out"));
    cmd.verbose = true;
    let err = GenerateConfig::from_command(cmd).unwrap_err();
    assert!(err.to_string().contains("cannot be combined"));
  }

  #[test]
  fn test_warning_lines_share_one_stream_and_respect_verbosity() {
    let mut stats = GenerationStats::default();
    stats.record_warning(GenerationWarning::DeclarationSkipped {
      declaration: "Broken".to_string(),
      error: "no parameters".to_string(),
    });
    stats.record_warning(GenerationWarning::UnknownMarkerField {
      declaration: "Person".to_string(),
      field: "ghost".to_string(),
    });
    let colors = Colors::new(false, Theme::Dark);

    let mut config = GenerateConfig::from_command(command(PathBuf::from("in.json"), PathBuf::from("out"))).unwrap();
    config.quiet = false;
    let lines = GenerateLogger::new(&config, &colors).warning_lines(&stats);
    assert_eq!(lines.len(), 2);
    assert!(lines[0].is_empty());
    assert!(lines[1].contains("Skipped:") && lines[1].contains("Broken"));

    config.verbose = true;
    let lines = GenerateLogger::new(&config, &colors).warning_lines(&stats);
    assert_eq!(lines.len(), 3);
    assert!(lines[2].contains("Warning:") && lines[2].contains("ghost"));

    let empty = GenerateLogger::new(&config, &colors).warning_lines(&GenerationStats::default());
    assert!(empty.is_empty());
  }

  #[tokio::test]
  async fn test_generate_code_writes_package_tree() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("dump.json");
    tokio::fs::write(&input, DUMP).await.unwrap();
    let output = dir.path().join("out");

    let config = GenerateConfig::from_command(command(input, output.clone())).unwrap();
    generate_code(config, &Colors::new(false, Theme::Dark)).await.unwrap();

    let written = tokio::fs::read_to_string(output.join("com/example/PersonExtension.kt"))
      .await
      .unwrap();
    assert!(written.contains("fun Person.Companion.builder(): PersonBuilder = PersonBuilder()"));
    assert!(written.contains("age != 0 -> Person(name = this.name, age = this.age)"));
    assert!(!output.join("com/example/BrokenExtension.kt").exists());
  }

  #[tokio::test]
  async fn test_generate_code_reports_unreadable_input() {
    let dir = tempfile::tempdir().unwrap();
    let config = GenerateConfig::from_command(command(dir.path().join("missing.json"), dir.path().join("out"))).unwrap();
    let err = generate_code(config, &Colors::new(false, Theme::Dark)).await.unwrap_err();
    assert!(err.to_string().contains("failed to read host dump"));
  }
}
