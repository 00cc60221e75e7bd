mod kotlin;
mod writer;


pub use writer::CodeWriter;

use super::ast::BuilderModule;

/// Comment block written above generated files.
#[derive(Debug, Clone, PartialEq, Eq, bon::Builder)]
pub struct FileHeader {
  #[builder(into)]
  pub source: String,
  #[builder(into)]
  pub generator: Option<String>,
}

impl FileHeader {
  pub fn lines(&self) -> Vec<String> {
    let generator = self.generator.as_deref().unwrap_or(env!("CARGO_PKG_NAME"));
    vec![
      format!("// Generated by {generator}. Do not edit."),
      format!("// Source: {}", self.source),
    ]
  }
}

/// Renders a builder module as Kotlin source.
pub struct KotlinRenderer;

impl KotlinRenderer {
  pub fn render(module: &BuilderModule) -> String {
    kotlin::render_module(module, None)
  }

  pub fn render_with_header(module: &BuilderModule, header: &FileHeader) -> String {
    kotlin::render_module(module, Some(header))
  }
}
