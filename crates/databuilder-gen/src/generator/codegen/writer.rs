const INDENT: &str = "    ";

/// Line-oriented text buffer with Kotlin-style block indentation.
#[derive(Debug, Default)]
pub struct CodeWriter {
  buffer: String,
  depth: usize,
}

impl CodeWriter {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn line(&mut self, text: impl AsRef<str>) -> &mut Self {
    let text = text.as_ref();
    if !text.is_empty() {
      for _ in 0..self.depth {
        self.buffer.push_str(INDENT);
      }
      self.buffer.push_str(text);
    }
    self.buffer.push('\n');
    self
  }

  pub fn blank(&mut self) -> &mut Self {
    self.line("")
  }

  /// Writes `header {` and indents what follows.
  pub fn begin_block(&mut self, header: impl AsRef<str>) -> &mut Self {
    self.line(format!("{} {{", header.as_ref()));
    self.depth += 1;
    self
  }

  pub fn end_block(&mut self) -> &mut Self {
    self.depth = self.depth.saturating_sub(1);
    self.line("}")
  }

  pub fn finish(self) -> String {
    self.buffer
  }
}
