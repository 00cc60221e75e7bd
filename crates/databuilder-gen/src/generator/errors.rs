/// Failures that abort generation for one declaration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GenerationError {
  #[error("member listing of '{declaration}' does not match its constructor")]
  ParseMismatch { declaration: String },
  #[error("'{declaration}' exposes neither constructor parameters nor a member listing")]
  NoParameters { declaration: String },
  #[error("field '{field}' is declared more than once in '{declaration}'")]
  DuplicateField { declaration: String, field: String },
  #[error("cannot classify field '{field}' of '{declaration}': {source}")]
  Classification {
    declaration: String,
    field: String,
    #[source]
    source: ClassificationError,
  },
}

impl GenerationError {
  pub fn declaration(&self) -> &str {
    match self {
      Self::ParseMismatch { declaration }
      | Self::NoParameters { declaration }
      | Self::DuplicateField { declaration, .. }
      | Self::Classification { declaration, .. } => declaration,
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClassificationError {
  #[error("'{outer}' takes {expected} type argument(s), found {found}")]
  Arity {
    outer: String,
    expected: usize,
    found: usize,
  },
}
