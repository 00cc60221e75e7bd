mod members;
mod splitter;

#[cfg(test)]
mod tests;

pub use members::MemberParser;
pub use splitter::{is_balanced, split_generic, split_top_level};
