use std::path::Path;

use comfy_table::{Attribute, Cell, CellAlignment, ContentArrangement, Row, Table};
use databuilder_gen::generator::{
  converter::BuilderConfig,
  orchestrator::{DeclarationSummary, Orchestrator},
};

use super::load_dump;
use crate::ui::{Colors, colors::table_color, term_width};

fn new_table(colors: &Colors, headers: &[&str]) -> Table {
  let mut table = Table::new();
  table
    .load_preset("  ── ──            ")
    .set_content_arrangement(ContentArrangement::Dynamic)
    .set_width(term_width());

  let mut row = Row::new();
  for header in headers {
    row.add_cell(Cell::new(header).fg(table_color(colors.label())));
  }
  table.set_header(row);
  table
}

fn declarations_table(summaries: &[DeclarationSummary], colors: &Colors) -> Table {
  let mut table = new_table(colors, &["DECLARATION", "PACKAGE", "FIELDS", "FACTORY"]);

  for summary in summaries {
    let fields = match &summary.fields {
      Ok(fields) => Cell::new(fields.len()).fg(table_color(colors.value())),
      Err(_) => Cell::new("skipped").fg(table_color(colors.accent())),
    };

    let mut row = Row::new();
    row.add_cell(
      Cell::new(&summary.name)
        .fg(table_color(colors.value()))
        .add_attribute(Attribute::Bold),
    );
    row.add_cell(Cell::new(&summary.package).fg(table_color(colors.primary())));
    row.add_cell(fields.set_alignment(CellAlignment::Right));
    row.add_cell(Cell::new(if summary.has_factory { "yes" } else { "no" }).fg(table_color(colors.muted())));
    table.add_row(row);
  }

  table
}

fn fields_table(summaries: &[DeclarationSummary], colors: &Colors) -> Table {
  let mut table = new_table(colors, &["DECLARATION", "FIELD", "TYPE", "KIND", "INITIAL", "OPTIONAL"]);

  for summary in summaries {
    let fields = match &summary.fields {
      Ok(fields) => fields,
      Err(reason) => {
        let mut row = Row::new();
        row.add_cell(Cell::new(&summary.name).fg(table_color(colors.value())));
        row.add_cell(Cell::new(format!("skipped: {reason}")).fg(table_color(colors.accent())));
        table.add_row(row);
        continue;
      }
    };

    for field in fields {
      let initial = field.kind.initializer().unwrap_or_else(|| "lateinit".to_string());
      let mut row = Row::new();
      row.add_cell(Cell::new(&summary.name).fg(table_color(colors.muted())));
      row.add_cell(
        Cell::new(field.name.as_str())
          .fg(table_color(colors.value()))
          .add_attribute(Attribute::Bold),
      );
      row.add_cell(Cell::new(field.kind.type_name()).fg(table_color(colors.primary())));
      row.add_cell(Cell::new(field.kind.label()).fg(table_color(colors.accent())));
      row.add_cell(Cell::new(initial).fg(table_color(colors.muted())));
      row.add_cell(Cell::new(if field.is_optional() { "yes" } else { "no" }).fg(table_color(colors.muted())));
      table.add_row(row);
    }
  }

  table
}

pub async fn list_declarations(input: &Path, colors: &Colors) -> anyhow::Result<()> {
  let dump = load_dump(input).await?;
  let orchestrator = Orchestrator::new(dump, BuilderConfig::default(), None)?;

  let mut summaries = orchestrator.summarize();
  summaries.sort_by(|a, b| a.name.cmp(&b.name));

  println!("{}", declarations_table(&summaries, colors));
  Ok(())
}

pub async fn list_fields(input: &Path, declaration: Option<&str>, colors: &Colors) -> anyhow::Result<()> {
  let dump = load_dump(input).await?;
  let only = declaration.map(|name| vec![name.to_string()]);
  let orchestrator = Orchestrator::new(dump, BuilderConfig::default(), only)?;

  println!("{}", fields_table(&orchestrator.summarize(), colors));
  Ok(())
}
