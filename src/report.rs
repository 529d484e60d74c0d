//! Report rendering: CSV export and console table
//!
//! No value transformation happens here; rows arrive fully formatted from
//! the extraction stage.

use std::io::Write;
use std::path::Path;

use comfy_table::{ContentArrangement, Table};
use tracing::info;

use crate::error::Result;
use crate::models::PaperRow;

/// Write rows as CSV to `path`, header row included
pub fn write_csv(rows: &[PaperRow], path: &Path) -> Result<()> {
    let file = std::fs::File::create(path)?;
    write_csv_to(rows, file)?;
    info!(path = %path.display(), rows = rows.len(), "results saved to file");
    Ok(())
}

/// Write rows as CSV to any writer
///
/// The header row comes from the serde field renames on [`PaperRow`].
pub fn write_csv_to<W: Write>(rows: &[PaperRow], writer: W) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for row in rows {
        csv_writer.serialize(row)?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Render rows as a console table
pub fn render_table(rows: &[PaperRow]) -> Table {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(PaperRow::headers().to_vec());

    for row in rows {
        table.add_row(vec![
            &row.pmid,
            &row.title,
            &row.pub_year,
            &row.non_academic_authors,
            &row.company_affiliations,
            &row.corresponding_email,
        ]);
    }

    table
}

/// Print rows as a table to stdout
pub fn print_table(rows: &[PaperRow]) {
    println!("{}", render_table(rows));
}
