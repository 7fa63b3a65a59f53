use anyhow::Result;
use tracing::{info, warn};

use crate::cli::InspectArgs;
use crate::model::SheetInventory;
use crate::sheet::load_table;
use crate::util::write_json_stdout;

pub fn run(args: InspectArgs) -> Result<()> {
    let table = load_table(&args.input, args.sheet.as_deref(), args.column_map.as_deref())?;
    let unknown_columns = table.unknown_columns();

    info!(
        input = %args.input.display(),
        sheet = %table.name,
        sheets = %table.sheet_names.join(", "),
        total_rows = table.rows.len(),
        columns = table.columns.len(),
        "inspected spreadsheet"
    );
    for column in &unknown_columns {
        warn!(column = %column, "column does not match any document field");
    }

    if args.json {
        let inventory = SheetInventory {
            input_path: args.input.display().to_string(),
            sheet: table.name,
            sheet_names: table.sheet_names,
            total_rows: table.rows.len(),
            columns: table.columns,
            unknown_columns,
        };
        write_json_stdout(&inventory)?;
    }

    Ok(())
}
