use super::{open_store, require_session};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::models::{Entry, Rating, Reflection};
use crate::store::RecordStore;
use crate::ui::messages::{header, info};
use crate::utils::table::{Column, Table};
use std::path::Path;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::History {
        limit,
        export,
        format,
        force,
    } = cmd
    {
        let session = require_session(cfg)?;
        let store = open_store(cfg, &session)?;

        let limit = limit.unwrap_or(cfg.history_limit);
        let entries = store.list_entries(limit)?;

        header(format!("Past entries (read-only), last {limit} days"));

        if entries.is_empty() {
            info("No entries yet.");
        } else {
            print!("{}", build_table(&entries).render());
        }

        if let Some(file) = export {
            ExportLogic::export_entries(&entries, Path::new(file), *format, *force)?;
        }
    }
    Ok(())
}

fn build_table(entries: &[Entry]) -> Table {
    let mut columns = vec![Column::new("Date", 10)];
    columns.extend(Rating::ALL.iter().map(|r| Column::new(r.short_label(), 6)));
    columns.extend(Reflection::ALL.iter().map(|f| {
        let width = if *f == Reflection::ProudOf { 24 } else { 18 };
        Column::new(f.label(), width)
    }));

    let mut table = Table::new(columns);
    for e in entries {
        let mut row = vec![e.date_str()];
        row.extend(Rating::ALL.iter().map(|r| e.rating(*r).to_string()));
        row.extend(Reflection::ALL.iter().map(|f| e.text(*f).to_string()));
        table.add_row(row);
    }
    table
}
