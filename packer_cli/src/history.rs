use std::path::PathBuf;

use clap::Args;
use comfy_table::Table;
use packer_history::{CalculationRecord, FileHistoryStore, HistoryStore};
use tracing::info;

#[derive(Args)]
pub struct HistoryArgs {
    /// History file written by `packer optimize --history` or the API
    #[arg(long, env = "PACKER_HISTORY_PATH")]
    history: PathBuf,

    #[arg(short, long, default_value_t = 20)]
    limit: usize,
}

pub fn run(args: HistoryArgs) -> anyhow::Result<()> {
    let store = FileHistoryStore::open(&args.history)?;
    let records = store.list(args.limit, 0)?;

    if records.is_empty() {
        info!("No history yet");
        return Ok(());
    }

    println!("{}", history_table(&records));
    info!("Showing {} of {} calculations", records.len(), store.count()?);

    Ok(())
}

fn history_table(records: &[CalculationRecord]) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["Date", "Packs", "Amount", "Total", "Allocation"]);

    for record in records {
        let allocation = record
            .packs
            .iter()
            .rev()
            .map(|(size, count)| format!("{count} x {size}"))
            .collect::<Vec<_>>()
            .join(", ");

        table.add_row(vec![
            record.created_at.strftime("%Y-%m-%d %H:%M").to_string(),
            record.pack_sizes.clone(),
            record.amount.to_string(),
            record.total.to_string(),
            allocation,
        ]);
    }

    table
}
