use std::path::PathBuf;

use clap::Args;
use comfy_table::Table;
use packer_history::{FileHistoryStore, HistoryStore, NewCalculation};
use packer_optimizer::{Allocation, optimize, parsers::parse_pack_sizes};
use tracing::info;

#[derive(Args)]
pub struct OptimizeArgs {
    /// Comma-separated pack sizes, e.g. "23,31,53"
    #[arg(short, long)]
    sizes: String,

    /// Exact number of items to pack
    #[arg(short, long, allow_negative_numbers = true)]
    amount: i64,

    /// Append the calculation to this history file
    #[arg(long, env = "PACKER_HISTORY_PATH")]
    history: Option<PathBuf>,
}

pub fn run(args: OptimizeArgs) -> anyhow::Result<()> {
    let pack_sizes = parse_pack_sizes(&args.sizes)?;
    let allocation = optimize(&pack_sizes, args.amount)?;

    println!("{}", allocation_table(&allocation));
    info!(
        "Finished: packs = {}, total = {}",
        allocation.pack_count(),
        allocation.total()
    );

    if let Some(path) = args.history {
        let store = FileHistoryStore::open(&path)?;
        let record = store.append(NewCalculation::from_allocation(
            args.sizes,
            args.amount.unsigned_abs(),
            &allocation,
        ))?;
        info!("Saved calculation {} to {}", record.id, path.display());
    }

    Ok(())
}

pub(crate) fn allocation_table(allocation: &Allocation) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["Pack size", "Quantity"]);

    for (size, count) in allocation.iter_descending() {
        table.add_row(vec![size.to_string(), count.to_string()]);
    }

    table.add_row(vec![
        String::from("Packs"),
        allocation.pack_count().to_string(),
    ]);
    table.add_row(vec![String::from("Total items"), allocation.total().to_string()]);

    table
}
