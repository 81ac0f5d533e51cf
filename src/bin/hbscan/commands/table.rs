use std::fs::File;
use std::io::{BufReader, Write};

use anyhow::{Context, Result};

use hbscan::env::{summarize_neighbors, table_chart_file_name, table_summary_file_name};
use hbscan::io::{read_neighbor_table, render_ratio_chart, write_neighbor_composition};

use crate::cli::TableArgs;
use crate::config::{SchemeKind, load_scheme};
use crate::display::{Context as DisplayContext, Progress, print_neighbor_ratios};
use crate::io::{create_output, ensure_dir, pick_file};
use crate::util::path::output_dir;

const TOTAL_STEPS: u8 = 3;

pub fn run_table(args: TableArgs, ctx: DisplayContext) -> Result<()> {
    let target = args.common.target;

    let input = pick_file(args.input.as_deref(), "Neighbor table (CSV)", "--input")?;
    let scheme = load_scheme(args.scheme.scheme.as_deref(), SchemeKind::Table)?;
    let out_dir = output_dir(args.common.out_dir.as_deref(), &input);

    let mut progress = Progress::new(ctx.interactive, TOTAL_STEPS);

    progress.step("Reading neighbor table");
    let file = File::open(&input)
        .with_context(|| format!("Failed to open input file: {}", input.display()))?;
    let rows = read_neighbor_table(BufReader::new(file), target)
        .with_context(|| format!("Failed to read neighbor table: {}", input.display()))?;
    let neighbors = rows.iter().filter(|r| r.is_neighbor).count();
    progress.complete_step(
        "Reading neighbor table",
        &[format!("{} rows, {} flagged as neighbors", rows.len(), neighbors)],
    );

    let table = summarize_neighbors(&rows, &scheme);
    if table.is_empty() {
        progress.notice(&format!("No rows are flagged as neighbors of residue {target}"));
    }

    progress.step("Writing composition summary");
    ensure_dir(&out_dir)?;
    let summary_path = out_dir.join(table_summary_file_name(target));
    let mut out = create_output(&summary_path)?;
    write_neighbor_composition(&mut out, &table)
        .with_context(|| format!("Failed to write {}", summary_path.display()))?;
    out.flush()?;
    progress.complete_step(
        "Writing composition summary",
        &[
            format!("{} states × {} categories", table.states.len(), table.categories.len()),
            summary_path.display().to_string(),
        ],
    );

    progress.step("Rendering chart");
    let chart_path = out_dir.join(table_chart_file_name(target));
    render_ratio_chart(
        &chart_path,
        &format!("Neighbor composition around {target}"),
        &table,
    )?;
    progress.complete_step("Rendering chart", &[chart_path.display().to_string()]);

    if ctx.interactive {
        print_neighbor_ratios(&table);
    }

    progress.finish();

    Ok(())
}
