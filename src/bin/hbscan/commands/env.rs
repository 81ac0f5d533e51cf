use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};

use hbscan::Composition;
use hbscan::env::{comparison_chart_file_name, compose, counts_file_name};
use hbscan::io::{render_composition_chart, write_composition};

use crate::cli::EnvArgs;
use crate::config::{SchemeKind, load_scheme};
use crate::display::{Context as DisplayContext, Progress, print_composition};
use crate::io::{create_output, ensure_dir, pick_file, read_report};
use crate::util::path::output_dir;

const TOTAL_STEPS: u8 = 3;

pub fn run_env(args: EnvArgs, ctx: DisplayContext) -> Result<()> {
    let target = args.common.target;

    let first = pick_file(args.first.as_deref(), "First residue listing", "--first")?;
    let second = pick_file(args.second.as_deref(), "Second residue listing", "--second")?;
    let scheme = load_scheme(args.scheme.scheme.as_deref(), SchemeKind::Scan)?;

    let out_dir = output_dir(args.common.out_dir.as_deref(), &first);

    let mut progress = Progress::new(ctx.interactive, TOTAL_STEPS);

    progress.step("Scanning residue listings");
    let mut compositions = Vec::with_capacity(2);
    for path in [&first, &second] {
        let text = read_report(path)?;
        compositions.push(compose(&text, &scheme, target));
    }
    let scan_substeps: Vec<String> = compositions
        .iter()
        .map(|c| {
            format!(
                "{}: {} unique residues, {} classified",
                c.state,
                c.residues,
                c.classified()
            )
        })
        .collect();
    progress.complete_step("Scanning residue listings", &scan_substeps);

    for composition in &compositions {
        if composition.state.starts_with("Unknown") {
            progress.notice(&format!(
                "Residue {target} could not be identified as ASP or ASN ({})",
                composition.state
            ));
        }
    }

    progress.step("Writing composition table");
    ensure_dir(&out_dir)?;
    let counts_path = out_dir.join(counts_file_name(target));
    let mut out = create_output(&counts_path)?;
    write_composition(&mut out, &compositions)
        .with_context(|| format!("Failed to write {}", counts_path.display()))?;
    out.flush()?;
    progress.complete_step(
        "Writing composition table",
        &[counts_path.display().to_string()],
    );

    progress.step("Rendering chart");
    let chart_path = out_dir.join(comparison_chart_file_name(target));
    render_chart(&compositions, target, &chart_path)?;
    progress.complete_step("Rendering chart", &[chart_path.display().to_string()]);

    if ctx.interactive {
        print_composition(&compositions);
    }

    progress.finish();

    Ok(())
}

fn render_chart(compositions: &[Composition], target: i64, path: &Path) -> Result<()> {
    let categories: Vec<String> = compositions
        .first()
        .map(|c| c.counts.iter().map(|(name, _)| name.clone()).collect())
        .unwrap_or_default();
    let series: Vec<(String, Vec<usize>)> = compositions
        .iter()
        .map(|c| (c.state.clone(), c.counts.iter().map(|&(_, n)| n).collect()))
        .collect();

    render_composition_chart(
        path,
        &format!("Residue environment around {target}"),
        &categories,
        &series,
    )?;
    Ok(())
}
