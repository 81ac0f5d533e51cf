use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use hbscan::io::{write_detail, write_summary};
use hbscan::{HBondConfig, HBondReport, StateInput, analyze};

use crate::cli::HbondsArgs;
use crate::config::{StateLabels, build_hbond_config};
use crate::display::{
    Context as DisplayContext, Progress, print_extract_stats, print_hbond_summary,
};
use crate::io::{create_output, ensure_dir, pick_file, read_report};
use crate::util::path::output_dir;

const TOTAL_STEPS: u8 = 3;

pub fn run_hbonds(args: HbondsArgs, ctx: DisplayContext) -> Result<()> {
    let config = build_hbond_config(&args.common);
    let target = config.target_residue;
    let labels = StateLabels::resolve(&args.inputs, target);

    let mutant = pick_file(
        args.inputs.mutant.as_deref(),
        &format!("Mutant H-bond report ({})", labels.mutant),
        "--mutant",
    )?;
    let wild_type = pick_file(
        args.inputs.wild_type.as_deref(),
        &format!("Wild-type H-bond report ({})", labels.wild_type),
        "--wild-type",
    )?;

    let out_dir = output_dir(args.common.out_dir.as_deref(), &mutant);

    let mut progress = Progress::new(ctx.interactive, TOTAL_STEPS);

    progress.step("Reading reports");
    let inputs = vec![
        StateInput::new(&labels.mutant, read_report(&mutant)?),
        StateInput::new(&labels.wild_type, read_report(&wild_type)?),
    ];
    progress.complete_step(
        "Reading reports",
        &[
            describe_input(&mutant, &inputs[0]),
            describe_input(&wild_type, &inputs[1]),
        ],
    );

    progress.step(&format!("Extracting H-bonds involving residue {target}"));
    let report = analyze(&inputs, &config);
    progress.complete_step(
        &format!("Extracting H-bonds involving residue {target}"),
        &build_extract_substeps(&report),
    );
    if report.rows.is_empty() {
        progress.notice(&format!("No H-bonds involving residue {target} were found"));
    }
    if report.total_self_pairs() > 0 {
        progress.notice(&format!(
            "{} record(s) carry residue {target} on both sides and were kept as-is",
            report.total_self_pairs()
        ));
    }

    progress.step("Writing tables");
    let written = write_tables(&report, &config, &out_dir)?;
    let written_ref: Vec<String> = written.iter().map(|p| p.display().to_string()).collect();
    progress.complete_step("Writing tables", &written_ref);

    if ctx.interactive {
        print_extract_stats(&report.stats);
        print_hbond_summary(&report.summary, target);
    }

    progress.finish();

    Ok(())
}

fn describe_input(path: &Path, input: &StateInput) -> String {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    format!("{} → {}", name, input.label)
}

fn build_extract_substeps(report: &HBondReport) -> Vec<String> {
    let mut substeps: Vec<String> = report
        .stats
        .iter()
        .map(|(state, s)| format!("{}: {} of {} lines kept", state, s.kept, s.lines))
        .collect();
    substeps.push(format!(
        "{} unique pairs across {} states",
        report.rows.len(),
        report.summary.len()
    ));
    substeps
}

fn write_tables(
    report: &HBondReport,
    config: &HBondConfig,
    out_dir: &Path,
) -> Result<Vec<PathBuf>> {
    ensure_dir(out_dir)?;
    let target = config.target_residue;

    let detail_path = out_dir.join(config.detail_file_name());
    let mut detail = create_output(&detail_path)?;
    write_detail(&mut detail, &report.rows, target)
        .with_context(|| format!("Failed to write {}", detail_path.display()))?;
    detail.flush()?;

    let summary_path = out_dir.join(config.summary_file_name());
    let mut summary = create_output(&summary_path)?;
    write_summary(&mut summary, &report.summary, target)
        .with_context(|| format!("Failed to write {}", summary_path.display()))?;
    summary.flush()?;

    log::info!(
        "wrote {} rows to {} and {} states to {}",
        report.rows.len(),
        detail_path.display(),
        report.summary.len(),
        summary_path.display()
    );

    Ok(vec![detail_path, summary_path])
}
