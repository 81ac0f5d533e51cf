use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};

use hbscan::hbond::DEFAULT_TARGET_RESIDUE;

#[derive(Parser)]
#[command(
    name = "hbscan",
    about = "Hydrogen-bond and residue environment reports around a target residue",
    version,
    author,
    before_help = crate::display::banner_for_help(),
    propagate_version = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Extract and summarize hydrogen bonds from two H-bond reports
    #[command(visible_alias = "hb")]
    Hbonds(HbondsArgs),

    /// Compare residue environment composition of two text listings
    #[command(visible_alias = "e")]
    Env(EnvArgs),

    /// Summarize a neighbor table into per-state composition ratios
    #[command(visible_alias = "t")]
    Table(TableArgs),
}

impl Command {
    pub fn common(&self) -> &CommonOptions {
        match self {
            Command::Hbonds(args) => &args.common,
            Command::Env(args) => &args.common,
            Command::Table(args) => &args.common,
        }
    }
}

/// Options shared by all commands.
#[derive(Args)]
pub struct CommonOptions {
    /// Residue number treated as the center of every analysis
    #[arg(long, value_name = "N", default_value_t = DEFAULT_TARGET_RESIDUE)]
    pub target: i64,

    /// Directory for output files (defaults to the first input's directory)
    #[arg(long = "out-dir", value_name = "DIR")]
    pub out_dir: Option<PathBuf>,

    /// Suppress progress output (for scripting)
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase log verbosity (-v info, -vv debug); RUST_LOG overrides
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Args)]
pub struct HbondsArgs {
    #[command(flatten)]
    pub common: CommonOptions,

    #[command(flatten)]
    pub inputs: HbondsInputs,
}

#[derive(Args)]
#[command(next_help_heading = "Inputs")]
pub struct HbondsInputs {
    /// H-bond report of the mutant structure (prompted for if omitted)
    #[arg(long, value_name = "FILE")]
    pub mutant: Option<PathBuf>,

    /// H-bond report of the wild-type structure (prompted for if omitted)
    #[arg(long = "wild-type", value_name = "FILE")]
    pub wild_type: Option<PathBuf>,

    /// State label for the mutant report [default: Mut_ASN<N>(#1)]
    #[arg(long = "mutant-label", value_name = "LABEL")]
    pub mutant_label: Option<String>,

    /// State label for the wild-type report [default: WT_ASP<N>(#2)]
    #[arg(long = "wild-type-label", value_name = "LABEL")]
    pub wild_type_label: Option<String>,
}

#[derive(Args)]
pub struct EnvArgs {
    #[command(flatten)]
    pub common: CommonOptions,

    /// First residue listing (prompted for if omitted)
    #[arg(long, value_name = "FILE")]
    pub first: Option<PathBuf>,

    /// Second residue listing (prompted for if omitted)
    #[arg(long, value_name = "FILE")]
    pub second: Option<PathBuf>,

    #[command(flatten)]
    pub scheme: SchemeOptions,
}

#[derive(Args)]
pub struct TableArgs {
    #[command(flatten)]
    pub common: CommonOptions,

    /// Neighbor table CSV (prompted for if omitted)
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    #[command(flatten)]
    pub scheme: SchemeOptions,
}

#[derive(Args)]
#[command(next_help_heading = "Classification")]
pub struct SchemeOptions {
    /// Custom residue classification scheme (TOML file)
    #[arg(long, value_name = "FILE")]
    pub scheme: Option<PathBuf>,
}

pub fn parse() -> Cli {
    Cli::parse()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn hbonds_alias_and_defaults() {
        let cli = Cli::try_parse_from(["hbscan", "hb", "--mutant", "m.txt"]).unwrap();
        let Command::Hbonds(args) = cli.command else {
            panic!("expected hbonds command");
        };
        assert_eq!(args.common.target, 312);
        assert_eq!(args.inputs.mutant, Some(PathBuf::from("m.txt")));
        assert!(args.inputs.wild_type.is_none());
        assert!(args.inputs.mutant_label.is_none());
    }

    #[test]
    fn verbosity_counts_repeats() {
        let cli = Cli::try_parse_from(["hbscan", "table", "-vv", "-q", "--target", "45"]).unwrap();
        let common = cli.command.common();
        assert_eq!(common.verbose, 2);
        assert!(common.quiet);
        assert_eq!(common.target, 45);
    }
}
