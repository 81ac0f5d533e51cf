mod env;
mod hbonds;
mod table;

use env::run_env;
use hbonds::run_hbonds;
use table::run_table;

use anyhow::Result;

use crate::cli::Command;
use crate::display::Context;

pub fn dispatch(command: Command, ctx: Context) -> Result<()> {
    match command {
        Command::Hbonds(args) => run_hbonds(args, ctx),
        Command::Env(args) => run_env(args, ctx),
        Command::Table(args) => run_table(args, ctx),
    }
}
