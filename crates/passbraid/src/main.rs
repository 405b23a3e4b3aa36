mod cli;
mod shell;

use crate::cli::Cli;
use crate::shell::Shell;

use clap::Parser;
use color_eyre::Result;

pub fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Cli::parse();
    let base = app::init::<Shell>(env!("CARGO_PKG_VERSION")).expect("Inizialisation went wrong");
    let mut shell = Shell::new(base);
    shell.run(args.cmd)
}
