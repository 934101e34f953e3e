use crate::{commands::*, utils::*};
use anyhow::Context;
use clap::{Parser, Subcommand};

mod commands;
mod utils;

#[derive(Parser)]
#[command(
    name = "rvmini",
    author,
    version,
    about = "Assembler for a small RISC-V instruction subset",
    long_about = None
)]
struct Cli {
    #[clap(subcommand)]
    command: CliCommands,
}

#[derive(Subcommand)]
pub enum CliCommands {
    Assemble(AssembleCmd),
    Decode(DecodeCmd),
    Info(InfoCmd),
}

fn main() {
    let args = Cli::parse();
    let result = match args.command {
        CliCommands::Assemble(cmd) => cmd
            .run()
            .context("could not assemble program due to previous error"),
        CliCommands::Decode(cmd) => cmd
            .run()
            .context("could not decode program due to previous error"),
        CliCommands::Info(cmd) => cmd.run(),
    };
    if let Err(e) = result {
        print_error(e);
        std::process::exit(1);
    }
}
