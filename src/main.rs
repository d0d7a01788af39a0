use clap::Parser;
use copper::cli::{Cli, Commands};
use copper::output::Printer;
use miette::Result;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = Printer::new();

    match cli.command {
        Commands::Css(args) => copper::cli::css::run(args, &printer)?,
        Commands::Palette(args) => copper::cli::palette::run(args, &printer)?,
        Commands::Init(args) => copper::cli::init::run(args, &printer)?,
        Commands::Completions(args) => copper::cli::completions::run(args)?,
    }

    Ok(())
}
