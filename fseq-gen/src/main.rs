mod generate;
mod operations;
mod render;

use clap::{ArgAction, Parser, Subcommand};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    /// Log more (can be repeated). Logs go to stderr.
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a sequence module specialized to an element type.
    ///
    /// The module is written to `<out>/<package>.rs`.
    Generate(generate::Generate),
    /// Print a sequence module specialized to an element type to stdout.
    Render(render::Render),
    /// List the operations every generated module provides.
    Operations(operations::Operations),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Generate(generate) => {
            generate.run()?;
        }
        Commands::Render(render) => {
            render.run()?;
        }
        Commands::Operations(operations) => {
            operations.run()?;
        }
    }
    Ok(())
}
