//! storj-addon CLI entry point.

use clap::Parser;

use storj_addon::cli::Cli;

fn main() {
    let cli = Cli::parse();

    if let Err(err) = storj_addon::cli::execute(&cli) {
        storj_addon::cli::handle_error(&err, cli.json);
    }
}
