use anyhow::{Context, Result};

use std::io::{self, BufRead};

mod args;
#[cfg(feature = "with-tracing")]
mod logging;
mod output;

use args::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    #[cfg(feature = "with-tracing")]
    logging::init(cli.verbose);

    let validator = cli.validator()?;
    let mut rows = Vec::new();

    if cli.stdin {
        for line in io::stdin().lock().lines() {
            let email = line.context("read stdin")?;
            rows.push(validator.check(&email));
        }
    } else if let Some(Commands::Validate { email }) = &cli.cmd {
        rows.push(validator.check(email));
    } else {
        Cli::clap_command().print_help()?;
        println!();
        return Ok(());
    }

    // sortie
    output::write_reports(&rows, &cli)?;

    // codes de sortie : 0 OK, 2 invalids, 1 fatal
    if output::any_invalid(&rows) {
        std::process::exit(2);
    }
    Ok(())
}
