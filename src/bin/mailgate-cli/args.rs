use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use mailgate_lib::{DEFAULT_PROBE_TLD, EmailValidator, ValidatorOptions};

#[derive(Parser)]
#[command(name = "mailgate-cli")]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Option<Commands>,

    /// lit des adresses depuis stdin (une par ligne)
    #[arg(long)]
    pub stdin: bool,

    /// write report to file (JSON/NDJSON/CSV selon --format)
    #[arg(long)]
    pub out: Option<String>,

    /// format: human|json|ndjson|csv
    #[arg(long, default_value = "human")]
    pub format: String,

    /// TLD de référence pour la sonde quand le validateur strict refuse
    #[arg(long, default_value = DEFAULT_PROBE_TLD)]
    pub probe_tld: String,

    /// désactive la conversion IDN du domaine
    #[arg(long)]
    pub no_idn: bool,

    /// n'interroge pas le validateur strict (règles structurelles seules)
    #[arg(long)]
    pub no_fallback: bool,

    /// logs de debug sur stderr (feature `with-tracing`, RUST_LOG prioritaire)
    #[cfg(feature = "with-tracing")]
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    Validate {
        /// adresse e-mail à valider
        email: String,
    },
}

impl Cli {
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    pub fn clap_command() -> clap::Command {
        <Self as clap::CommandFactory>::command()
    }

    pub fn options(&self) -> Result<ValidatorOptions> {
        let options = ValidatorOptions::default()
            .with_probe_tld(&self.probe_tld)
            .context("--probe-tld")?
            .with_idn(!self.no_idn)
            .with_strict_fallback(!self.no_fallback);
        Ok(options)
    }

    pub fn validator(&self) -> Result<EmailValidator> {
        Ok(EmailValidator::new(self.options()?))
    }
}
