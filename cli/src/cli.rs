//! CLI argument parsing with clap derive

use anyhow::Result;
use clap::Parser;

use crate::app::{AppContext, AppFlags, BehaviourFlags, OutputFlags};
use crate::commands;

/// Provision a Cato Networks IPsec site with a BGP peer through Terraform
#[derive(Parser)]
#[command(name = "cato-terraform", version)]
pub struct Cli {
    /// Output in JSON format
    #[arg(long)]
    pub json: bool,

    /// Suppress non-error output
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output (also disabled by a non-empty `NO_COLOR`)
    #[arg(long)]
    pub no_color: bool,

    /// Skip confirmation prompts
    #[arg(short, long)]
    pub yes: bool,

    #[command(flatten)]
    pub provision: commands::ProvisionArgs,
}

impl Cli {
    /// Execute the CLI command.
    ///
    /// # Errors
    ///
    /// Returns an error if the command fails.
    pub async fn run(self) -> Result<()> {
        let Cli {
            json,
            quiet,
            no_color,
            yes,
            provision,
        } = self;
        let app = AppContext::new(&AppFlags {
            output: OutputFlags {
                no_color,
                quiet,
                json,
            },
            behaviour: BehaviourFlags { yes },
        });
        commands::provision::run(&app, &provision).await
    }
}
