//! `cato-terraform [--destroy]`: provision or tear down one IPsec site.

use std::path::Path;

use anyhow::{Context, Result};
use clap::Args;

use crate::app::AppContext;
use crate::application::ports::{ArtifactWriter, CommandRunner, ProgressReporter};
use crate::application::services::provision::{
    Operation, Outcome, ProvisionDeps, provision,
};
use crate::domain::request::{Credentials, ProvisioningRequest, RequestParams};
use crate::infra::command_runner::TokioCommandRunner;
use crate::infra::fs::LocalFs;
use crate::infra::workdir::WorkingDirectory;
use crate::output::TerminalReporter;

/// Site parameters and state backend selection.
#[derive(Args, Debug, Clone)]
pub struct ProvisionArgs {
    /// Cato API token (or set `CATO_TOKEN`)
    #[arg(long)]
    pub token: Option<String>,

    /// Cato account ID (or set `CATO_ACCOUNT_ID`)
    #[arg(long = "account")]
    pub account_id: Option<String>,

    /// IPsec site name
    #[arg(long, default_value = "Praveen-IPsec-BGP-Site")]
    pub site_name: String,

    /// Router public IP
    #[arg(long, default_value = "1.1.1.1")]
    pub public_ip: String,

    /// BGP neighbor IP
    #[arg(long = "bgp-ip", default_value = "169.254.200.1")]
    pub bgp_neighbor_ip: String,

    /// BGP peer ASN
    #[arg(long, default_value_t = 65100)]
    pub bgp_asn: u32,

    /// IPsec pre-shared key
    #[arg(long = "psk", default_value = "praveen_infoblox")]
    pub ipsec_psk: String,

    /// Native network range
    #[arg(long = "network", default_value = "10.201.1.0/24")]
    pub network_range: String,

    /// Destroy resources instead of creating
    #[arg(long)]
    pub destroy: bool,

    /// State backend: pg, s3, local, or empty for ephemeral
    #[arg(long, default_value = "")]
    pub state_backend: String,

    /// State connection string (Postgres DSN or S3 bucket)
    #[arg(long)]
    pub state_conn: Option<String>,

    /// Terraform binary to run
    #[arg(long, env = "TERRAFORM_BIN", default_value = "terraform")]
    pub terraform_bin: String,
}

impl ProvisionArgs {
    fn params(&self) -> RequestParams<'_> {
        RequestParams {
            site_name: &self.site_name,
            public_ip: &self.public_ip,
            bgp_neighbor_ip: &self.bgp_neighbor_ip,
            bgp_asn: self.bgp_asn,
            ipsec_psk: &self.ipsec_psk,
            network_range: &self.network_range,
            state_backend: &self.state_backend,
            state_conn: self.state_conn.as_deref(),
        }
    }

    fn operation(&self) -> Operation {
        if self.destroy {
            Operation::Destroy
        } else {
            Operation::Apply
        }
    }
}

fn env_lookup(name: &str) -> Option<String> {
    std::env::var(name).ok()
}

/// Run the command.
///
/// Credentials and parameters are validated before any directory is
/// created or any process is spawned.
///
/// # Errors
///
/// Returns an error if credentials are missing, a parameter is invalid, or
/// any terraform step fails.
pub async fn run(app: &AppContext, args: &ProvisionArgs) -> Result<()> {
    let credentials = Credentials::resolve(
        args.token.as_deref(),
        args.account_id.as_deref(),
        env_lookup,
    )?;
    let request = ProvisioningRequest::build(credentials, &args.params(), env_lookup)?;
    let operation = args.operation();

    if operation == Operation::Destroy
        && !app.confirm(
            &format!("Destroy site '{}' and its BGP peer?", request.site_name),
            true,
        )?
    {
        app.output.info("Cancelled.");
        return Ok(());
    }

    let renderer = app.renderer();
    renderer.render_start(operation == Operation::Destroy);

    let runner = TokioCommandRunner::new().env("TF_IN_AUTOMATION", "1");
    let reporter = TerminalReporter::new(&app.output);
    let deps = ProvisionDeps {
        runner: &runner,
        writer: &LocalFs,
        reporter: &reporter,
        binary: &args.terraform_bin,
    };

    let outcome = execute(&request, operation, &deps, None).await?;
    reporter.complete();
    renderer.render_outcome(&outcome, &request.site_name)
}

/// Run `operation` inside a fresh working directory, created under
/// `scratch_parent` or the system temp dir. The directory is removed
/// whether the run succeeds or fails.
///
/// # Errors
///
/// Returns an error if the directory cannot be created or the run fails.
pub async fn execute<R, W, P>(
    request: &ProvisioningRequest,
    operation: Operation,
    deps: &ProvisionDeps<'_, R, W, P>,
    scratch_parent: Option<&Path>,
) -> Result<Outcome>
where
    R: CommandRunner,
    W: ArtifactWriter,
    P: ProgressReporter,
{
    let workdir = match scratch_parent {
        Some(parent) => WorkingDirectory::create_in(parent),
        None => WorkingDirectory::create(),
    }
    .context("creating terraform working directory")?;

    let result = provision(request, operation, workdir.path(), deps).await;
    workdir.close();
    result
}
