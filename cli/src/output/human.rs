//! Human-readable terminal renderer.

use crate::application::services::provision::Outcome;
use crate::domain::outputs::ProvisioningResult;
use crate::output::OutputContext;

/// Renders domain types as human-readable terminal output using `OutputContext`.
pub struct HumanRenderer<'a> {
    ctx: &'a OutputContext,
}

impl<'a> HumanRenderer<'a> {
    /// Create a new `HumanRenderer` wrapping the given output context.
    #[must_use]
    pub fn new(ctx: &'a OutputContext) -> Self {
        Self { ctx }
    }

    /// Render the banner printed before terraform starts.
    pub fn render_start(&self, destroy: bool) {
        if destroy {
            self.ctx.header("Destroying Cato IPsec site...");
        } else {
            self.ctx.header("Creating Cato IPsec site with BGP...");
        }
    }

    /// Render a finished run.
    pub fn render_outcome(&self, outcome: &Outcome) {
        match outcome {
            Outcome::Applied(result) => self.render_applied(result),
            Outcome::Destroyed => self.ctx.success("Resources destroyed successfully"),
        }
    }

    fn render_applied(&self, result: &ProvisioningResult) {
        self.ctx.blank();
        self.ctx.success("Resources created successfully!");
        self.ctx.blank();
        self.ctx.header("Outputs:");
        self.ctx.kv("Site ID:", &result.site_id);
        self.ctx.kv("Site Name:", &result.site_name);
        self.ctx.kv("BGP Peer ID:", &result.bgp_peer_id);
        self.ctx.kv("BGP Peer Name:", &result.bgp_peer_name);
    }
}
