//! Terraform artifact generation. Pure functions without I/O.
//!
//! [`render`] turns a [`ProvisioningRequest`] into the three files Terraform
//! reads from the working directory. The caller is responsible for writing
//! them to disk.
//!
//! Operator-supplied strings are emitted as escaped HCL string literals, so
//! quotes, newlines and `${` sequences cannot break out of the value. Plain
//! values render exactly as they were given.

use std::fmt::Write as _;

use crate::domain::request::{PG_SCHEMA, ProvisioningRequest, StateBackend};

pub const MAIN_TF: &str = "main.tf";
pub const VARIABLES_TF: &str = "variables.tf";
pub const TFVARS: &str = "terraform.tfvars";

/// Rendered contents of the generated file set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifacts {
    /// Provider, data sources, resources and outputs.
    pub main_tf: String,
    /// Variable declarations.
    pub variables_tf: String,
    /// Literal variable values.
    pub tfvars: String,
}

impl Artifacts {
    /// `(file name, content)` pairs in write order.
    #[must_use]
    pub fn files(&self) -> [(&'static str, &str); 3] {
        [
            (MAIN_TF, self.main_tf.as_str()),
            (VARIABLES_TF, self.variables_tf.as_str()),
            (TFVARS, self.tfvars.as_str()),
        ]
    }
}

/// Render all three artifacts for `request`.
#[must_use]
pub fn render(request: &ProvisioningRequest) -> Artifacts {
    Artifacts {
        main_tf: main_tf(&request.backend),
        variables_tf: VARIABLES.to_string(),
        tfvars: tfvars(request),
    }
}

/// Render `main.tf` with the given backend block spliced into `terraform {}`.
#[must_use]
pub fn main_tf(backend: &StateBackend) -> String {
    let mut out = String::with_capacity(TERRAFORM_HEAD.len() + RESOURCES.len() + 160);
    out.push_str(TERRAFORM_HEAD);
    out.push_str(&backend_block(backend));
    out.push_str(RESOURCES);
    out
}

/// Render the backend block, or an empty string for ephemeral state.
///
/// The block starts with a newline and is indented to sit inside the
/// `terraform {}` block.
#[must_use]
pub fn backend_block(backend: &StateBackend) -> String {
    match backend {
        StateBackend::Postgres { conn_str } => format!(
            "\n  backend \"pg\" {{\n    conn_str    = {}\n    schema_name = {}\n  }}",
            quote(conn_str),
            quote(PG_SCHEMA),
        ),
        StateBackend::S3 {
            bucket,
            key,
            region,
        } => format!(
            "\n  backend \"s3\" {{\n    bucket = {}\n    key    = {}\n    region = {}\n  }}",
            quote(bucket),
            quote(key),
            quote(region),
        ),
        StateBackend::Local { path } => {
            format!("\n  backend \"local\" {{\n    path = {}\n  }}", quote(path))
        }
        StateBackend::Ephemeral => String::new(),
    }
}

/// Render `terraform.tfvars`.
#[must_use]
pub fn tfvars(request: &ProvisioningRequest) -> String {
    format!(
        "cato_token      = {}\n\
         cato_account_id = {}\n\
         site_name       = {}\n\
         public_ip       = \"{}\"\n\
         bgp_neighbor_ip = \"{}\"\n\
         bgp_asn         = {}\n\
         ipsec_psk       = {}\n\
         network_range   = \"{}\"\n",
        quote(&request.credentials.token),
        quote(&request.credentials.account_id),
        quote(&request.site_name),
        request.public_ip,
        request.bgp_neighbor_ip,
        request.bgp_asn,
        quote(&request.ipsec_psk),
        request.network_range,
    )
}

/// Quote `value` as an HCL string literal.
///
/// Escapes backslash, double quote and control characters, and doubles the
/// `$` / `%` of `${` / `%{` so Terraform does not treat them as templates.
#[must_use]
pub fn quote(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    let mut chars = value.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '$' | '%' if chars.peek() == Some(&'{') => {
                out.push(c);
                out.push(c);
            }
            c if c.is_control() => {
                let _ = write!(out, "\\u{:04X}", u32::from(c));
            }
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

// ── Templates ────────────────────────────────────────────────────────────────

const TERRAFORM_HEAD: &str = r#"
terraform {
  required_version = ">= 1.5"
  required_providers {
    cato = {
      source  = "registry.terraform.io/catonetworks/cato"
      version = ">= 0.0.38"
    }
  }"#;

const RESOURCES: &str = r#"
}

provider "cato" {
  baseurl    = "https://api.catonetworks.com/api/v1/graphql2"
  token      = var.cato_token
  account_id = var.cato_account_id
}

data "cato_siteLocation" "ny" {
  filters = [{
    field     = "city"
    search    = "New York City"
    operation = "startsWith"
    },
    {
      field     = "state_name"
      search    = "New York"
      operation = "exact"
    },
    {
      field     = "country_name"
      search    = "United States"
      operation = "contains"
  }]
}

data "cato_allocatedIp" "public_ips" {}

resource "cato_ipsec_site" "ipsec_bgp" {
  name                 = var.site_name
  site_type            = "BRANCH"
  description          = "IPsec site with BGP peering"
  native_network_range = var.network_range

  site_location = {
    city         = data.cato_siteLocation.ny.locations[0].city
    country_code = data.cato_siteLocation.ny.locations[0].country_code
    state_code   = data.cato_siteLocation.ny.locations[0].state_code
    timezone     = data.cato_siteLocation.ny.locations[0].timezone[0]
    address      = "555 That Way"
  }

  ipsec = {
    primary = {
      public_cato_ip_id = data.cato_allocatedIp.public_ips.items[0].id
      tunnels = [
        {
          public_site_ip  = var.public_ip
          private_site_ip = var.bgp_neighbor_ip
          private_cato_ip = "169.254.210.1"
          psk             = var.ipsec_psk
          last_mile_bw = {
            downstream = 100
            upstream   = 100
          }
        }
      ]
    }
  }
}

resource "cato_bgp_peer" "ipsec_bgp_peer" {
  site_id              = cato_ipsec_site.ipsec_bgp.id
  name                 = "IPsec-BGP-Peer"
  peer_ip              = var.bgp_neighbor_ip
  peer_asn             = var.bgp_asn
  cato_asn             = 65000
  default_action       = "ACCEPT"
  advertise_all_routes = true
}

output "ipsec_site_id" {
  value = cato_ipsec_site.ipsec_bgp.id
}

output "ipsec_site_info" {
  value = {
    site_id       = cato_ipsec_site.ipsec_bgp.id
    site_name     = cato_ipsec_site.ipsec_bgp.name
    bgp_peer_id   = cato_bgp_peer.ipsec_bgp_peer.id
    bgp_peer_name = cato_bgp_peer.ipsec_bgp_peer.name
  }
}
"#;

const VARIABLES: &str = r#"
variable "cato_token" {
  type      = string
  sensitive = true
}

variable "cato_account_id" {
  type = string
}

variable "site_name" {
  type = string
}

variable "public_ip" {
  type = string
}

variable "bgp_neighbor_ip" {
  type = string
}

variable "bgp_asn" {
  type = number
}

variable "ipsec_psk" {
  type      = string
  sensitive = true
}

variable "network_range" {
  type = string
}
"#;

// ── Unit tests ───────────────────────────────────────────────────────────────
