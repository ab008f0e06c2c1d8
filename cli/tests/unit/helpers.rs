//! Shared test helpers: exit statuses, output constructors and a sample
//! request.

#![allow(dead_code)]

use std::process::{ExitStatus, Output};

use cato_terraform::domain::request::{Credentials, ProvisioningRequest, RequestParams};

// ── Cross-platform ExitStatus construction ───────────────────────────────────

/// Build an `ExitStatus` from a logical exit code (0 = success, non-zero = failure).
///
/// On Unix the raw wait-status encodes the exit code in bits 8–15, so we shift.
/// On Windows `ExitStatusExt::from_raw` takes the exit code directly.
#[cfg(unix)]
pub fn exit_status(code: i32) -> ExitStatus {
    use std::os::unix::process::ExitStatusExt;
    ExitStatus::from_raw(code << 8)
}

#[cfg(windows)]
pub fn exit_status(code: i32) -> ExitStatus {
    use std::os::windows::process::ExitStatusExt;
    #[allow(clippy::cast_sign_loss)]
    ExitStatus::from_raw(code as u32)
}

// ── Output constructors ──────────────────────────────────────────────────────

pub fn ok_output(stdout: &[u8]) -> Output {
    code_output(0, stdout)
}

pub fn code_output(code: i32, stdout: &[u8]) -> Output {
    Output {
        status: exit_status(code),
        stdout: stdout.to_vec(),
        stderr: Vec::new(),
    }
}

pub fn err_output(code: i32, stderr: &[u8]) -> Output {
    Output {
        status: exit_status(code),
        stdout: Vec::new(),
        stderr: stderr.to_vec(),
    }
}

// ── Fixtures ─────────────────────────────────────────────────────────────────

/// `terraform output -json` for a freshly created site.
pub const OUTPUTS_JSON: &[u8] = br#"{
  "ipsec_site_id": {"sensitive": false, "type": "string", "value": "123456"},
  "ipsec_site_info": {
    "sensitive": false,
    "type": ["object", {}],
    "value": {
      "site_id": "123456",
      "site_name": "Branch-1",
      "bgp_peer_id": "peer-9",
      "bgp_peer_name": "Branch-1-BGP-Peer"
    }
  }
}"#;

/// A valid request using the ephemeral backend.
#[allow(clippy::expect_used)]
pub fn sample_request() -> ProvisioningRequest {
    let credentials = Credentials {
        token: "secret-token".to_string(),
        account_id: "4242".to_string(),
    };
    let params = RequestParams {
        site_name: "Branch-1",
        public_ip: "203.0.113.10",
        bgp_neighbor_ip: "169.254.200.1",
        bgp_asn: 65100,
        ipsec_psk: "psk",
        network_range: "10.201.1.0/24",
        state_backend: "",
        state_conn: None,
    };
    ProvisioningRequest::build(credentials, &params, |_| None).expect("valid request")
}
