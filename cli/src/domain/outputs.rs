//! Decoding of `terraform output -json` into a [`ProvisioningResult`].
//!
//! Missing outputs are tolerated and leave fields empty. An output that is
//! present but has the wrong shape is an error.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::error::OutputError;

pub const SITE_ID_OUTPUT: &str = "ipsec_site_id";
pub const SITE_INFO_OUTPUT: &str = "ipsec_site_info";

/// Identifiers of the provisioned site and its BGP peer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProvisioningResult {
    pub site_id: String,
    pub site_name: String,
    pub bgp_peer_id: String,
    pub bgp_peer_name: String,
}

/// One entry of `terraform output -json`. `type` and `sensitive` are not
/// read.
#[derive(Debug, Clone, Deserialize)]
pub struct OutputValue {
    /// The output value, still undecoded.
    pub value: serde_json::Value,
}

/// Output name → entry.
pub type OutputMap = BTreeMap<String, OutputValue>;

/// Shape of the `ipsec_site_info` object. Unknown keys are ignored.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct SiteInfo {
    site_id: Option<String>,
    site_name: Option<String>,
    bgp_peer_id: Option<String>,
    bgp_peer_name: Option<String>,
}

/// Parse the raw stdout of `terraform output -json`.
///
/// # Errors
///
/// Returns [`OutputError::InvalidDocument`] if the bytes are not a JSON
/// object of output entries.
pub fn parse_outputs(stdout: &[u8]) -> Result<OutputMap, OutputError> {
    serde_json::from_slice(stdout).map_err(OutputError::InvalidDocument)
}

/// Extract the site and peer identifiers from `outputs`.
///
/// `site_id` comes from `ipsec_site_id`, falling back to the `site_id` key
/// of `ipsec_site_info` when the former is absent.
///
/// # Errors
///
/// Returns [`OutputError::Malformed`] if either output is present but not of
/// the expected type.
pub fn extract(outputs: &OutputMap) -> Result<ProvisioningResult, OutputError> {
    let site_id: Option<String> = decode(outputs, SITE_ID_OUTPUT)?.flatten();
    let info: SiteInfo = decode(outputs, SITE_INFO_OUTPUT)?.unwrap_or_default();

    Ok(ProvisioningResult {
        site_id: site_id.or(info.site_id).unwrap_or_default(),
        site_name: info.site_name.unwrap_or_default(),
        bgp_peer_id: info.bgp_peer_id.unwrap_or_default(),
        bgp_peer_name: info.bgp_peer_name.unwrap_or_default(),
    })
}

fn decode<T: serde::de::DeserializeOwned>(
    outputs: &OutputMap,
    name: &str,
) -> Result<Option<T>, OutputError> {
    let Some(entry) = outputs.get(name) else {
        return Ok(None);
    };
    T::deserialize(&entry.value)
        .map(Some)
        .map_err(|source| OutputError::Malformed {
            name: name.to_string(),
            source,
        })
}

// ── Unit tests ───────────────────────────────────────────────────────────────
