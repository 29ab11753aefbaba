//! Management-CLI script generation.
//!
//! Turns pasted object lists into `add host` / `add network` /
//! `add dns-domain` command scripts for the firewall management API.
//! Lines the generator cannot use become `#` skip comments in the
//! output, so operators see exactly what was dropped; generation itself
//! never fails.

pub mod domains;
pub mod hosts;
pub mod networks;

pub use domains::domain_script;
pub use hosts::host_script;
pub use networks::{network_script, prefix_to_mask};

/// Options shared by every generated object: the change-ticket reference
/// stamped into comments and the group new objects are added to.
#[derive(Debug, Clone)]
pub struct ScriptOptions {
    pub ticket_ref: String,
    pub group_name: String,
}
