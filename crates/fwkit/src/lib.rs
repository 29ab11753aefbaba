pub mod config;
pub mod error;
pub mod ingest;
pub mod mgmt;
pub mod review;
pub mod table;

pub use config::{ReviewConfig, DEFAULT_WEAK_PROTOCOLS};
pub use error::{FwkitError, Result};
pub use ingest::read_policy_csv;
pub use mgmt::{domain_script, host_script, network_script, prefix_to_mask, ScriptOptions};
pub use review::{
    export_filename, ClassifiedRule, ReviewSession, ReviewStore, RuleCategory, RuleClassifier,
    SessionId,
};
pub use table::{Row, Table};
