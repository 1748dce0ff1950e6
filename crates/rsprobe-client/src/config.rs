use bson::Document;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Replica-set configuration submitted by `replSetInitiate`.
///
/// The probe only ever submits the constant local three-node topology from
/// [`ReplSetConfig::local_default`]; nothing here is derived from input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplSetConfig {
    #[serde(rename = "_id")]
    pub id: String,
    pub members: Vec<ReplSetMember>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplSetMember {
    #[serde(rename = "_id")]
    pub id: i32,
    pub host: String,
}

impl ReplSetConfig {
    /// The fixed topology: set id `rs`, members 0/1/2 on localhost ports
    /// 27017 through 27019.
    pub fn local_default() -> Self {
        ReplSetConfig {
            id: "rs".to_string(),
            members: vec![
                ReplSetMember::new(0, "localhost:27017"),
                ReplSetMember::new(1, "localhost:27018"),
                ReplSetMember::new(2, "localhost:27019"),
            ],
        }
    }

    /// Encodes the configuration as the command's argument document.
    pub fn to_document(&self) -> Result<Document> {
        Ok(bson::to_document(self)?)
    }
}

impl ReplSetMember {
    pub fn new(id: i32, host: impl Into<String>) -> Self {
        ReplSetMember {
            id,
            host: host.into(),
        }
    }
}
