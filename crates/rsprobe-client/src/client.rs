use std::time::Duration;

use mongodb::bson::{doc, Document};
use mongodb::options::{ClientOptions, ServerAddress};
use mongodb::Client;

use crate::config::ReplSetConfig;
use crate::error::Result;

/// Administrative client for a single MongoDB node.
///
/// Connects directly to one `host:port` rather than discovering a
/// deployment: the probe addresses nodes individually, and topology
/// discovery would refuse to select a member whose replica set has not been
/// initiated yet. Server selection and connection establishment are both
/// bounded by the caller's timeout; the driver itself performs no retries
/// that outlive it.
pub struct AdminClient {
    client: Client,
}

impl AdminClient {
    pub fn connect(host: &str, port: u16, timeout: Duration) -> Result<Self> {
        tracing::debug!("connecting to {}:{} (timeout {:?})", host, port, timeout);

        let mut options = ClientOptions::default();
        options.hosts = vec![ServerAddress::Tcp {
            host: host.to_string(),
            port: Some(port),
        }];
        options.direct_connection = Some(true);
        options.server_selection_timeout = Some(timeout);
        options.connect_timeout = Some(timeout);

        let client = Client::with_options(options)?;
        Ok(AdminClient { client })
    }

    /// Liveness check against the node's admin database.
    pub async fn ping(&self) -> Result<Document> {
        self.run(doc! { "ping": 1 }).await
    }

    /// Submits a replica-set initiation request with the given topology.
    ///
    /// Not idempotent: initiating an already-initiated set surfaces as the
    /// server's error.
    pub async fn initiate_replica_set(&self, cfg: &ReplSetConfig) -> Result<Document> {
        self.run(doc! { "replSetInitiate": cfg.to_document()? }).await
    }

    /// Fetches the current replica-set status.
    pub async fn replica_set_status(&self) -> Result<Document> {
        self.run(doc! { "replSetGetStatus": 1 }).await
    }

    async fn run(&self, command: Document) -> Result<Document> {
        tracing::debug!("running admin command: {}", command);
        let reply = self.client.database("admin").run_command(command).await?;
        Ok(reply)
    }
}
