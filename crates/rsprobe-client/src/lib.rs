//! Administrative MongoDB client for the rsprobe CLI.
//!
//! A thin wrapper over the official driver: one direct connection to a
//! single node, three admin commands (`ping`, `replSetInitiate`,
//! `replSetGetStatus`), and the constant local replica-set topology the
//! `init` operation submits. Replies are returned as opaque documents; no
//! field is interpreted here.

pub mod client;
pub mod config;
pub mod error;

pub use client::AdminClient;
pub use config::{ReplSetConfig, ReplSetMember};
pub use error::{ProbeError, Result};
