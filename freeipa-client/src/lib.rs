//! Session-authenticated client for the FreeIPA/IdM JSON-RPC API.
//!
//! No Kerberos involved: [`Client::login`] performs the plain form-based
//! session login, and the session cookie set by the server rides along on
//! every subsequent request. The entity methods (`user_*`, `group_*`,
//! `host_*`, ...) are thin builders over [`Client::call`], which posts the
//! raw JSON-RPC envelope and hands the decoded response back verbatim.

mod error;
mod rpc;
pub mod core;

pub use crate::core::client::{Client, MemberType, DEFAULT_SIZELIMIT};
pub use crate::error::{Error, Result};
pub use crate::rpc::{RpcRequest, SslVerify};
