//! Remote address service: the contract, its HTTP client, and the worker that
//! runs calls off the UI thread.

mod error;
pub mod http;
pub mod worker;

use async_trait::async_trait;

use crate::contact::{Contact, ContactFields, ContactId};

pub use error::ServiceError;
pub use http::HttpAddressService;
pub use worker::{
    execute, spawn_worker, RequestId, ServiceCommand, ServiceCommandSender, ServiceOutcome,
};

/// List/create/update/delete over the contact collection.
///
/// The service owns persistence and id assignment. Mutations report only
/// success or failure; callers reload the whole list afterwards.
#[async_trait]
pub trait AddressService: Send + Sync {
    /// Fetch every contact, in service order.
    async fn list(&self) -> Result<Vec<Contact>, ServiceError>;

    async fn create(&self, fields: &ContactFields) -> Result<(), ServiceError>;

    async fn update(&self, id: &ContactId, fields: &ContactFields) -> Result<(), ServiceError>;

    async fn delete(&self, id: &ContactId) -> Result<(), ServiceError>;
}
