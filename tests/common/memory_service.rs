//! Well-behaved in-process address service with call recording and failure
//! injection.

#![allow(dead_code)]

use addrbook::contact::{Contact, ContactFields, ContactId};
use addrbook::service::{AddressService, ServiceError};
use async_trait::async_trait;
use parking_lot::Mutex;

#[derive(Default)]
struct Inner {
    contacts: Vec<Contact>,
    next_id: u64,
    calls: Vec<&'static str>,
    fail_deletes: bool,
    fail_creates: bool,
}

#[derive(Default)]
pub struct MemoryAddressService {
    inner: Mutex<Inner>,
}

impl MemoryAddressService {
    pub fn with_contacts(contacts: Vec<Contact>) -> Self {
        let service = Self::default();
        service.inner.lock().contacts = contacts;
        service
    }

    pub fn fail_deletes(&self) {
        self.inner.lock().fail_deletes = true;
    }

    pub fn fail_creates(&self) {
        self.inner.lock().fail_creates = true;
    }

    /// Operation names in call order.
    pub fn calls(&self) -> Vec<&'static str> {
        self.inner.lock().calls.clone()
    }

    pub fn contacts(&self) -> Vec<Contact> {
        self.inner.lock().contacts.clone()
    }
}

#[async_trait]
impl AddressService for MemoryAddressService {
    async fn list(&self) -> Result<Vec<Contact>, ServiceError> {
        let mut inner = self.inner.lock();
        inner.calls.push("list");
        Ok(inner.contacts.clone())
    }

    async fn create(&self, fields: &ContactFields) -> Result<(), ServiceError> {
        let mut inner = self.inner.lock();
        inner.calls.push("create");
        if inner.fail_creates {
            return Err(ServiceError::status(500, "create rejected"));
        }
        inner.next_id += 1;
        let id = ContactId::new(format!("mem-{}", inner.next_id));
        inner.contacts.push(fields.clone().into_contact(id));
        Ok(())
    }

    async fn update(&self, id: &ContactId, fields: &ContactFields) -> Result<(), ServiceError> {
        let mut inner = self.inner.lock();
        inner.calls.push("update");
        let Some(existing) = inner.contacts.iter_mut().find(|c| &c.id == id) else {
            return Err(ServiceError::status(404, "no such address"));
        };
        *existing = fields.clone().into_contact(id.clone());
        Ok(())
    }

    async fn delete(&self, id: &ContactId) -> Result<(), ServiceError> {
        let mut inner = self.inner.lock();
        inner.calls.push("delete");
        if inner.fail_deletes {
            return Err(ServiceError::status(500, "delete rejected"));
        }
        inner.contacts.retain(|c| &c.id != id);
        Ok(())
    }
}
