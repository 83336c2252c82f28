use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use serde::Serialize;

use crate::config::ServiceConfig;
use crate::contact::{Contact, ContactFields, ContactId};
use crate::service::error::ServiceError;
use crate::service::AddressService;

const LIST_PATH: &str = "/address";
const CREATE_PATH: &str = "/address";
const UPDATE_PATH: &str = "/address/update";
const DELETE_PATH: &str = "/address/delete";

#[derive(Serialize)]
struct UpdateBody<'a> {
    #[serde(rename = "addressId")]
    address_id: &'a ContactId,
    #[serde(flatten)]
    fields: &'a ContactFields,
}

#[derive(Serialize)]
struct DeleteBody<'a> {
    #[serde(rename = "addressId")]
    address_id: &'a ContactId,
}

/// [`AddressService`] over the REST endpoints.
pub struct HttpAddressService {
    client: Client,
    base_url: String,
    timeout_secs: u64,
}

impl HttpAddressService {
    pub fn new(config: &ServiceConfig) -> Result<Self, ServiceError> {
        let url = reqwest::Url::parse(&config.base_url).map_err(|e| {
            ServiceError::InvalidBaseUrl {
                url: config.base_url.clone(),
                reason: e.to_string(),
            }
        })?;
        if url.cannot_be_a_base() {
            return Err(ServiceError::InvalidBaseUrl {
                url: config.base_url.clone(),
                reason: "not a base URL".to_string(),
            });
        }

        let client = Client::builder()
            .connect_timeout(config.connect_timeout())
            .timeout(config.timeout())
            .build()
            .map_err(|e| ServiceError::Connection {
                url: config.base_url.clone(),
                source: e,
            })?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            timeout_secs: config.timeout_seconds as u64,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn send(&self, builder: RequestBuilder, url: &str) -> Result<Response, ServiceError> {
        let response = builder
            .send()
            .await
            .map_err(|e| self.classify(e, url))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ServiceError::status(status.as_u16(), &body));
        }
        Ok(response)
    }

    fn classify(&self, err: reqwest::Error, url: &str) -> ServiceError {
        if err.is_timeout() {
            ServiceError::Timeout {
                duration: self.timeout_secs,
            }
        } else {
            ServiceError::Connection {
                url: url.to_string(),
                source: err,
            }
        }
    }
}

#[async_trait]
impl AddressService for HttpAddressService {
    async fn list(&self) -> Result<Vec<Contact>, ServiceError> {
        let url = self.endpoint(LIST_PATH);
        let response = self.send(self.client.get(&url), &url).await?;
        let body = response
            .bytes()
            .await
            .map_err(|e| self.classify(e, &url))?;
        serde_json::from_slice(&body).map_err(|e| ServiceError::Decode(e.to_string()))
    }

    async fn create(&self, fields: &ContactFields) -> Result<(), ServiceError> {
        let url = self.endpoint(CREATE_PATH);
        self.send(self.client.post(&url).json(fields), &url).await?;
        Ok(())
    }

    async fn update(&self, id: &ContactId, fields: &ContactFields) -> Result<(), ServiceError> {
        let url = self.endpoint(UPDATE_PATH);
        let body = UpdateBody {
            address_id: id,
            fields,
        };
        self.send(self.client.put(&url).json(&body), &url).await?;
        Ok(())
    }

    async fn delete(&self, id: &ContactId) -> Result<(), ServiceError> {
        let url = self.endpoint(DELETE_PATH);
        let body = DeleteBody { address_id: id };
        self.send(self.client.delete(&url).json(&body), &url).await?;
        Ok(())
    }
}
