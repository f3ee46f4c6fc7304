use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use ureq::http::Response;
use ureq::{Agent, Body};

use shoplist_core::models::item::{DeleteOutcome, Item, NewItem};

use crate::error::ClientError;

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:3000";

/// Operations the shopping-list API offers.
pub trait ListApi {
    fn list_items(&self) -> Result<Vec<Item>, ClientError>;
    fn add_item(&self, text: &str) -> Result<Item, ClientError>;
    fn delete_item(&self, id: &str) -> Result<(), ClientError>;
}

/// Blocking HTTP implementation of [`ListApi`].
pub struct HttpListApi {
    agent: Agent,
    base_url: String,
}

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

impl HttpListApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        // Non-2xx responses come back as values so their JSON error bodies
        // can be classified.
        let agent: Agent = Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .into();
        Self {
            agent,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn list_url(&self) -> String {
        format!("{}/api/shopping-list", self.base_url)
    }

    fn item_url(&self, id: &str) -> String {
        format!(
            "{}/{}",
            self.list_url(),
            utf8_percent_encode(id, NON_ALPHANUMERIC)
        )
    }
}

impl ListApi for HttpListApi {
    fn list_items(&self) -> Result<Vec<Item>, ClientError> {
        let resp = self.agent.get(&self.list_url()).call()?;
        read_success(resp)
    }

    fn add_item(&self, text: &str) -> Result<Item, ClientError> {
        let body = NewItem {
            text: text.trim().to_string(),
        };
        let resp = self.agent.post(&self.list_url()).send_json(&body)?;
        read_success(resp)
    }

    fn delete_item(&self, id: &str) -> Result<(), ClientError> {
        let resp = self.agent.delete(&self.item_url(id)).call()?;
        let outcome: DeleteOutcome = read_success(resp)?;
        if !outcome.success {
            return Err(ClientError::Decode(
                "server reported an unsuccessful delete".to_string(),
            ));
        }
        Ok(())
    }
}

/// Decode a 2xx body as `T`, or classify the failure by status.
fn read_success<T: DeserializeOwned>(mut resp: Response<Body>) -> Result<T, ClientError> {
    let status = resp.status();
    if status.is_success() {
        return resp
            .body_mut()
            .read_json::<T>()
            .map_err(|e| ClientError::Decode(e.to_string()));
    }

    let message = resp
        .body_mut()
        .read_json::<ErrorBody>()
        .map(|b| b.error)
        .unwrap_or_else(|_| status.to_string());
    tracing::debug!(status = status.as_u16(), message = %message, "api call failed");

    Err(classify(status.as_u16(), message))
}

fn classify(status: u16, message: String) -> ClientError {
    match status {
        400 => ClientError::Validation(message),
        404 => ClientError::NotFound(message),
        _ => ClientError::Server { status, message },
    }
}
