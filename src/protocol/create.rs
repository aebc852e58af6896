use axum::http::StatusCode;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::protocol::command::Command;
use crate::protocol::error::ApiError;
use crate::protocol::reply::Reply;
use crate::protocol::request::Request;
use crate::store::ItemStore;

/// Body of a create request.
///
/// Keys match case-insensitively, an exact match winning. Unknown fields,
/// a client-supplied `id` among them, are ignored. Missing or `null` fields
/// and a `null` body take the zero value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CreateParams {
    pub name: String,
    pub price: i64,
}

impl CreateParams {
    fn parse(body: &[u8]) -> Result<Self, ApiError> {
        let fields: Option<Map<String, Value>> =
            serde_json::from_slice(body).map_err(|_| ApiError::InvalidBody)?;
        let Some(fields) = fields else {
            return Ok(Self::default());
        };

        let name: Option<String> = field(&fields, "name")?;
        let price: Option<i64> = field(&fields, "price")?;
        Ok(Self {
            name: name.unwrap_or_default(),
            price: price.unwrap_or_default(),
        })
    }
}

/// Look up `key` and decode it, `None` for absent or `null`
fn field<T: DeserializeOwned>(
    fields: &Map<String, Value>,
    key: &str,
) -> Result<Option<T>, ApiError> {
    let value = fields.get(key).or_else(|| {
        fields
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v)
    });
    match value {
        Some(value) => Option::<T>::deserialize(value).map_err(|_| ApiError::InvalidBody),
        None => Ok(None),
    }
}

/// CREATE command: POST /item
#[derive(Debug, Clone, PartialEq)]
pub struct CreateCmd {
    pub params: CreateParams,
}

impl CreateCmd {
    pub fn parse(req: &Request) -> Result<Command, ApiError> {
        let params = CreateParams::parse(&req.body)?;
        Ok(Command::Create(CreateCmd { params }))
    }

    pub fn execute(&self, store: &ItemStore) -> Result<Reply, ApiError> {
        let item = store.create(self.params.name.clone(), self.params.price)?;
        Reply::json(StatusCode::CREATED, &item)
    }
}
