use axum::http::StatusCode;

use crate::protocol::command::Command;
use crate::protocol::error::ApiError;
use crate::protocol::reply::Reply;
use crate::protocol::request::Request;
use crate::store::ItemStore;

/// GET command: GET /item?id=N
#[derive(Debug, Clone, PartialEq)]
pub struct GetCmd {
    pub id: i64,
}

impl GetCmd {
    pub fn new(id: i64) -> Self {
        Self { id }
    }

    pub fn parse(req: &Request) -> Result<Command, ApiError> {
        Ok(Command::Get(GetCmd::new(req.id_param()?)))
    }

    pub fn execute(&self, store: &ItemStore) -> Result<Reply, ApiError> {
        let item = store.get(self.id)?;
        Reply::json(StatusCode::OK, &item)
    }
}
