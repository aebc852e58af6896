use axum::http::StatusCode;

use crate::protocol::command::Command;
use crate::protocol::error::ApiError;
use crate::protocol::reply::Reply;
use crate::protocol::request::Request;
use crate::store::ItemStore;

/// DELETE command: DELETE /item?id=N
#[derive(Debug, Clone, PartialEq)]
pub struct DeleteCmd {
    pub id: i64,
}

impl DeleteCmd {
    pub fn new(id: i64) -> Self {
        Self { id }
    }

    pub fn parse(req: &Request) -> Result<Command, ApiError> {
        Ok(Command::Delete(DeleteCmd::new(req.id_param()?)))
    }

    pub fn execute(&self, store: &ItemStore) -> Result<Reply, ApiError> {
        store.delete(self.id)?;
        Ok(Reply::message(StatusCode::OK, "item deleted"))
    }
}
