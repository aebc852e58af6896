use axum::http::Method;

use crate::protocol::create::CreateCmd;
use crate::protocol::delete::DeleteCmd;
use crate::protocol::error::ApiError;
use crate::protocol::get::GetCmd;
use crate::protocol::list::ListCmd;
use crate::protocol::reply::Reply;
use crate::protocol::request::Request;
use crate::store::ItemStore;

/// Item commands, one per route
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// GET /items
    List(ListCmd),
    /// GET /item?id=N
    Get(GetCmd),
    /// POST /item
    Create(CreateCmd),
    /// DELETE /item?id=N
    Delete(DeleteCmd),
    /// Request that maps to no command
    Unknown(ApiError),
}

impl Command {
    /// Route a request to a command by path and method
    pub fn parse(req: &Request) -> Self {
        let parsed = match req.path.as_str() {
            // any method lists
            "/items" => Ok(Command::List(ListCmd)),
            "/item" => match req.method {
                Method::GET => GetCmd::parse(req),
                Method::POST => CreateCmd::parse(req),
                Method::DELETE => DeleteCmd::parse(req),
                _ => Err(ApiError::MethodNotAllowed),
            },
            _ => Err(ApiError::NoRoute),
        };
        parsed.unwrap_or_else(Command::Unknown)
    }

    /// Execute the command on the given store
    fn execute_internal(&self, store: &ItemStore) -> Result<Reply, ApiError> {
        match self {
            Command::List(cmd) => cmd.execute(store),
            Command::Get(cmd) => cmd.execute(store),
            Command::Create(cmd) => cmd.execute(store),
            Command::Delete(cmd) => cmd.execute(store),
            Command::Unknown(err) => Err(err.clone()),
        }
    }

    /// Parse and execute a request on the given store
    pub fn execute(req: &Request, store: &ItemStore) -> Reply {
        match Self::parse(req).execute_internal(store) {
            Ok(reply) => reply,
            Err(err) => Reply::error(&err),
        }
    }
}
