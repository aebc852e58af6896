use axum::http::StatusCode;

use crate::protocol::error::ApiError;
use crate::protocol::reply::Reply;
use crate::store::ItemStore;

/// List command: GET /items
#[derive(Debug, Clone, PartialEq)]
pub struct ListCmd;

impl ListCmd {
    pub fn execute(&self, store: &ItemStore) -> Result<Reply, ApiError> {
        let items = store.list()?;
        Reply::json(StatusCode::OK, &items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_list_seeded() {
        let store = ItemStore::seeded();
        let reply = ListCmd.execute(&store).unwrap();
        assert_eq!(reply.status, StatusCode::OK);
        assert_eq!(
            reply.body,
            json!([
                { "id": 1, "name": "Apple", "price": 100 },
                { "id": 2, "name": "Banana", "price": 50 },
            ])
        );
    }

    #[test]
    fn test_list_empty() {
        let store = ItemStore::new();
        let reply = ListCmd.execute(&store).unwrap();
        assert_eq!(reply.encode(), b"[]\n");
    }
}
