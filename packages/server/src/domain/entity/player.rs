//! A participant bound to one connection.

use serde::Serialize;

use crate::domain::ConnectionId;

/// Player: the connection that joined a room and the display name it gave.
///
/// Names are not validated; two players may share one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Player {
    connection_id: ConnectionId,
    name: String,
}

impl Player {
    pub fn new(connection_id: ConnectionId, name: String) -> Self {
        Self {
            connection_id,
            name,
        }
    }

    pub fn connection_id(&self) -> &ConnectionId {
        &self.connection_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}
