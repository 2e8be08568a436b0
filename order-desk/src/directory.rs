//! Client roster
//!
//! Populated once at startup from an external data source (bundled JSON in
//! the reference deployment) and read-only for the rest of the session.

use shared::models::Client;

#[derive(Debug, Clone, Default)]
pub struct ClientDirectory {
    clients: Vec<Client>,
}

impl ClientDirectory {
    pub fn new(clients: Vec<Client>) -> Self {
        Self { clients }
    }

    /// Load the roster from its JSON representation.
    pub fn from_json_str(raw: &str) -> Result<Self, serde_json::Error> {
        let clients: Vec<Client> = serde_json::from_str(raw)?;
        tracing::debug!(count = clients.len(), "client roster loaded");
        Ok(Self::new(clients))
    }

    /// The draft pre-fill default. `None` for an empty roster: a fresh
    /// draft then starts with no default client instead of crashing.
    pub fn first(&self) -> Option<&Client> {
        self.clients.first()
    }

    pub fn find_by_name(&self, name: &str) -> Option<&Client> {
        self.clients
            .iter()
            .find(|client| client.name.as_deref() == Some(name))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Client> {
        self.clients.iter()
    }

    pub fn len(&self) -> usize {
        self.clients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clients.is_empty()
    }
}
