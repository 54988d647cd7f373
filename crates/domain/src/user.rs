use crate::shared::entity::{Entity, ID};

/// A `User` is a member of an `Organization` that can create
/// `Reminder`s and participate in `Reminder`s created by others.
#[derive(Debug, Clone)]
pub struct User {
    pub id: ID,
    pub org_id: ID,
    pub name: String,
}

impl User {
    pub fn new(org_id: ID, name: &str) -> Self {
        Self {
            id: Default::default(),
            org_id,
            name: name.to_string(),
        }
    }
}

impl Entity for User {
    fn id(&self) -> &ID {
        &self.id
    }
}
