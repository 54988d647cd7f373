use serde::{Deserialize, Serialize};
use sharealarm_domain::{User, ID};

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct UserDTO {
    pub id: ID,
    pub org_id: ID,
    pub name: String,
}

impl UserDTO {
    pub fn new(user: User) -> Self {
        Self {
            id: user.id.clone(),
            org_id: user.org_id.clone(),
            name: user.name,
        }
    }
}
