use serde::{Deserialize, Serialize};

/// A pharmacy reachable by phone, listed without hours or location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryContact {
    pub name: String,
    pub phone: String,
}

impl DirectoryContact {
    pub fn new(name: impl Into<String>, phone: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
        }
    }
}

pub fn default_contacts() -> Vec<DirectoryContact> {
    vec![
        DirectoryContact::new("Drogal", "(14) 3642-3242"),
        DirectoryContact::new("Drogasil", "(14) 3642-6262"),
        DirectoryContact::new("Drograria Santo Antonio", "(14) 3641-6134"),
    ]
}
