//! Marketplace users

use serde::{Deserialize, Serialize};

use crate::ids::UserId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UserRole {
    Farmer,
    Supplier,
    Admin,
    Agent,
    #[serde(other)]
    Other,
}

/// Account approval flag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
    Suspended,
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    pub role: UserRole,
    #[serde(default)]
    pub status: UserStatus,
}

impl User {
    pub fn is_supplier(&self) -> bool {
        self.role == UserRole::Supplier
    }

    pub fn is_farmer(&self) -> bool {
        self.role == UserRole::Farmer
    }

    pub fn is_approved(&self) -> bool {
        self.status == UserStatus::Approved
    }
}
