//! # Domain models
//!
//! Plain serde structs shared by the stores and the UI.
//!
//! | Type | Represents |
//! |------|-----------|
//! | [`ItemId`] | A product identifier. Seeded catalog items carry numeric ids, user-submitted listings carry generated string ids, so this is an untagged number-or-string. |
//! | [`UserType`] | Account role: `student` or `admin`. |
//! | [`User`] | The signed-in account: name, email, role. No server-side id exists. |
//! | [`Product`] | A catalog item as shown on the home grids. |
//! | [`Listing`] | A user-submitted product draft: [`Product`] plus the seller-entered `description` and `condition`. |

use serde::{Deserialize, Serialize};

/// Product identifier: numeric for seeded catalog items, string for
/// generated listing ids. Serialized untagged so persisted favorite arrays
/// may mix both forms.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ItemId {
    Number(u64),
    Text(String),
}

impl From<u64> for ItemId {
    fn from(id: u64) -> Self {
        Self::Number(id)
    }
}

impl From<&str> for ItemId {
    fn from(id: &str) -> Self {
        Self::Text(id.to_string())
    }
}

impl From<String> for ItemId {
    fn from(id: String) -> Self {
        Self::Text(id)
    }
}

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => write!(f, "{s}"),
        }
    }
}

/// Account role.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserType {
    Student,
    Admin,
}

impl UserType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Student => "student",
            Self::Admin => "admin",
        }
    }
}

/// The signed-in account. Created at the sign-in/sign-up boundary, owned by
/// the session store, cleared on logout.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub name: String,
    pub email: String,
    #[serde(rename = "userType")]
    pub user_type: UserType,
}

/// A catalog item.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ItemId,
    pub title: String,
    pub price: f64,
    pub image: String,
    pub location: String,
    /// Display string ("2 days ago"), not a sortable timestamp.
    pub date: String,
    pub category: String,
}

/// A user-submitted listing, persisted under the drafts key.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    pub id: String,
    pub title: String,
    pub price: f64,
    pub image: String,
    pub location: String,
    pub date: String,
    pub category: String,
    pub description: String,
    pub condition: String,
}

impl Listing {
    /// View of this listing as a plain catalog product.
    pub fn as_product(&self) -> Product {
        Product {
            id: ItemId::Text(self.id.clone()),
            title: self.title.clone(),
            price: self.price,
            image: self.image.clone(),
            location: self.location.clone(),
            date: self.date.clone(),
            category: self.category.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_id_round_trips_both_forms() {
        let ids = vec![ItemId::Number(4), ItemId::Text("x9k2mf0q1".to_string())];
        let json = serde_json::to_string(&ids).unwrap();
        assert_eq!(json, r#"[4,"x9k2mf0q1"]"#);

        let back: Vec<ItemId> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ids);
    }

    #[test]
    fn user_type_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&UserType::Admin).unwrap(), r#""admin""#);
        let t: UserType = serde_json::from_str(r#""student""#).unwrap();
        assert_eq!(t, UserType::Student);
    }
}
