//! The User domain record.

use crate::UserId;
use serde::{Deserialize, Serialize};

/// A persisted user record.
///
/// All six data fields are mandatory; `password` is held as given by the
/// client. The id is assigned by the store and immutable afterward.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    pub password: String,
    pub address: String,
    pub phone: String,
}

impl User {
    /// Overwrites every data field unconditionally, leaving the id
    /// untouched. Updates replace the whole record; there is no partial
    /// update.
    pub fn overwrite(&mut self, fields: NewUser) {
        self.firstname = fields.firstname;
        self.lastname = fields.lastname;
        self.email = fields.email;
        self.password = fields.password;
        self.address = fields.address;
        self.phone = fields.phone;
    }
}

/// A user record that has not been persisted yet (no id).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUser {
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    pub password: String,
    pub address: String,
    pub phone: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> User {
        User {
            id: UserId(1),
            firstname: "Ada".to_string(),
            lastname: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            password: "secret".to_string(),
            address: "12 Analytical Way".to_string(),
            phone: "1234567890".to_string(),
        }
    }

    #[test]
    fn test_overwrite_replaces_all_fields_but_keeps_id() {
        let mut user = sample_user();
        user.overwrite(NewUser {
            firstname: "Grace".to_string(),
            lastname: "Hopper".to_string(),
            email: "grace@example.com".to_string(),
            password: "other".to_string(),
            address: "1 Navy Yard".to_string(),
            phone: "0987654321".to_string(),
        });

        assert_eq!(user.id, UserId(1));
        assert_eq!(user.firstname, "Grace");
        assert_eq!(user.email, "grace@example.com");
        assert_eq!(user.password, "other");
    }
}
