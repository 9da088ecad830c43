use serde::{Deserialize, Serialize};

/// A stored contact, including the id the store generated for it
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Contact {
    pub id: i64,
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
    pub group: Option<String>,
    pub favorite: bool,
}

/// The fields of a contact that isn't persisted yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactData {
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
    pub group: Option<String>,
    pub favorite: bool,
}

impl ContactData {
    pub fn into_contact(self, id: i64) -> Contact {
        Contact {
            id,
            name: self.name,
            phone: self.phone,
            email: self.email,
            group: self.group,
            favorite: self.favorite,
        }
    }
}

/// A full replacement of all fields of a stored contact.
///
/// Nothing is merged with the stored values: a `None` clears the field, or
/// resets it to its default for `favorite`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactUpdate {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub group: Option<String>,
    pub favorite: Option<bool>,
}

impl ContactUpdate {
    /// Converts the update into the values to store. Fails with the name of the
    /// first required field that is missing.
    pub fn into_data(self) -> Result<ContactData, &'static str> {
        let name = self.name.ok_or("name")?;
        let phone = self.phone.ok_or("phone")?;
        Ok(ContactData {
            name,
            phone,
            email: self.email,
            group: self.group,
            favorite: self.favorite.unwrap_or_default(),
        })
    }
}

/// The outcome of looking for contacts with the same name or the same phone
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateCheck {
    pub exists: bool,
    pub existing_contact: Option<Contact>,
}

impl DuplicateCheck {
    pub fn from_matches(matches: Vec<Contact>) -> Self {
        Self {
            exists: !matches.is_empty(),
            existing_contact: matches.into_iter().next(),
        }
    }
}
