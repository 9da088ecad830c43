#[cfg(test)]
#[allow(clippy::module_inception)]
pub mod tests {
    use crate::contact::{Contact, ContactUpdate, DuplicateCheck};

    fn contact(id: i64, name: &str, phone: &str) -> Contact {
        Contact {
            id,
            name: name.to_owned(),
            phone: phone.to_owned(),
            email: None,
            group: None,
            favorite: false,
        }
    }

    #[test]
    fn update_without_name_is_rejected() {
        let update = ContactUpdate {
            phone: Some("555-1".to_owned()),
            ..Default::default()
        };
        assert_eq!(update.into_data(), Err("name"));
    }

    #[test]
    fn update_without_phone_is_rejected() {
        let update = ContactUpdate {
            name: Some("Ann".to_owned()),
            ..Default::default()
        };
        assert_eq!(update.into_data(), Err("phone"));
    }

    #[test]
    fn update_clears_omitted_fields() {
        let update = ContactUpdate {
            name: Some("Ann".to_owned()),
            phone: Some("555-1".to_owned()),
            ..Default::default()
        };
        let data = update.into_data().unwrap();
        assert_eq!(data.email, None);
        assert_eq!(data.group, None);
        assert!(!data.favorite);
    }

    #[test]
    fn duplicate_check_takes_first_match() {
        let check =
            DuplicateCheck::from_matches(vec![contact(1, "Ann", "555-1"), contact(2, "Bob", "555-2")]);
        assert!(check.exists);
        assert_eq!(check.existing_contact.unwrap().id, 1);
    }

    #[test]
    fn duplicate_check_without_matches() {
        let check = DuplicateCheck::from_matches(vec![]);
        assert!(!check.exists);
        assert!(check.existing_contact.is_none());
    }
}
