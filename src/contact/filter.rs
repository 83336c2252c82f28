use crate::contact::model::Contact;

/// Contacts whose name contains `query`, ignoring case. Order is preserved and
/// an empty query matches everything.
pub fn filter_by_name<'a>(contacts: &'a [Contact], query: &str) -> Vec<&'a Contact> {
    if query.is_empty() {
        return contacts.iter().collect();
    }
    let needle = query.to_lowercase();
    contacts
        .iter()
        .filter(|contact| contact.name.to_lowercase().contains(&needle))
        .collect()
}
