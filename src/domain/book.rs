use std::collections::HashMap;

use crate::domain::Reply;
use crate::domain::contact::{Contact, normalize_username};
use crate::errors::AppError;
use crate::validation::validate_phone;

pub const ERR_NAME_AND_PHONE: &str = "Give me name and phone please.";
pub const ERR_NO_USERNAME: &str = "Enter user name.";

/// The in-memory contact store: normalized username -> phone.
///
/// Owned by the command loop and passed by reference into each handler.
/// Entries are created by `add`, overwritten by `change`, and never
/// deleted; everything is dropped when the process exits.
pub struct ContactBook {
    entries: HashMap<String, String>,
}

impl ContactBook {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn phone_of(&self, name: &str) -> Option<&str> {
        self.entries.get(&normalize_username(name)).map(String::as_str)
    }

    /// All records, ordered by username for deterministic listing.
    pub fn records(&self) -> Vec<Contact> {
        let mut records: Vec<Contact> = self
            .entries
            .iter()
            .map(|(name, phone)| Contact {
                name: name.clone(),
                phone: phone.clone(),
            })
            .collect();

        records.sort();
        records
    }

    pub fn add_contact(&mut self, args: &[String]) -> Result<Reply, AppError> {
        let (username, phone) = name_and_phone(args)?;

        validate_phone(&phone)?;

        // Duplicate add warns and keeps the original phone, it is not an error
        if let Some(existing) = self.entries.get(&username) {
            return Ok(Reply::Warning(format!(
                "User '{}' already exists with phone {}. \
                Use 'change {} <new_phone>' to update, or use a different username.",
                username, existing, username
            )));
        }

        self.entries.insert(username, phone);
        Ok(Reply::Message("Contact added.".to_string()))
    }

    pub fn update_contact(&mut self, args: &[String]) -> Result<Reply, AppError> {
        let (username, phone) = name_and_phone(args)?;

        validate_phone(&phone)?;

        if !self.entries.contains_key(&username) {
            return Err(AppError::NotFound(username));
        }

        self.entries.insert(username, phone);
        Ok(Reply::Message("Contact updated.".to_string()))
    }

    pub fn get_users_phone(&self, args: &[String]) -> Result<Reply, AppError> {
        let Some(name) = args.first() else {
            return Err(AppError::Usage(ERR_NO_USERNAME.to_string()));
        };

        let username = normalize_username(name);

        match self.entries.get(&username) {
            Some(phone) => Ok(Reply::Message(format!(
                "{}'s phone is {}",
                username, phone
            ))),
            None => Err(AppError::NotFound(username)),
        }
    }
}

impl Default for ContactBook {
    fn default() -> Self {
        Self::new()
    }
}

fn name_and_phone(args: &[String]) -> Result<(String, String), AppError> {
    let [name, phone] = args else {
        return Err(AppError::Usage(ERR_NAME_AND_PHONE.to_string()));
    };

    Ok((normalize_username(name), phone.clone()))
}
