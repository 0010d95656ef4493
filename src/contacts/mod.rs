//! In-memory contact book for the assistant bot.
//!
//! Usernames are stored capitalized (first letter upper, rest lower), so
//! `john`, `JOHN` and `John` all address the same contact. Failures are
//! reported as message text via [`ContactError`]; nothing here panics or
//! aborts on bad user input.

pub mod commands;

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::types::config::BotConfig;

/// Formatting characters stripped before counting phone digits.
static PHONE_NOISE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\s\-\(\)\+\.]").expect("phone noise pattern is valid"));

/// User-facing contact failures, rendered as reply text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("Give me name and phone please.")]
    MissingNameAndPhone,

    #[error("Enter user name.")]
    MissingName,

    #[error("Phone '{0}' is not matching valid format. Should be digits only, {1} to {2} length.")]
    InvalidPhone(String, usize, usize),

    #[error("User '{0}' already exists with phone {1}. Use 'change {0} <new_phone>' to update, or use a different username.")]
    AlreadyExists(String, String),

    #[error("User '{0}' doesn't exist.")]
    UnknownUser(String),
}

/// Capitalizes a username: first character upper, the rest lower.
pub fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// Checks that `phone` holds 10-15 digits (bounds from config) after
/// stripping common formatting characters.
pub fn validate_phone(phone: &str, config: &BotConfig) -> Result<(), ContactError> {
    let cleaned = PHONE_NOISE.replace_all(phone, "");
    let digits_only = !cleaned.is_empty() && cleaned.chars().all(|c| c.is_ascii_digit());
    if digits_only
        && cleaned.len() >= config.phone_min_digits
        && cleaned.len() <= config.phone_max_digits
    {
        Ok(())
    } else {
        Err(ContactError::InvalidPhone(
            phone.to_string(),
            config.phone_min_digits,
            config.phone_max_digits,
        ))
    }
}

/// Name -> phone mapping keyed by capitalized username.
#[derive(Debug, Default)]
pub struct Book {
    entries: BTreeMap<String, String>,
    config: BotConfig,
}

impl Book {
    /// Creates an empty book with the given bot settings.
    pub fn new(config: BotConfig) -> Self {
        Self {
            entries: BTreeMap::new(),
            config,
        }
    }

    /// Adds a contact. Duplicates are rejected with a hint to use `change`.
    pub fn add(&mut self, name: &str, phone: &str) -> Result<String, ContactError> {
        let username = capitalize(name);
        validate_phone(phone, &self.config)?;

        if let Some(existing) = self.entries.get(&username) {
            return Err(ContactError::AlreadyExists(username, existing.clone()));
        }

        self.entries.insert(username, phone.to_string());
        Ok("Contact added.".to_string())
    }

    /// Updates an existing contact's phone.
    pub fn change(&mut self, name: &str, phone: &str) -> Result<String, ContactError> {
        let username = capitalize(name);
        validate_phone(phone, &self.config)?;

        if !self.entries.contains_key(&username) {
            return Err(ContactError::UnknownUser(username));
        }

        self.entries.insert(username, phone.to_string());
        Ok("Contact updated.".to_string())
    }

    /// Looks up a contact's phone.
    pub fn phone(&self, name: &str) -> Result<String, ContactError> {
        let username = capitalize(name);
        match self.entries.get(&username) {
            Some(phone) => Ok(format!("{}'s phone is {}", username, phone)),
            None => Err(ContactError::UnknownUser(username)),
        }
    }

    /// All contacts as `(name, phone)` pairs, sorted by name.
    pub fn all(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Whether the book holds no contacts.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether a contact with this (raw) name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(&capitalize(name))
    }
}
