//! User registry: phone number → profile.
//!
//! The phone number is the only identity key. Profiles are created once at
//! registration and never updated.

use chrono::{DateTime, Utc};
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use serde::Serialize;

use crate::config::ValidationConfig;
use crate::error::{AppError, Result};

#[derive(Debug, Clone, Serialize)]
pub struct UserProfile {
    pub name: String,
    pub registered_at: DateTime<Utc>,
}

pub struct UserRegistry {
    users: DashMap<String, UserProfile>,
    validation: ValidationConfig,
}

impl UserRegistry {
    pub fn new(validation: ValidationConfig) -> Self {
        Self {
            users: DashMap::new(),
            validation,
        }
    }

    /// Register a new user. Validation failures leave the registry untouched.
    pub fn register(&self, phone: &str, name: &str) -> Result<UserProfile> {
        if phone.chars().count() < self.validation.min_phone_length {
            return Err(AppError::InvalidPhone);
        }
        if name.chars().count() < self.validation.min_name_length {
            return Err(AppError::InvalidName(self.validation.min_name_length));
        }

        match self.users.entry(phone.to_string()) {
            Entry::Occupied(_) => Err(AppError::PhoneAlreadyExists),
            Entry::Vacant(entry) => {
                let profile = UserProfile {
                    name: name.to_string(),
                    registered_at: Utc::now(),
                };
                entry.insert(profile.clone());
                tracing::info!(phone = %phone, "User registered");
                Ok(profile)
            }
        }
    }

    /// Look up a profile for login. Fails if the phone was never registered.
    pub fn login(&self, phone: &str) -> Result<UserProfile> {
        self.get(phone).ok_or(AppError::PhoneNotFound)
    }

    pub fn get(&self, phone: &str) -> Option<UserProfile> {
        self.users.get(phone).map(|p| p.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> UserRegistry {
        UserRegistry::new(ValidationConfig::default())
    }

    #[test]
    fn test_register_and_get() {
        let registry = registry();
        let profile = registry.register("5551234567", "Alice").unwrap();
        assert_eq!(profile.name, "Alice");

        let stored = registry.get("5551234567").unwrap();
        assert_eq!(stored.name, "Alice");
        assert_eq!(stored.registered_at, profile.registered_at);
    }

    #[test]
    fn test_short_phone_rejected_without_mutation() {
        let registry = registry();
        let err = registry.register("555123", "Alice").unwrap_err();
        assert!(matches!(err, AppError::InvalidPhone));
        assert!(registry.get("555123").is_none());
    }

    #[test]
    fn test_short_name_rejected() {
        let registry = registry();
        let err = registry.register("5551234567", "A").unwrap_err();
        assert!(matches!(err, AppError::InvalidName(2)));
        assert!(registry.get("5551234567").is_none());
    }

    #[test]
    fn test_duplicate_phone_rejected() {
        let registry = registry();
        registry.register("5551234567", "Alice").unwrap();
        let err = registry.register("5551234567", "Bob").unwrap_err();
        assert!(matches!(err, AppError::PhoneAlreadyExists));

        // First registration wins
        assert_eq!(registry.get("5551234567").unwrap().name, "Alice");
    }

    #[test]
    fn test_login_unregistered_phone() {
        let registry = registry();
        let err = registry.login("5551234567").unwrap_err();
        assert!(matches!(err, AppError::PhoneNotFound));
    }

    #[test]
    fn test_phone_at_minimum_length_accepted() {
        let registry = registry();
        assert!(registry.register("1234567890", "Alice").is_ok());
    }
}
