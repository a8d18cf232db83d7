//! Access policy for item ownership and profile exposure.
//!
//! Both rules default to off, which leaves any authenticated caller free to
//! read, change or delete any item and to see the stored password hash on
//! public profile lookups. Flip them in configuration, not in handlers.

use crate::config::Config;
use crate::domain::{Item, User};
use crate::errors::{AppError, AppResult};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AccessPolicy {
    enforce_item_ownership: bool,
    redact_public_profiles: bool,
}

impl AccessPolicy {
    pub fn new(enforce_item_ownership: bool, redact_public_profiles: bool) -> Self {
        Self {
            enforce_item_ownership,
            redact_public_profiles,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.enforce_item_ownership, config.redact_public_profiles)
    }

    /// Whether item routes need the caller's user id at all
    pub fn enforces_item_ownership(&self) -> bool {
        self.enforce_item_ownership
    }

    /// Caller may read, update or delete `item`.
    pub fn check_item_access(&self, caller_id: &str, item: &Item) -> AppResult<()> {
        self.check_owner(caller_id, &item.owner_id)
    }

    /// Caller may list the items of `owner_id`.
    pub fn check_owner_listing(&self, caller_id: &str, owner_id: &str) -> AppResult<()> {
        self.check_owner(caller_id, owner_id)
    }

    /// Shape a user record for `GET /users/{username}`.
    pub fn present_profile(&self, user: User) -> User {
        if self.redact_public_profiles {
            user.redacted()
        } else {
            user
        }
    }

    fn check_owner(&self, caller_id: &str, owner_id: &str) -> AppResult<()> {
        if !self.enforce_item_ownership || caller_id == owner_id {
            Ok(())
        } else {
            tracing::warn!(caller_id = %caller_id, owner_id = %owner_id, "Ownership check denied");
            Err(AppError::Forbidden)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ItemInput;

    fn item_of(owner: &str) -> Item {
        Item::new(ItemInput::titled("x"), owner.to_string())
    }

    #[test]
    fn test_default_policy_allows_everything() {
        let policy = AccessPolicy::default();

        assert!(!policy.enforces_item_ownership());
        assert!(policy.check_item_access("u2", &item_of("u1")).is_ok());
        assert!(policy.check_owner_listing("u2", "u1").is_ok());
    }

    #[test]
    fn test_enforced_ownership() {
        let policy = AccessPolicy::new(true, false);

        assert!(policy.check_item_access("u1", &item_of("u1")).is_ok());
        assert!(matches!(
            policy.check_item_access("u2", &item_of("u1")),
            Err(AppError::Forbidden)
        ));
        assert!(matches!(
            policy.check_owner_listing("u2", "u1"),
            Err(AppError::Forbidden)
        ));
    }

    #[test]
    fn test_profile_redaction_toggle() {
        let user = User::new("alice".into(), "a@x.com".into(), "$argon2id$hash".into());

        let shown = AccessPolicy::default().present_profile(user.clone());
        assert_eq!(shown.password, "$argon2id$hash");

        let hidden = AccessPolicy::new(false, true).present_profile(user);
        assert_eq!(hidden.password, "");
    }
}
