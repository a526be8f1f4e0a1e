use crate::model::Role;
use parking_lot::Mutex;
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::PathBuf;
use thiserror::Error;
use tracing::warn;

/// Errors raised by vault persistence.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum VaultError {
    #[error("vault io error: {0}")]
    Io(String),
}

/// Four independent role-token slots persisted as one JSON file.
///
/// The file keeps the legacy key names (`token`, `vendorToken`,
/// `deliveryBoyToken`, `adminToken`) so sessions written by earlier
/// deployments restore unchanged. Slots never couple: saving or clearing one
/// role leaves the other three untouched, in memory and on disk.
pub struct TokenVault {
    path: PathBuf,
    slots: Mutex<HashMap<Role, String>>,
}

impl TokenVault {
    /// Opens the vault, loading any tokens already on disk.
    ///
    /// A missing file is an empty vault. An unreadable or corrupt file is
    /// logged and treated as empty rather than blocking startup; the next
    /// save rewrites it.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let slots = match fs::read_to_string(&path) {
            Ok(raw) => match serde_json::from_str::<HashMap<String, String>>(&raw) {
                Ok(map) => Role::ALL
                    .iter()
                    .filter_map(|role| {
                        map.get(role.storage_key())
                            .filter(|token| !token.is_empty())
                            .map(|token| (*role, token.clone()))
                    })
                    .collect(),
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "Corrupt session file, starting empty");
                    HashMap::new()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => HashMap::new(),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Unreadable session file, starting empty");
                HashMap::new()
            }
        };
        Self {
            path,
            slots: Mutex::new(slots),
        }
    }

    /// The token stored for `role`, if any.
    pub fn load(&self, role: Role) -> Option<String> {
        self.slots.lock().get(&role).cloned()
    }

    /// Stores `token` under `role`'s slot and persists the file.
    pub fn save(&self, role: Role, token: impl Into<String>) -> Result<(), VaultError> {
        let mut slots = self.slots.lock();
        slots.insert(role, token.into());
        self.persist(&slots)
    }

    /// Clears exactly `role`'s slot and persists the file.
    pub fn clear(&self, role: Role) -> Result<(), VaultError> {
        let mut slots = self.slots.lock();
        slots.remove(&role);
        self.persist(&slots)
    }

    /// Roles with a stored token, in vault-key order.
    pub fn stored_roles(&self) -> Vec<Role> {
        let slots = self.slots.lock();
        Role::ALL
            .iter()
            .copied()
            .filter(|role| slots.contains_key(role))
            .collect()
    }

    fn persist(&self, slots: &HashMap<Role, String>) -> Result<(), VaultError> {
        let map: BTreeMap<&str, &str> = slots
            .iter()
            .map(|(role, token)| (role.storage_key(), token.as_str()))
            .collect();
        let raw = serde_json::to_string_pretty(&map).map_err(|e| VaultError::Io(e.to_string()))?;
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| VaultError::Io(e.to_string()))?;
        }
        fs::write(&self.path, raw).map_err(|e| VaultError::Io(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn tokens_survive_a_reopen() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("session.json");

        let vault = TokenVault::open(&path);
        vault.save(Role::Customer, "cust-tok").unwrap();
        vault.save(Role::Admin, "admin-tok").unwrap();

        let reopened = TokenVault::open(&path);
        assert_eq!(reopened.load(Role::Customer).as_deref(), Some("cust-tok"));
        assert_eq!(reopened.load(Role::Admin).as_deref(), Some("admin-tok"));
        assert_eq!(reopened.load(Role::Vendor), None);
    }

    #[test]
    fn clearing_one_role_leaves_the_others() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("session.json");

        let vault = TokenVault::open(&path);
        for role in Role::ALL {
            vault.save(role, format!("{role}-tok")).unwrap();
        }
        vault.clear(Role::Vendor).unwrap();

        assert_eq!(vault.load(Role::Vendor), None);
        assert_eq!(vault.load(Role::Customer).as_deref(), Some("customer-tok"));
        assert_eq!(vault.load(Role::Agent).as_deref(), Some("agent-tok"));
        assert_eq!(vault.load(Role::Admin).as_deref(), Some("admin-tok"));

        // The key must be gone from the file too, not just from memory.
        let raw = fs::read_to_string(&path).unwrap();
        assert!(!raw.contains("vendorToken"));
        assert!(raw.contains("deliveryBoyToken"));
    }

    #[test]
    fn file_uses_legacy_key_names() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("session.json");

        let vault = TokenVault::open(&path);
        vault.save(Role::Agent, "agent-tok").unwrap();

        let map: HashMap<String, String> =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(map.get("deliveryBoyToken").map(String::as_str), Some("agent-tok"));
    }

    #[test]
    fn corrupt_file_starts_empty_and_recovers_on_save() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("session.json");
        fs::write(&path, "{not json").unwrap();

        let vault = TokenVault::open(&path);
        assert!(vault.stored_roles().is_empty());

        vault.save(Role::Customer, "fresh").unwrap();
        let reopened = TokenVault::open(&path);
        assert_eq!(reopened.load(Role::Customer).as_deref(), Some("fresh"));
    }

    #[test]
    fn empty_tokens_on_disk_are_ignored() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("session.json");
        fs::write(&path, r#"{"token":"","adminToken":"keep"}"#).unwrap();

        let vault = TokenVault::open(&path);
        assert_eq!(vault.load(Role::Customer), None);
        assert_eq!(vault.load(Role::Admin).as_deref(), Some("keep"));
    }
}
