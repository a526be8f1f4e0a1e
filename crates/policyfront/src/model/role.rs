use std::fmt::Display;

/// The four independent account roles of the storefront.
///
/// Each role authenticates separately and owns its own bearer token slot in
/// the [`TokenVault`](crate::session::TokenVault), so one process can hold a
/// customer, a vendor, a delivery agent and an admin session at the same time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Customer,
    Vendor,
    Agent,
    Admin,
}

impl Role {
    /// All roles, in vault-key order.
    pub const ALL: [Role; 4] = [Role::Customer, Role::Vendor, Role::Agent, Role::Admin];

    /// Legacy key this role's token is persisted under.
    ///
    /// These names are load-bearing: they match the storage the original
    /// deployments wrote, so an existing session file keeps working.
    pub fn storage_key(&self) -> &'static str {
        match self {
            Role::Customer => "token",
            Role::Vendor => "vendorToken",
            Role::Agent => "deliveryBoyToken",
            Role::Admin => "adminToken",
        }
    }

    /// Path segment the backend mounts this role's auth routes under.
    pub fn path_segment(&self) -> &'static str {
        match self {
            Role::Customer => "user",
            Role::Vendor => "vendor",
            Role::Agent => "delivery",
            Role::Admin => "admin",
        }
    }
}

impl Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Role::Customer => "customer",
            Role::Vendor => "vendor",
            Role::Agent => "agent",
            Role::Admin => "admin",
        };
        write!(f, "{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storage_keys_match_legacy_names() {
        assert_eq!(Role::Customer.storage_key(), "token");
        assert_eq!(Role::Vendor.storage_key(), "vendorToken");
        assert_eq!(Role::Agent.storage_key(), "deliveryBoyToken");
        assert_eq!(Role::Admin.storage_key(), "adminToken");
    }

    #[test]
    fn storage_keys_are_distinct() {
        let mut keys: Vec<_> = Role::ALL.iter().map(|r| r.storage_key()).collect();
        keys.sort();
        keys.dedup();
        assert_eq!(keys.len(), 4);
    }
}
