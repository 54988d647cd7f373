use serde::{Deserialize, Serialize};

/// Restricts what actions a `User` token can perform. The `Policy` is
/// embedded in the signed JWT by the `Organization`s own backend, so
/// the server only has to evaluate it.
#[derive(Debug, Serialize, Deserialize)]
pub struct Policy {
    allow: Option<Vec<Permission>>,
    reject: Option<Vec<Permission>>,
}

impl Policy {
    pub fn authorize(&self, permissions: &[Permission]) -> bool {
        if permissions.is_empty() {
            return true;
        }

        if let Some(rejected) = &self.reject {
            for rejected_permission in rejected {
                if *rejected_permission == Permission::All {
                    return false;
                }
                if permissions.contains(rejected_permission) {
                    return false;
                }
            }
        }

        if let Some(allowed) = &self.allow {
            // First loop to check if All exists
            if allowed.contains(&Permission::All) {
                return true;
            }

            // Check that all permissions are in allowed
            for permission in permissions {
                if !allowed.contains(permission) {
                    return false;
                }
            }

            return true;
        }

        false
    }

    pub fn empty() -> Self {
        Self {
            allow: None,
            reject: None,
        }
    }
}

impl Default for Policy {
    fn default() -> Self {
        Self::empty()
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub enum Permission {
    #[serde(rename = "*")]
    All,
    CreateReminder,
    UpdateReminder,
    DeleteReminder,
    DismissReminderAlert,
}

#[cfg(test)]
mod test {
    use super::*;

    fn policy(allow: Option<Vec<Permission>>, reject: Option<Vec<Permission>>) -> Policy {
        Policy { allow, reject }
    }

    #[test]
    fn empty_policy_authorizes_nothing() {
        let policy = Policy::empty();
        assert!(policy.authorize(&[]));
        assert!(!policy.authorize(&[Permission::CreateReminder]));
    }

    #[test]
    fn allow_all_authorizes_everything_not_rejected() {
        let policy = policy(Some(vec![Permission::All]), None);
        assert!(policy.authorize(&[Permission::CreateReminder, Permission::DeleteReminder]));

        let policy = policy_with_reject();
        assert!(policy.authorize(&[Permission::CreateReminder]));
        assert!(!policy.authorize(&[Permission::DeleteReminder]));
    }

    fn policy_with_reject() -> Policy {
        policy(
            Some(vec![Permission::All]),
            Some(vec![Permission::DeleteReminder]),
        )
    }

    #[test]
    fn reject_all_overrides_allow() {
        let policy = policy(Some(vec![Permission::All]), Some(vec![Permission::All]));
        assert!(!policy.authorize(&[Permission::UpdateReminder]));
    }

    #[test]
    fn every_requested_permission_must_be_allowed() {
        let policy = policy(Some(vec![Permission::CreateReminder]), None);
        assert!(policy.authorize(&[Permission::CreateReminder]));
        assert!(!policy.authorize(&[Permission::CreateReminder, Permission::UpdateReminder]));
    }
}
