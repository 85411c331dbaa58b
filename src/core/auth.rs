//! Session context and page access policies
//!
//! The console does not authenticate anyone itself. The session collaborator
//! hands over a [`SessionContext`]; pages are gated by an [`AccessPolicy`].

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identity of the current console user
#[derive(Debug, Clone, PartialEq)]
pub enum SessionContext {
    /// Signed-in staff member
    User { user_id: Uuid, roles: Vec<String> },

    /// Pharmacy administrator
    Admin { admin_id: Uuid },

    /// Nobody signed in
    Anonymous,
}

impl SessionContext {
    /// Check if context represents an administrator.
    ///
    /// A user holding the "admin" role counts as one.
    pub fn is_admin(&self) -> bool {
        match self {
            SessionContext::Admin { .. } => true,
            SessionContext::User { roles, .. } => roles.iter().any(|r| r == "admin"),
            SessionContext::Anonymous => false,
        }
    }

    /// Get user_id if available
    pub fn user_id(&self) -> Option<Uuid> {
        match self {
            SessionContext::User { user_id, .. } => Some(*user_id),
            SessionContext::Admin { admin_id } => Some(*admin_id),
            SessionContext::Anonymous => None,
        }
    }

    pub fn has_role(&self, role: &str) -> bool {
        match self {
            SessionContext::User { roles, .. } => roles.iter().any(|r| r == role),
            _ => false,
        }
    }
}

/// Access policy for a page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum AccessPolicy {
    /// Anyone, signed in or not
    Public,

    /// Any signed-in user
    Authenticated,

    /// User must have one of these roles
    HasRole(Vec<String>),

    /// Administrators only
    AdminOnly,

    /// Combination of policies (AND)
    And(Vec<AccessPolicy>),

    /// Combination of policies (OR)
    Or(Vec<AccessPolicy>),
}

impl AccessPolicy {
    /// Check if the session satisfies this policy
    pub fn allows(&self, session: &SessionContext) -> bool {
        match self {
            AccessPolicy::Public => true,

            AccessPolicy::Authenticated => !matches!(session, SessionContext::Anonymous),

            AccessPolicy::HasRole(required) => required.iter().any(|r| session.has_role(r)),

            AccessPolicy::AdminOnly => session.is_admin(),

            AccessPolicy::And(policies) => policies.iter().all(|p| p.allows(session)),

            AccessPolicy::Or(policies) => policies.iter().any(|p| p.allows(session)),
        }
    }

    /// Parse policy from string (for YAML config)
    ///
    /// Accepts `public`, `authenticated`, `admin_only`, `role:<name>` and
    /// `admin_or_role:<name>`.
    pub fn parse_policy(s: &str) -> Option<Self> {
        match s {
            "public" => Some(AccessPolicy::Public),
            "authenticated" => Some(AccessPolicy::Authenticated),
            "admin_only" => Some(AccessPolicy::AdminOnly),
            s => {
                if let Some(role) = s.strip_prefix("role:") {
                    Some(AccessPolicy::HasRole(vec![role.to_string()]))
                } else {
                    s.strip_prefix("admin_or_role:").map(|role| {
                        AccessPolicy::Or(vec![
                            AccessPolicy::AdminOnly,
                            AccessPolicy::HasRole(vec![role.to_string()]),
                        ])
                    })
                }
            }
        }
    }

    fn describe(&self) -> String {
        match self {
            AccessPolicy::Public => "public".to_string(),
            AccessPolicy::Authenticated => "authenticated".to_string(),
            AccessPolicy::AdminOnly => "admin_only".to_string(),
            AccessPolicy::HasRole(roles) if roles.len() == 1 => format!("role:{}", roles[0]),
            AccessPolicy::Or(policies) => match policies.as_slice() {
                [AccessPolicy::AdminOnly, AccessPolicy::HasRole(roles)] if roles.len() == 1 => {
                    format!("admin_or_role:{}", roles[0])
                }
                _ => "authenticated".to_string(),
            },
            _ => "authenticated".to_string(),
        }
    }
}

impl TryFrom<String> for AccessPolicy {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        AccessPolicy::parse_policy(&value).ok_or_else(|| format!("unknown access policy '{}'", value))
    }
}

impl From<AccessPolicy> for String {
    fn from(value: AccessPolicy) -> Self {
        value.describe()
    }
}
