//! Role-derived capability predicates.
//!
//! Capabilities are computed once from the cached [`User`] and handed to each
//! view. They only decide which controls are offered; the backend performs
//! the authoritative check on every request.

use crate::user::{Role, User};

/// What the current identity may attempt from the client side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Capabilities {
    role: Option<Role>,
    verified: bool,
}

impl Capabilities {
    /// Capabilities of an unauthenticated visitor.
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn for_user(user: &User) -> Self {
        Self {
            role: Some(user.role),
            verified: user.verified,
        }
    }

    pub fn from_optional(user: Option<&User>) -> Self {
        user.map(Self::for_user).unwrap_or_default()
    }

    pub fn role(&self) -> Option<Role> {
        self.role
    }

    pub fn is_authenticated(&self) -> bool {
        self.role.is_some()
    }

    /// Students may apply to approved jobs.
    pub fn can_apply(&self) -> bool {
        self.role == Some(Role::Student)
    }

    /// Companies may post once an admin has verified them.
    pub fn can_post_jobs(&self) -> bool {
        self.role == Some(Role::Company) && self.verified
    }

    pub fn needs_verification(&self) -> bool {
        self.role == Some(Role::Company) && !self.verified
    }

    /// Companies decide on applications to their own jobs.
    pub fn can_review_applications(&self) -> bool {
        self.role == Some(Role::Company)
    }

    /// Admins verify companies and approve or reject job postings.
    pub fn can_moderate(&self) -> bool {
        self.role == Some(Role::Admin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::user::UserId;

    fn user(role: Role, verified: bool) -> User {
        User {
            id: UserId(1),
            email: "someone@campus.edu".into(),
            role,
            created_at: None,
            name: None,
            college: None,
            graduation_year: None,
            company_name: None,
            company_description: None,
            verified,
        }
    }

    #[test]
    fn test_anonymous_has_nothing() {
        let caps = Capabilities::anonymous();
        assert!(!caps.is_authenticated());
        assert!(!caps.can_apply());
        assert!(!caps.can_post_jobs());
        assert!(!caps.can_moderate());
        assert_eq!(Capabilities::from_optional(None), caps);
    }

    #[test]
    fn test_student_capabilities() {
        let caps = Capabilities::for_user(&user(Role::Student, false));
        assert!(caps.can_apply());
        assert!(!caps.can_post_jobs());
        assert!(!caps.needs_verification());
        assert!(!caps.can_review_applications());
    }

    #[test]
    fn test_company_verification_gate() {
        let unverified = Capabilities::for_user(&user(Role::Company, false));
        assert!(!unverified.can_post_jobs());
        assert!(unverified.needs_verification());
        assert!(unverified.can_review_applications());

        let verified = Capabilities::for_user(&user(Role::Company, true));
        assert!(verified.can_post_jobs());
        assert!(!verified.needs_verification());
    }

    #[test]
    fn test_admin_capabilities() {
        let caps = Capabilities::for_user(&user(Role::Admin, false));
        assert!(caps.can_moderate());
        assert!(!caps.can_apply());
        assert!(!caps.can_post_jobs());
    }
}
