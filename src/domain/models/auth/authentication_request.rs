//! 라우트 보호 요구사항

/// 라우트 접근에 필요한 역할 목록
///
/// 나열된 역할 중 하나라도 토큰의 역할 클레임과 일치하면 통과합니다.
#[derive(Debug, Clone, PartialEq)]
pub struct RequiredRole(pub Vec<String>);

impl RequiredRole {
    pub fn any_of(roles: &[&str]) -> Self {
        Self(roles.iter().map(|r| r.to_string()).collect())
    }

    pub fn is_satisfied(&self, user_role: &str) -> bool {
        self.0.iter().any(|role| role == user_role)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_role() {
        let required = RequiredRole::any_of(&["admin"]);

        assert!(required.is_satisfied("admin"));
        assert!(!required.is_satisfied("artist"));
        assert!(!required.is_satisfied("Admin"));
    }

    #[test]
    fn test_any_of_several_roles() {
        let required = RequiredRole::any_of(&["admin", "artist"]);

        assert!(required.is_satisfied("admin"));
        assert!(required.is_satisfied("artist"));
        assert!(!required.is_satisfied("listener"));
        assert!(!required.is_satisfied("user"));
    }
}
