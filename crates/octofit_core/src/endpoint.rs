//! API base resolution for the current deployment environment.

/// Variable holding the hosted codespace name.
pub const CODESPACE_ENV_VAR: &str = "CODESPACE_NAME";

const LOCAL_ORIGIN: &str = "http://localhost:8000";

/// Deployment context used to pick the API origin.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Environment {
    pub codespace_name: Option<String>,
}

impl Environment {
    pub fn local() -> Self {
        Self::default()
    }

    pub fn codespace(name: impl Into<String>) -> Self {
        Self {
            codespace_name: Some(name.into()),
        }
    }

    /// Build from a variable lookup, e.g. `|key| std::env::var(key).ok()`.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            codespace_name: lookup(CODESPACE_ENV_VAR),
        }
    }

    /// The codespace name, only if present and non-empty.
    pub fn hosted_name(&self) -> Option<&str> {
        self.codespace_name
            .as_deref()
            .filter(|name| !name.is_empty())
    }
}

/// Absolute collection URL for `resource_path`, always with a trailing slash.
pub fn resolve(resource_path: &str, env: &Environment) -> String {
    match env.hosted_name() {
        Some(name) => format!("https://{name}-8000.app.github.dev/api/{resource_path}/"),
        None => format!("{LOCAL_ORIGIN}/api/{resource_path}/"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn hosted_when_name_present() {
        assert_eq!(
            resolve("teams", &Environment::codespace("abc")),
            "https://abc-8000.app.github.dev/api/teams/"
        );
    }

    #[test]
    fn localhost_when_absent() {
        assert_eq!(
            resolve("teams", &Environment::local()),
            "http://localhost:8000/api/teams/"
        );
    }

    #[test]
    fn empty_name_behaves_as_absent() {
        assert_eq!(
            resolve("users", &Environment::codespace("")),
            "http://localhost:8000/api/users/"
        );
    }

    #[test]
    fn from_lookup_reads_codespace_variable() {
        let vars: HashMap<&str, String> =
            HashMap::from([(CODESPACE_ENV_VAR, "fit-space".to_string())]);
        let env = Environment::from_lookup(|key| vars.get(key).cloned());
        assert_eq!(env.hosted_name(), Some("fit-space"));

        let env = Environment::from_lookup(|_| None);
        assert_eq!(env, Environment::local());
    }
}
