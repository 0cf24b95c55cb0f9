use std::env;

/// Credentials of the dashboard user making the calls.
///
/// Passed explicitly into every directory call instead of being read from
/// ambient storage.
///
/// # Example
///
/// ```
/// use salonslots_directory::session::Session;
///
/// let session = Session::with_token("abc123");
/// assert_eq!(session.bearer().as_deref(), Some("Bearer abc123"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    /// Bearer token forwarded to the backend services
    pub token: Option<String>,
    /// Id of the signed-in user, used for log context only
    pub user_id: Option<String>,
}

impl Session {
    /// A session without credentials
    ///
    /// Requests made with it carry no `Authorization` header, so backends
    /// that require a login answer with an error status.
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// A session authenticated by `token` with no known user id
    ///
    /// # Arguments
    ///
    /// * `token` - Raw token, without the `Bearer ` prefix
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: Some(token.into()),
            user_id: None,
        }
    }

    /// Reads `SALON_SESSION_TOKEN` and `SALON_SESSION_USER`
    ///
    /// Unset or blank variables leave the matching field empty; this never
    /// fails.
    pub fn from_env() -> Self {
        Self::from_source(|key| env::var(key).ok())
    }

    /// Builds a session from variables resolved through `lookup`
    ///
    /// # Arguments
    ///
    /// * `lookup` - Returns the value of a variable, or `None` when unset
    ///
    /// # Returns
    ///
    /// * `Session` - Blank values are treated as unset
    pub fn from_source(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| lookup(key).filter(|value: &String| !value.trim().is_empty());
        Self {
            token: non_empty("SALON_SESSION_TOKEN"),
            user_id: non_empty("SALON_SESSION_USER"),
        }
    }

    /// Value for the `Authorization` header
    ///
    /// # Returns
    ///
    /// * `Option<String>` - `Bearer <token>`, or `None` for an anonymous session
    pub fn bearer(&self) -> Option<String> {
        self.token.as_ref().map(|token| format!("Bearer {token}"))
    }
}
