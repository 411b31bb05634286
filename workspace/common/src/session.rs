use tracing::{debug, info, warn};

use crate::client::DashboardClient;
use crate::error::AuthError;
use crate::models::{LoginResponse, UserIdentity};
use crate::storage::KeyValueStore;
use crate::transport::Transport;

pub const TOKEN_KEY: &str = "token";
pub const USER_KEY: &str = "user";

/// Client-held authentication state.
///
/// Either both `user` and `token` are present (authenticated) or neither is.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Session {
    user: Option<UserIdentity>,
    token: Option<String>,
}

impl Session {
    pub fn authenticated(user: UserIdentity, token: String) -> Self {
        Self {
            user: Some(user),
            token: Some(token),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some() && self.token.is_some()
    }

    pub fn user(&self) -> Option<&UserIdentity> {
        self.user.as_ref()
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }
}

/// Owns the [`Session`] and keeps it in sync with the persisted store.
#[derive(Debug)]
pub struct SessionStore<S> {
    store: S,
    session: Session,
}

impl<S: KeyValueStore> SessionStore<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            session: Session::default(),
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn token(&self) -> Option<&str> {
        self.session.token()
    }

    pub fn storage(&self) -> &S {
        &self.store
    }

    /// Rehydrate the session from the persisted store. No network traffic.
    pub fn restore(&mut self) -> &Session {
        let token = self.store.get(TOKEN_KEY);
        let user = self.store.get(USER_KEY);

        match (token, user) {
            (Some(token), Some(user)) => match serde_json::from_str::<UserIdentity>(&user) {
                Ok(user) => {
                    debug!("Restored session for '{}'", user.username);
                    self.session = Session::authenticated(user, token);
                }
                Err(e) => {
                    warn!("Ignoring unreadable persisted user: {}", e);
                }
            },
            _ => debug!("No persisted session"),
        }

        &self.session
    }

    /// Log in against the backend and adopt the returned credential.
    ///
    /// On failure the current session is left untouched.
    pub async fn login<T: Transport>(
        &mut self,
        client: &DashboardClient<T>,
        username: &str,
        password: &str,
    ) -> Result<&Session, AuthError> {
        let response = client.login(username, password).await?;
        self.apply_login(response)
    }

    /// Adopt a successful login response: persist it, then replace the
    /// in-memory session.
    pub fn apply_login(&mut self, response: LoginResponse) -> Result<&Session, AuthError> {
        let user = UserIdentity {
            username: response.username,
            role: response.role,
        };
        let encoded = serde_json::to_string(&user)
            .map_err(|e| AuthError::Rejected(format!("Invalid user identity: {}", e)))?;

        let persisted = self
            .store
            .set(TOKEN_KEY, &response.access_token)
            .and_then(|_| self.store.set(USER_KEY, &encoded));
        if let Err(e) = persisted {
            warn!("Failed to persist session: {}", e);
            self.store.remove(TOKEN_KEY);
            self.store.remove(USER_KEY);
            return Err(e.into());
        }

        info!("Session established for '{}'", user.username);
        self.session = Session::authenticated(user, response.access_token);
        Ok(&self.session)
    }

    /// Drop the session and its persisted copy. Never fails.
    pub fn logout(&mut self) {
        if let Some(user) = self.session.user() {
            info!("Logging out '{}'", user.username);
        }
        self.session = Session::default();
        self.store.remove(TOKEN_KEY);
        self.store.remove(USER_KEY);
    }
}
