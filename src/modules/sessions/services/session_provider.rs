use std::env;

use crate::modules::sessions::models::Session;

pub const SESSION_DATA_ENV: &str = "SESSION_DATA";

/// Supplies the session credential on demand
///
/// Called once per fetch attempt; implementations must not assume the
/// result is cached by the caller.
pub trait SessionProvider: Send + Sync {
    fn get_session_data(&self) -> Option<Session>;
}

/// Provider holding a fixed session (or none)
#[derive(Debug, Clone, Default)]
pub struct StaticSessionProvider {
    session: Option<Session>,
}

impl StaticSessionProvider {
    pub fn new(session: Option<Session>) -> Self {
        Self { session }
    }
}

impl SessionProvider for StaticSessionProvider {
    fn get_session_data(&self) -> Option<Session> {
        self.session.clone()
    }
}

/// Provider reading the `SESSION_DATA` environment variable on every call
#[derive(Debug, Clone, Default)]
pub struct EnvSessionProvider;

impl SessionProvider for EnvSessionProvider {
    fn get_session_data(&self) -> Option<Session> {
        let raw = env::var(SESSION_DATA_ENV).ok()?;
        match Session::from_json(&raw) {
            Ok(session) => Some(session),
            Err(e) => {
                tracing::warn!(error = %e, "Ignoring unparseable {}", SESSION_DATA_ENV);
                None
            }
        }
    }
}
