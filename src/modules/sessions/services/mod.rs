pub mod session_provider;

pub use session_provider::{
    EnvSessionProvider, SessionProvider, StaticSessionProvider, SESSION_DATA_ENV,
};
