pub mod auth_context;
pub mod use_auth;

pub use auth_context::{use_auth, AuthContextProvider};
pub use use_auth::{hydrate_from_storage, AuthState, UseAuthHandle};
