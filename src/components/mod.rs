pub mod access_denied;
pub mod login_screen;
pub mod nav_bar;
pub mod register_screen;
pub mod route_guard;

pub use access_denied::AccessDenied;
pub use login_screen::LoginScreen;
pub use nav_bar::NavBar;
pub use register_screen::RegisterScreen;
pub use route_guard::{evaluate_guard, GuardDecision, RequireRole};
