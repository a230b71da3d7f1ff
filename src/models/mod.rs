pub mod api;
pub mod auth;
pub mod beneficiario;
pub mod establecimiento;
pub mod estadisticas;
pub mod promocion;

pub use api::{ApiResult, Envelope, GENERIC_ERROR, NETWORK_ERROR};
pub use auth::{LoginData, LoginRequest, RegisterRequest, Role, UserProfile};
pub use beneficiario::{Beneficiario, CambioEstadoRequest};
pub use establecimiento::{Establecimiento, Sucursal};
pub use estadisticas::{EstadisticasDashboard, ResumenDueno};
pub use promocion::{EstadoPromocion, ModeracionRequest, Promocion};
