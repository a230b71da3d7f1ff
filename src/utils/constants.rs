/// URL base del backend
/// Configurada en tiempo de compilación:
/// - Desarrollo: http://localhost:3000 (por defecto)
/// - Producción: via BACKEND_URL en .env (ver build.rs)
pub const BACKEND_URL: &str = match option_env!("BACKEND_URL") {
    Some(url) => url,
    None => "http://localhost:3000",
};

/// Tiempo máximo de espera por petición HTTP
pub const REQUEST_TIMEOUT_MS: u32 = 30_000;

/// Clave de localStorage para el token de sesión
pub const STORAGE_KEY_TOKEN: &str = "auth_token";

/// Clave de localStorage para el perfil del usuario autenticado
pub const STORAGE_KEY_USER: &str = "user_data";

/// Pathname de la pantalla de login; el interceptor no redirige si ya estamos ahí
pub const LOGIN_PATH: &str = "/login";
