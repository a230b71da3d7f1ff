// ============================================================================
// AUTH SERVICE - login / registro / logout contra el backend
// ============================================================================
// Funciones sin estado propio: normalizan toda respuesta al ApiResult local
// y nunca dejan escapar una excepción a la pantalla que las llama.
// ============================================================================

use crate::models::{
    ApiResult, Envelope, LoginData, LoginRequest, RegisterRequest, UserProfile,
};
use crate::services::auth_storage;
use crate::services::http::ApiClient;

/// Guardar `{token, user}` en el storage de sesión. Separado del login
/// para poder verificar la escritura sin red.
pub fn persist_session(data: &LoginData) {
    if let Err(e) = auth_storage::save_token(&data.token) {
        log::error!("❌ No se pudo persistir el token: {}", e);
    }
    if let Err(e) = auth_storage::save_user(&data.user) {
        log::error!("❌ No se pudo persistir el perfil: {}", e);
    }
}

/// Iniciar sesión. En éxito persiste `{token, user}` antes de devolver el
/// resultado, de modo que la siguiente petición ya salga autenticada.
pub async fn login(client: &ApiClient, email: &str, password: &str) -> ApiResult<LoginData> {
    let request = LoginRequest {
        email: email.to_string(),
        password: password.to_string(),
    };

    log::info!("🔐 Iniciando sesión para: {}", email);

    match client
        .post::<_, Envelope<LoginData>>("/auth/login", &request)
        .await
    {
        Ok(envelope) => match envelope.into_result() {
            ApiResult::Success { data } => {
                persist_session(&data);
                log::info!(
                    "✅ Sesión iniciada: {} (rol: {})",
                    data.user.nombre_usuario,
                    data.user.role
                );
                ApiResult::Success { data }
            }
            fallo => {
                log::warn!("⚠️ Login rechazado: {:?}", fallo.message());
                fallo
            }
        },
        Err(error) => {
            log::error!("❌ Error en login: {}", error);
            error.into_result()
        }
    }
}

/// Registrar un usuario nuevo. No toca la sesión persistida: registrarse
/// no implica quedar logueado.
pub async fn register(client: &ApiClient, payload: &RegisterRequest) -> ApiResult<UserProfile> {
    log::info!("📝 Registrando usuario: {}", payload.email);

    match client
        .post::<_, Envelope<UserProfile>>("/auth/register", payload)
        .await
    {
        Ok(envelope) => envelope.into_result(),
        Err(error) => {
            log::error!("❌ Error en registro: {}", error);
            error.into_result()
        }
    }
}

/// Cerrar sesión: invalidación local únicamente, sin llamada al servidor.
/// La navegación al login la hace el contexto de sesión, que es quien
/// tiene el navegador.
pub fn logout() {
    log::info!("👋 Cerrando sesión");
    auth_storage::clear_auth();
}
