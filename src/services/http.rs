// ============================================================================
// HTTP CLIENT + AUTH INTERCEPTOR
// ============================================================================
// Un solo cliente configurado (base URL + timeout) por el que pasa toda
// petición remota. El interceptor adjunta el bearer token leído del storage
// en el momento de la llamada y aplica la política global de 401:
// limpiar la sesión persistida y navegar al login.
// ============================================================================

use std::fmt;
use std::rc::Rc;

use futures::{pin_mut, select, FutureExt};
use gloo_net::http::{Request, RequestBuilder, Response};
use gloo_timers::future::TimeoutFuture;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::models::{ApiResult, GENERIC_ERROR, NETWORK_ERROR};
use crate::services::auth_storage;
use crate::utils::constants::{BACKEND_URL, LOGIN_PATH, REQUEST_TIMEOUT_MS};

/// Clasificación del fallo de una petición.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorKind {
    /// La petición nunca llegó o nunca volvió.
    Network,
    /// Se agotó el tiempo de espera del cliente.
    Timeout,
    /// El cuerpo de la respuesta no se pudo deserializar.
    Parse,
    /// 401: credencial inválida o expirada.
    Unauthorized,
    /// Cualquier otro estado HTTP de error, con cuerpo del backend si lo hubo.
    Backend,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ApiError {
    pub kind: ApiErrorKind,
    pub status: Option<u16>,
    pub message: Option<String>,
    pub errors: Vec<String>,
}

impl ApiError {
    fn network(detail: String) -> Self {
        ApiError {
            kind: ApiErrorKind::Network,
            status: None,
            message: Some(detail),
            errors: Vec::new(),
        }
    }

    fn timeout() -> Self {
        ApiError {
            kind: ApiErrorKind::Timeout,
            status: None,
            message: None,
            errors: Vec::new(),
        }
    }

    fn parse(detail: String) -> Self {
        ApiError {
            kind: ApiErrorKind::Parse,
            status: None,
            message: Some(detail),
            errors: Vec::new(),
        }
    }

    /// Mensaje apto para mostrar al usuario.
    pub fn user_message(&self) -> String {
        match self.kind {
            ApiErrorKind::Network => NETWORK_ERROR.to_string(),
            ApiErrorKind::Timeout => "El servidor tardó demasiado en responder.".to_string(),
            ApiErrorKind::Parse => GENERIC_ERROR.to_string(),
            ApiErrorKind::Unauthorized | ApiErrorKind::Backend => self
                .message
                .clone()
                .unwrap_or_else(|| GENERIC_ERROR.to_string()),
        }
    }

    /// Normalizar al envelope local; los servicios nunca propagan el error crudo.
    pub fn into_result<T>(self) -> ApiResult<T> {
        ApiResult::Failure {
            message: self.user_message(),
            errors: self.errors,
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.kind, self.status, &self.message) {
            (ApiErrorKind::Timeout, _, _) => write!(f, "timeout tras {} ms", REQUEST_TIMEOUT_MS),
            (_, Some(status), Some(msg)) => write!(f, "HTTP {}: {}", status, msg),
            (_, Some(status), None) => write!(f, "HTTP {}", status),
            (_, None, Some(msg)) => write!(f, "{}", msg),
            (kind, None, None) => write!(f, "{:?}", kind),
        }
    }
}

impl std::error::Error for ApiError {}

/// Cuerpo de error del backend: `{ message, errors? }`.
#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    errors: Option<Vec<String>>,
}

/// Política global de 401. Solo actúa si la petición llevaba token: un 401
/// del propio login (sin sesión que limpiar) es un fallo normal y no debe
/// redirigir. La limpieza más la notificación ocurren exactamente una vez
/// por respuesta fallida.
pub fn on_unauthorized_response(token_attached: bool, notify: &dyn Fn()) {
    if !token_attached {
        return;
    }
    log::warn!("🔒 Sesión inválida o expirada; limpiando sesión y volviendo al login");
    auth_storage::clear_auth();
    notify();
}

/// Navegación por defecto del interceptor: recarga completa hacia /login.
/// No hace nada si ya estamos en el login, para no entrar en bucle.
pub fn redirect_to_login() {
    if let Some(window) = web_sys::window() {
        let location = window.location();
        if let Ok(path) = location.pathname() {
            if path.starts_with(LOGIN_PATH) {
                return;
            }
        }
        let _ = location.assign(LOGIN_PATH);
    }
}

/// Cliente API compartido. Stateless salvo la configuración: el token se lee
/// del storage en cada petición (read-through), nunca se cachea aquí.
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    on_unauthorized: Rc<dyn Fn()>,
}

impl PartialEq for ApiClient {
    fn eq(&self, other: &Self) -> bool {
        self.base_url == other.base_url && Rc::ptr_eq(&self.on_unauthorized, &other.on_unauthorized)
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    pub fn new() -> Self {
        Self::with_base_url(BACKEND_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            on_unauthorized: Rc::new(redirect_to_login),
        }
    }

    /// Variante con callback de navegación inyectado, para poder probar la
    /// política de 401 sin navegación real.
    pub fn with_unauthorized_handler(
        base_url: impl Into<String>,
        handler: Rc<dyn Fn()>,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            on_unauthorized: handler,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let (builder, token_attached) = authorize(Request::get(&self.url(path)));
        let request = builder
            .build()
            .map_err(|e| ApiError::network(e.to_string()))?;
        self.dispatch(request, token_attached).await
    }

    pub async fn get_with_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, ApiError> {
        let (builder, token_attached) = authorize(Request::get(&self.url(path)));
        let request = builder
            .query(query.iter().copied())
            .build()
            .map_err(|e| ApiError::network(e.to_string()))?;
        self.dispatch(request, token_attached).await
    }

    pub async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let (builder, token_attached) = authorize(Request::post(&self.url(path)));
        let request = builder
            .json(body)
            .map_err(|e| ApiError::parse(e.to_string()))?;
        self.dispatch(request, token_attached).await
    }

    pub async fn put<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let (builder, token_attached) = authorize(Request::put(&self.url(path)));
        let request = builder
            .json(body)
            .map_err(|e| ApiError::parse(e.to_string()))?;
        self.dispatch(request, token_attached).await
    }

    pub async fn patch<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let (builder, token_attached) = authorize(Request::patch(&self.url(path)));
        let request = builder
            .json(body)
            .map_err(|e| ApiError::parse(e.to_string()))?;
        self.dispatch(request, token_attached).await
    }

    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let (builder, token_attached) = authorize(Request::delete(&self.url(path)));
        let request = builder
            .build()
            .map_err(|e| ApiError::network(e.to_string()))?;
        self.dispatch(request, token_attached).await
    }

    /// Enviar con timeout fijo y aplicar las dos fases del interceptor.
    async fn dispatch<T: DeserializeOwned>(
        &self,
        request: Request,
        token_attached: bool,
    ) -> Result<T, ApiError> {
        let send = request.send().fuse();
        let timeout = TimeoutFuture::new(REQUEST_TIMEOUT_MS).fuse();
        pin_mut!(send, timeout);

        let response = select! {
            result = send => result.map_err(|e| ApiError::network(e.to_string()))?,
            _ = timeout => {
                log::error!("⏱️ Timeout de {} ms agotado", REQUEST_TIMEOUT_MS);
                return Err(ApiError::timeout());
            }
        };

        self.handle_response(response, token_attached).await
    }

    async fn handle_response<T: DeserializeOwned>(
        &self,
        response: Response,
        token_attached: bool,
    ) -> Result<T, ApiError> {
        if response.ok() {
            return response
                .json::<T>()
                .await
                .map_err(|e| ApiError::parse(e.to_string()));
        }

        let status = response.status();
        let body = response.json::<ErrorBody>().await.ok();
        let (message, errors) = match body {
            Some(body) => (body.message, body.errors.unwrap_or_default()),
            None => (None, Vec::new()),
        };

        if status == 401 {
            on_unauthorized_response(token_attached, self.on_unauthorized.as_ref());
            return Err(ApiError {
                kind: ApiErrorKind::Unauthorized,
                status: Some(status),
                message,
                errors,
            });
        }

        Err(ApiError {
            kind: ApiErrorKind::Backend,
            status: Some(status),
            message,
            errors,
        })
    }
}

/// Fase de request del interceptor: adjuntar `Authorization: Bearer <token>`
/// si hay token persistido. Devuelve si se adjuntó, para la fase de response.
fn authorize(builder: RequestBuilder) -> (RequestBuilder, bool) {
    match auth_storage::get_token() {
        Some(token) if !token.is_empty() => {
            let builder = builder.header("Authorization", &format!("Bearer {}", token));
            (builder, true)
        }
        _ => (builder, false),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mensaje_de_usuario_por_tipo_de_error() {
        let network = ApiError::network("fetch failed".to_string());
        assert_eq!(network.user_message(), NETWORK_ERROR);

        let timeout = ApiError::timeout();
        assert!(timeout.user_message().contains("tardó demasiado"));

        let backend = ApiError {
            kind: ApiErrorKind::Backend,
            status: Some(422),
            message: Some("datos inválidos".to_string()),
            errors: vec!["curp".to_string()],
        };
        assert_eq!(backend.user_message(), "datos inválidos");
    }

    #[test]
    fn backend_sin_mensaje_cae_al_generico() {
        let backend = ApiError {
            kind: ApiErrorKind::Backend,
            status: Some(500),
            message: None,
            errors: Vec::new(),
        };
        assert_eq!(backend.user_message(), GENERIC_ERROR);
    }

    #[test]
    fn into_result_conserva_los_errores_de_campo() {
        let error = ApiError {
            kind: ApiErrorKind::Backend,
            status: Some(400),
            message: Some("revisa el formulario".to_string()),
            errors: vec!["email".to_string(), "password".to_string()],
        };
        match error.into_result::<()>() {
            ApiResult::Failure { message, errors } => {
                assert_eq!(message, "revisa el formulario");
                assert_eq!(errors.len(), 2);
            }
            ApiResult::Success { .. } => panic!("debería ser fallo"),
        }
    }

    #[test]
    fn display_incluye_status_y_mensaje() {
        let error = ApiError {
            kind: ApiErrorKind::Backend,
            status: Some(404),
            message: Some("no encontrado".to_string()),
            errors: Vec::new(),
        };
        assert_eq!(error.to_string(), "HTTP 404: no encontrado");
    }
}
