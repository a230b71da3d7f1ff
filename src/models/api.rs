// ============================================================================
// RESULT ENVELOPE - Normalización de respuestas del backend
// ============================================================================

use serde::Deserialize;

/// Mensaje genérico cuando el backend no aporta uno propio.
pub const GENERIC_ERROR: &str = "Ocurrió un error inesperado. Intenta de nuevo.";

/// Mensaje para fallos de red o timeout.
pub const NETWORK_ERROR: &str = "No se pudo conectar con el servidor. Verifica tu conexión.";

/// Forma JSON que devuelve el backend en casi todos los endpoints:
/// `{ success, data?, message?, errors? }`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Envelope<T> {
    pub success: bool,
    #[serde(default)]
    pub data: Option<T>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub errors: Option<Vec<String>>,
}

impl<T> Envelope<T> {
    /// Convertir la forma del backend al resultado etiquetado local.
    pub fn into_result(self) -> ApiResult<T> {
        match (self.success, self.data) {
            (true, Some(data)) => ApiResult::Success { data },
            (true, None) => ApiResult::failure("El servidor devolvió una respuesta incompleta."),
            (false, _) => ApiResult::Failure {
                message: self.message.unwrap_or_else(|| GENERIC_ERROR.to_string()),
                errors: self.errors.unwrap_or_default(),
            },
        }
    }
}

/// Resultado normalizado de toda operación remota. Los callers deben
/// manejar ambas ramas explícitamente; ninguna capa pública lanza pánico.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiResult<T> {
    Success { data: T },
    Failure { message: String, errors: Vec<String> },
}

impl<T> ApiResult<T> {
    pub fn success(data: T) -> Self {
        ApiResult::Success { data }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        ApiResult::Failure {
            message: message.into(),
            errors: Vec::new(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ApiResult::Success { .. })
    }

    /// Mensaje de error, si lo hay.
    pub fn message(&self) -> Option<&str> {
        match self {
            ApiResult::Success { .. } => None,
            ApiResult::Failure { message, .. } => Some(message),
        }
    }

    pub fn data(self) -> Option<T> {
        match self {
            ApiResult::Success { data } => Some(data),
            ApiResult::Failure { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_exitoso_con_data() {
        let envelope: Envelope<u32> = serde_json::from_str(r#"{"success":true,"data":7}"#).unwrap();
        assert_eq!(envelope.into_result(), ApiResult::Success { data: 7 });
    }

    #[test]
    fn envelope_fallido_conserva_mensaje_y_errores() {
        let raw = r#"{"success":false,"message":"credenciales inválidas","errors":["email"]}"#;
        let envelope: Envelope<u32> = serde_json::from_str(raw).unwrap();
        let result = envelope.into_result();
        assert_eq!(result.message(), Some("credenciales inválidas"));
        match result {
            ApiResult::Failure { errors, .. } => assert_eq!(errors, vec!["email".to_string()]),
            ApiResult::Success { .. } => panic!("debería ser fallo"),
        }
    }

    #[test]
    fn envelope_fallido_sin_mensaje_usa_generico() {
        let envelope: Envelope<u32> = serde_json::from_str(r#"{"success":false}"#).unwrap();
        assert_eq!(envelope.into_result().message(), Some(GENERIC_ERROR));
    }

    #[test]
    fn exito_sin_data_es_fallo() {
        let envelope: Envelope<u32> = serde_json::from_str(r#"{"success":true}"#).unwrap();
        assert!(!envelope.into_result().is_success());
    }
}
