use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Rol del usuario dentro del programa. Determina la pantalla de inicio
/// y qué secciones puede visitar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Role {
    Administrador,
    Dueno,
    Beneficiario,
    /// Rol desconocido para este cliente; se conserva tal cual para
    /// no perder información al re-serializar.
    Otro(String),
}

impl Role {
    /// El backend envía el rol como string en minúsculas; "dueño" llega
    /// a veces con acento y a veces sin él.
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "administrador" => Role::Administrador,
            "dueno" | "dueño" => Role::Dueno,
            "beneficiario" => Role::Beneficiario,
            _ => Role::Otro(raw.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Role::Administrador => "administrador",
            Role::Dueno => "dueño",
            Role::Beneficiario => "beneficiario",
            Role::Otro(raw) => raw,
        }
    }

    /// Etiqueta para mostrar en la interfaz.
    pub fn label(&self) -> &str {
        match self {
            Role::Administrador => "Administrador",
            Role::Dueno => "Dueño de negocio",
            Role::Beneficiario => "Beneficiario",
            Role::Otro(raw) => raw,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Role {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Role {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Role::parse(&raw))
    }
}

/// Perfil del usuario autenticado. Payload opaco del backend: solo se usa
/// para mostrar datos y decidir rutas por rol, sin validación local.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: i64,
    pub nombre_usuario: String,
    pub email: String,
    pub role: Role,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Cuerpo de `data` en la respuesta de /auth/login.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LoginData {
    pub token: String,
    pub user: UserProfile,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub nombre_usuario: String,
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telefono: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rol_dueno_con_y_sin_acento() {
        assert_eq!(Role::parse("dueño"), Role::Dueno);
        assert_eq!(Role::parse("dueno"), Role::Dueno);
        assert_eq!(Role::parse("DUEÑO"), Role::Dueno);
    }

    #[test]
    fn rol_desconocido_sobrevive_al_round_trip() {
        let role = Role::parse("auditor");
        assert_eq!(role, Role::Otro("auditor".to_string()));
        let json = serde_json::to_string(&role).unwrap();
        assert_eq!(json, r#""auditor""#);
        let back: Role = serde_json::from_str(&json).unwrap();
        assert_eq!(back, role);
    }

    #[test]
    fn perfil_se_deserializa_con_nombres_del_backend() {
        let raw = r#"{"id":12,"nombreUsuario":"mperez","email":"mperez@example.mx","role":"administrador"}"#;
        let user: UserProfile = serde_json::from_str(raw).unwrap();
        assert_eq!(user.nombre_usuario, "mperez");
        assert_eq!(user.role, Role::Administrador);
    }
}
