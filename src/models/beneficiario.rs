use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Beneficiario del programa. Proyección de solo lectura del backend;
/// este cliente nunca es la fuente de verdad.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Beneficiario {
    pub id: i64,
    pub nombre: String,
    #[serde(default)]
    pub apellido_paterno: Option<String>,
    #[serde(default)]
    pub apellido_materno: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub curp: Option<String>,
    pub activo: bool,
    #[serde(default)]
    pub fecha_registro: Option<DateTime<Utc>>,
}

impl Beneficiario {
    pub fn nombre_completo(&self) -> String {
        let mut nombre = self.nombre.clone();
        if let Some(paterno) = &self.apellido_paterno {
            nombre.push(' ');
            nombre.push_str(paterno);
        }
        if let Some(materno) = &self.apellido_materno {
            nombre.push(' ');
            nombre.push_str(materno);
        }
        nombre
    }
}

/// Cuerpo del PATCH para activar/desactivar un beneficiario.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CambioEstadoRequest {
    pub activo: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nombre_completo_omite_apellidos_ausentes() {
        let b = Beneficiario {
            id: 1,
            nombre: "Ana".to_string(),
            apellido_paterno: Some("García".to_string()),
            apellido_materno: None,
            email: None,
            curp: None,
            activo: true,
            fecha_registro: None,
        };
        assert_eq!(b.nombre_completo(), "Ana García");
    }
}
