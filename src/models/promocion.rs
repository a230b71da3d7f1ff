use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Estado de moderación de una promoción enviada por un dueño.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EstadoPromocion {
    Pendiente,
    Aprobada,
    Rechazada,
}

impl EstadoPromocion {
    pub fn label(&self) -> &'static str {
        match self {
            EstadoPromocion::Pendiente => "Pendiente",
            EstadoPromocion::Aprobada => "Aprobada",
            EstadoPromocion::Rechazada => "Rechazada",
        }
    }
}

/// Descuento promocional de un establecimiento.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Promocion {
    pub id: i64,
    pub titulo: String,
    #[serde(default)]
    pub descripcion: Option<String>,
    pub establecimiento_id: i64,
    #[serde(default)]
    pub establecimiento_nombre: Option<String>,
    /// Porcentaje de descuento (0-100).
    #[serde(default)]
    pub descuento: Option<f32>,
    #[serde(default)]
    pub fecha_inicio: Option<NaiveDate>,
    #[serde(default)]
    pub fecha_fin: Option<NaiveDate>,
    pub estado: EstadoPromocion,
}

/// Cuerpo del PUT de moderación.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModeracionRequest {
    pub estado: EstadoPromocion,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub motivo: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn estado_usa_minusculas_en_el_wire() {
        assert_eq!(
            serde_json::to_string(&EstadoPromocion::Aprobada).unwrap(),
            r#""aprobada""#
        );
        let estado: EstadoPromocion = serde_json::from_str(r#""pendiente""#).unwrap();
        assert_eq!(estado, EstadoPromocion::Pendiente);
    }
}
