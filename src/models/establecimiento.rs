use serde::{Deserialize, Serialize};

/// Negocio afiliado al programa.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Establecimiento {
    pub id: i64,
    pub nombre: String,
    #[serde(default)]
    pub categoria: Option<String>,
    pub activo: bool,
}

/// Sucursal de un establecimiento. Las coordenadas pueden faltar si la
/// dirección aún no fue geocodificada por el backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sucursal {
    pub id: i64,
    pub establecimiento_id: i64,
    pub nombre: String,
    #[serde(default)]
    pub direccion: Option<String>,
    #[serde(default)]
    pub latitud: Option<f64>,
    #[serde(default)]
    pub longitud: Option<f64>,
}
