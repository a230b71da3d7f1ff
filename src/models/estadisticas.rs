use serde::{Deserialize, Serialize};

use super::{Establecimiento, Promocion, Sucursal};

/// Agregados que alimentan el panel del administrador.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EstadisticasDashboard {
    pub total_beneficiarios: u64,
    pub total_establecimientos: u64,
    pub total_promociones: u64,
    pub promociones_pendientes: u64,
    #[serde(default)]
    pub canjes_ultimo_mes: Option<u64>,
}

/// Resumen que ve un dueño al entrar: su negocio, sus sucursales y sus
/// promociones. `establecimiento` puede faltar si el alta del negocio
/// sigue en trámite.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumenDueno {
    #[serde(default)]
    pub establecimiento: Option<Establecimiento>,
    #[serde(default)]
    pub sucursales: Vec<Sucursal>,
    #[serde(default)]
    pub promociones: Vec<Promocion>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resumen_del_dueno_incluye_su_negocio() {
        let raw = r#"{
            "establecimiento": {"id": 3, "nombre": "Café Centro", "categoria": "alimentos", "activo": true},
            "sucursales": [],
            "promociones": []
        }"#;
        let resumen: ResumenDueno = serde_json::from_str(raw).unwrap();
        let negocio = resumen.establecimiento.expect("el negocio debería venir en el resumen");
        assert_eq!(negocio.nombre, "Café Centro");
        assert!(negocio.activo);
    }

    #[test]
    fn resumen_sin_negocio_dado_de_alta() {
        let resumen: ResumenDueno = serde_json::from_str("{}").unwrap();
        assert!(resumen.establecimiento.is_none());
        assert!(resumen.sucursales.is_empty());
    }
}
