use yew_router::prelude::*;

use crate::models::Role;

/// Rutas de la consola. Las secciones protegidas se envuelven en
/// `RequireRole` al resolver el switch (ver app.rs).
#[derive(Routable, Debug, Clone, PartialEq, Eq)]
pub enum Route {
    #[at("/login")]
    Login,
    #[at("/registro")]
    Register,
    #[at("/")]
    Dashboard,
    #[at("/admin")]
    AdminDashboard,
    #[at("/admin/beneficiarios")]
    AdminBeneficiarios,
    #[at("/admin/promociones")]
    AdminModeracion,
    #[at("/dueno")]
    OwnerDashboard,
    #[at("/beneficiario")]
    BeneficiaryDashboard,
    #[not_found]
    #[at("/404")]
    NotFound,
}

/// Pantalla de inicio según el rol, decidida tras el login. El match es
/// exhaustivo: agregar un rol nuevo obliga a elegirle destino aquí.
pub fn landing_route(role: &Role) -> Route {
    match role {
        Role::Administrador => Route::AdminDashboard,
        Role::Dueno => Route::OwnerDashboard,
        Role::Beneficiario => Route::BeneficiaryDashboard,
        Role::Otro(_) => Route::Dashboard,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cada_rol_tiene_pantalla_de_inicio() {
        assert_eq!(landing_route(&Role::Administrador), Route::AdminDashboard);
        assert_eq!(landing_route(&Role::Dueno), Route::OwnerDashboard);
        assert_eq!(landing_route(&Role::Beneficiario), Route::BeneficiaryDashboard);
    }

    #[test]
    fn rol_desconocido_cae_al_dashboard_generico() {
        let role = Role::Otro("auditor".to_string());
        assert_eq!(landing_route(&role), Route::Dashboard);
    }
}
