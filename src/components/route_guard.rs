// ============================================================================
// ROUTE GUARD - Control de acceso por rol a subárboles de pantalla
// ============================================================================

use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::access_denied::AccessDenied;
use crate::hooks::use_auth;
use crate::models::Role;
use crate::router::Route;

/// Decisión del guard, separada del render para poder probarla sin DOM.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    /// La sesión aún se está hidratando: mostrar espera, no redirigir.
    Loading,
    /// Sin sesión: al login.
    RedirectToLogin,
    /// Con sesión pero sin el rol requerido: pantalla de acceso denegado,
    /// nunca un rebote al login (el usuario SÍ está autenticado).
    AccessDenied,
    Allow,
}

/// Se evalúa en cada render: un logout invalida de inmediato todo subárbol
/// protegido. Una lista de roles vacía significa "cualquier usuario
/// autenticado".
pub fn evaluate_guard(
    is_loading: bool,
    is_authenticated: bool,
    role: Option<&Role>,
    allowed: &[Role],
) -> GuardDecision {
    if is_loading {
        return GuardDecision::Loading;
    }
    if !is_authenticated {
        return GuardDecision::RedirectToLogin;
    }
    if allowed.is_empty() {
        return GuardDecision::Allow;
    }
    match role {
        Some(role) if allowed.contains(role) => GuardDecision::Allow,
        _ => GuardDecision::AccessDenied,
    }
}

#[derive(Properties, PartialEq)]
pub struct RequireRoleProps {
    /// Roles admitidos; vacío = basta con estar autenticado.
    #[prop_or_default]
    pub allowed_roles: Vec<Role>,
    pub children: Children,
}

#[function_component(RequireRole)]
pub fn require_role(props: &RequireRoleProps) -> Html {
    let auth = use_auth();

    match evaluate_guard(
        auth.is_loading(),
        auth.is_authenticated(),
        auth.role().as_ref(),
        &props.allowed_roles,
    ) {
        GuardDecision::Loading => html! {
            <div class="guard-loading">
                <div class="spinner"></div>
                <p>{"Verificando sesión..."}</p>
            </div>
        },
        GuardDecision::RedirectToLogin => html! {
            <Redirect<Route> to={Route::Login} />
        },
        GuardDecision::AccessDenied => html! {
            <AccessDenied />
        },
        GuardDecision::Allow => html! {
            <>{ for props.children.iter() }</>
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn admin_only() -> Vec<Role> {
        vec![Role::Administrador]
    }

    #[test]
    fn cargando_no_redirige() {
        let decision = evaluate_guard(true, false, None, &admin_only());
        assert_eq!(decision, GuardDecision::Loading);
    }

    #[test]
    fn sin_sesion_redirige_al_login() {
        let decision = evaluate_guard(false, false, None, &admin_only());
        assert_eq!(decision, GuardDecision::RedirectToLogin);
    }

    #[test]
    fn rol_insuficiente_muestra_acceso_denegado() {
        let decision = evaluate_guard(false, true, Some(&Role::Dueno), &admin_only());
        assert_eq!(decision, GuardDecision::AccessDenied);
    }

    #[test]
    fn rol_permitido_renderiza() {
        let decision = evaluate_guard(false, true, Some(&Role::Administrador), &admin_only());
        assert_eq!(decision, GuardDecision::Allow);
    }

    #[test]
    fn lista_vacia_admite_cualquier_autenticado() {
        let role = Role::Otro("auditor".to_string());
        let decision = evaluate_guard(false, true, Some(&role), &[]);
        assert_eq!(decision, GuardDecision::Allow);
    }

    #[test]
    fn autenticado_sin_perfil_no_pasa_un_guard_con_roles() {
        let decision = evaluate_guard(false, true, None, &admin_only());
        assert_eq!(decision, GuardDecision::AccessDenied);
    }
}
