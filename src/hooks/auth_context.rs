// ============================================================================
// AUTH CONTEXT - Compartir la sesión entre componentes vía Context API
// ============================================================================

use yew::prelude::*;

use crate::hooks::use_auth::{use_auth_provider, UseAuthHandle};

#[derive(Properties, PartialEq)]
pub struct AuthContextProviderProps {
    pub children: Children,
}

/// Provider que envuelve la app y publica el handle de sesión. Debe vivir
/// dentro del router porque necesita el navegador para las redirecciones.
#[function_component(AuthContextProvider)]
pub fn auth_context_provider(props: &AuthContextProviderProps) -> Html {
    let handle = use_auth_provider();

    html! {
        <ContextProvider<UseAuthHandle> context={handle}>
            {props.children.clone()}
        </ContextProvider<UseAuthHandle>>
    }
}

/// Acceso al handle de sesión desde cualquier componente bajo el provider.
#[hook]
pub fn use_auth() -> UseAuthHandle {
    use_context::<UseAuthHandle>()
        .expect("use_auth requiere un AuthContextProvider en el árbol")
}
