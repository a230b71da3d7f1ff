use yew::prelude::*;

use crate::hooks::use_auth;

/// Pantalla de inicio genérica: destino de los roles sin panel propio.
#[function_component(Dashboard)]
pub fn dashboard() -> Html {
    let auth = use_auth();
    let nombre = auth
        .user()
        .map(|u| u.nombre_usuario)
        .unwrap_or_else(|| "usuario".to_string());

    html! {
        <main class="dashboard generic-dashboard">
            <h2>{format!("Hola, {nombre}")}</h2>
            <p>{"Bienvenido a la consola de Beneficio Joven."}</p>
            <p class="hint">
                {"Tu cuenta no tiene un panel asignado todavía; contacta al administrador si crees que es un error."}
            </p>
        </main>
    }
}
