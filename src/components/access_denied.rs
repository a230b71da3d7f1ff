use yew::prelude::*;
use yew_router::prelude::*;

use crate::hooks::use_auth;
use crate::router::{landing_route, Route};

/// Pantalla para usuarios autenticados pero sin el rol requerido.
/// Ofrece volver atrás o ir a su propio panel; nunca rebota al login.
#[function_component(AccessDenied)]
pub fn access_denied() -> Html {
    let auth = use_auth();
    let navigator = use_navigator();

    let destino = auth
        .role()
        .map(|role| landing_route(&role))
        .unwrap_or(Route::Dashboard);

    let on_back = Callback::from(move |_: MouseEvent| {
        if let Some(nav) = &navigator {
            nav.back();
        }
    });

    html! {
        <div class="access-denied">
            <div class="access-denied-card">
                <div class="icon">{"🚫"}</div>
                <h2>{"Acceso denegado"}</h2>
                <p>{"Tu cuenta no tiene permisos para ver esta sección."}</p>
                <div class="actions">
                    <button class="btn-secondary" onclick={on_back}>
                        {"Volver"}
                    </button>
                    <Link<Route> to={destino} classes="btn-primary">
                        {"Ir a mi panel"}
                    </Link<Route>>
                </div>
            </div>
        </div>
    }
}
