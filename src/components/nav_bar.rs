use yew::prelude::*;
use yew_router::prelude::*;

use crate::hooks::use_auth;
use crate::models::Role;
use crate::router::Route;

/// Barra superior de las pantallas protegidas: identidad del usuario,
/// accesos según rol y botón de salida.
#[function_component(NavBar)]
pub fn nav_bar() -> Html {
    let auth = use_auth();

    let on_logout = {
        let auth = auth.clone();
        Callback::from(move |_: MouseEvent| {
            auth.logout();
        })
    };

    let user = auth.user();
    let (nombre, rol_label) = match &user {
        Some(u) => (u.nombre_usuario.clone(), u.role.label().to_string()),
        None => (String::new(), String::new()),
    };

    let admin_links = matches!(auth.role(), Some(Role::Administrador));

    html! {
        <header class="nav-bar">
            <div class="nav-brand">
                <span class="logo-icon">{"🎟️"}</span>
                <span class="nav-title">{"Beneficio Joven"}</span>
            </div>
            <nav class="nav-links">
                if admin_links {
                    <>
                        <Link<Route> to={Route::AdminDashboard}>{"Panel"}</Link<Route>>
                        <Link<Route> to={Route::AdminBeneficiarios}>{"Beneficiarios"}</Link<Route>>
                        <Link<Route> to={Route::AdminModeracion}>{"Moderación"}</Link<Route>>
                    </>
                }
            </nav>
            <div class="nav-user">
                <span class="nav-username">{nombre}</span>
                <span class="nav-role">{rol_label}</span>
                <button class="btn-logout" onclick={on_logout}>
                    {"Cerrar sesión"}
                </button>
            </div>
        </header>
    }
}
