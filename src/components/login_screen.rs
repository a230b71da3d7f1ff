use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::hooks::use_auth;
use crate::models::ApiResult;
use crate::router::{landing_route, Route};

/// Pantalla de inicio de sesión. El error de credenciales se muestra
/// inline junto al formulario, nunca como redirección global.
#[function_component(LoginScreen)]
pub fn login_screen() -> Html {
    let auth = use_auth();

    let email_ref = use_node_ref();
    let password_ref = use_node_ref();
    let error = use_state(|| None::<String>);
    let loading = use_state(|| false);

    // Con sesión activa no tiene sentido ver el login
    if auth.is_authenticated() {
        if let Some(role) = auth.role() {
            return html! { <Redirect<Route> to={landing_route(&role)} /> };
        }
    }

    let on_submit = {
        let auth = auth.clone();
        let email_ref = email_ref.clone();
        let password_ref = password_ref.clone();
        let error = error.clone();
        let loading = loading.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            if *loading {
                return;
            }

            let (Some(email_input), Some(password_input)) = (
                email_ref.cast::<HtmlInputElement>(),
                password_ref.cast::<HtmlInputElement>(),
            ) else {
                return;
            };

            let email = email_input.value();
            let password = password_input.value();

            if email.is_empty() || password.is_empty() {
                error.set(Some("Completa correo y contraseña.".to_string()));
                return;
            }

            let auth = auth.clone();
            let error = error.clone();
            let loading = loading.clone();

            loading.set(true);
            error.set(None);

            spawn_local(async move {
                match auth.login(email, password).await {
                    ApiResult::Success { .. } => {
                        // La navegación por rol ya la hizo el contexto
                    }
                    ApiResult::Failure { message, .. } => {
                        error.set(Some(message));
                    }
                }
                loading.set(false);
            });
        })
    };

    html! {
        <div class="login-screen">
            <div class="login-container">
                <div class="login-header">
                    <div class="login-logo">
                        <div class="logo-icon">{"🎟️"}</div>
                    </div>
                    <h1>{"Beneficio Joven"}</h1>
                    <p>{"Consola administrativa del programa"}</p>
                </div>

                <form class="login-form" onsubmit={on_submit}>
                    <div class="form-group">
                        <label for="email">{"Correo electrónico"}</label>
                        <input
                            type="email"
                            id="email"
                            name="email"
                            placeholder="tu@correo.com"
                            ref={email_ref}
                            required=true
                        />
                    </div>

                    <div class="form-group">
                        <label for="password">{"Contraseña"}</label>
                        <input
                            type="password"
                            id="password"
                            name="password"
                            placeholder="Ingresa tu contraseña"
                            ref={password_ref}
                            required=true
                        />
                    </div>

                    if let Some(message) = (*error).clone() {
                        <div class="form-error">{message}</div>
                    }

                    <button type="submit" class="btn-login" disabled={*loading}>
                        <span class="btn-text">
                            { if *loading { "Entrando..." } else { "Iniciar sesión" } }
                        </span>
                    </button>

                    <div class="login-footer">
                        <p class="register-text">{"¿Aún no tienes cuenta?"}</p>
                        <Link<Route> to={Route::Register} classes="btn-register-link">
                            {"Regístrate"}
                        </Link<Route>>
                    </div>
                </form>
            </div>
        </div>
    }
}
