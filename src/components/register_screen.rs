use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::hooks::use_auth;
use crate::models::{ApiResult, RegisterRequest};
use crate::router::Route;

/// Registro de usuario. Un alta exitosa NO inicia sesión: se muestra la
/// confirmación y un enlace al login.
#[function_component(RegisterScreen)]
pub fn register_screen() -> Html {
    let auth = use_auth();

    let nombre_ref = use_node_ref();
    let email_ref = use_node_ref();
    let password_ref = use_node_ref();
    let telefono_ref = use_node_ref();

    let error = use_state(|| None::<String>);
    let field_errors = use_state(Vec::<String>::new);
    let success = use_state(|| false);
    let loading = use_state(|| false);

    let on_submit = {
        let auth = auth.clone();
        let nombre_ref = nombre_ref.clone();
        let email_ref = email_ref.clone();
        let password_ref = password_ref.clone();
        let telefono_ref = telefono_ref.clone();
        let error = error.clone();
        let field_errors = field_errors.clone();
        let success = success.clone();
        let loading = loading.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            if *loading {
                return;
            }

            let (Some(nombre), Some(email), Some(password)) = (
                nombre_ref.cast::<HtmlInputElement>(),
                email_ref.cast::<HtmlInputElement>(),
                password_ref.cast::<HtmlInputElement>(),
            ) else {
                return;
            };

            let telefono = telefono_ref
                .cast::<HtmlInputElement>()
                .map(|t| t.value())
                .filter(|t| !t.is_empty());

            let payload = RegisterRequest {
                nombre_usuario: nombre.value(),
                email: email.value(),
                password: password.value(),
                telefono,
            };

            if payload.nombre_usuario.is_empty()
                || payload.email.is_empty()
                || payload.password.is_empty()
            {
                error.set(Some("Completa todos los campos obligatorios.".to_string()));
                return;
            }

            let auth = auth.clone();
            let error = error.clone();
            let field_errors = field_errors.clone();
            let success = success.clone();
            let loading = loading.clone();

            loading.set(true);
            error.set(None);
            field_errors.set(Vec::new());

            spawn_local(async move {
                match auth.register(payload).await {
                    ApiResult::Success { data } => {
                        log::info!("✅ Usuario registrado: {}", data.email);
                        success.set(true);
                    }
                    ApiResult::Failure { message, errors } => {
                        error.set(Some(message));
                        field_errors.set(errors);
                    }
                }
                loading.set(false);
            });
        })
    };

    if *success {
        return html! {
            <div class="register-screen">
                <div class="register-container">
                    <div class="register-success">
                        <div class="icon">{"✅"}</div>
                        <h2>{"Registro exitoso"}</h2>
                        <p>{"Tu cuenta fue creada. Ya puedes iniciar sesión."}</p>
                        <Link<Route> to={Route::Login} classes="btn-primary">
                            {"Ir al login"}
                        </Link<Route>>
                    </div>
                </div>
            </div>
        };
    }

    html! {
        <div class="register-screen">
            <div class="register-container">
                <div class="register-header">
                    <h1>{"Crear cuenta"}</h1>
                    <p>{"Programa Beneficio Joven"}</p>
                </div>

                <form class="register-form" onsubmit={on_submit}>
                    <div class="form-group">
                        <label for="nombre">{"Nombre de usuario"}</label>
                        <input type="text" id="nombre" ref={nombre_ref} required=true />
                    </div>

                    <div class="form-group">
                        <label for="email">{"Correo electrónico"}</label>
                        <input type="email" id="email" ref={email_ref} required=true />
                    </div>

                    <div class="form-group">
                        <label for="password">{"Contraseña"}</label>
                        <input type="password" id="password" ref={password_ref} required=true />
                    </div>

                    <div class="form-group">
                        <label for="telefono">{"Teléfono (opcional)"}</label>
                        <input type="tel" id="telefono" ref={telefono_ref} />
                    </div>

                    if let Some(message) = (*error).clone() {
                        <div class="form-error">
                            <p>{message}</p>
                            if !field_errors.is_empty() {
                                <ul>
                                    { for field_errors.iter().map(|e| html! { <li>{e}</li> }) }
                                </ul>
                            }
                        </div>
                    }

                    <button type="submit" class="btn-register" disabled={*loading}>
                        { if *loading { "Registrando..." } else { "Registrarme" } }
                    </button>

                    <div class="register-footer">
                        <Link<Route> to={Route::Login}>{"Ya tengo cuenta"}</Link<Route>>
                    </div>
                </form>
            </div>
        </div>
    }
}
