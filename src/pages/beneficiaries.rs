use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::models::{ApiResult, Beneficiario, CambioEstadoRequest, Envelope};
use crate::services::ApiClient;

/// Listado de beneficiarios para el administrador, con alta/baja lógica.
#[function_component(BeneficiariesPage)]
pub fn beneficiaries_page() -> Html {
    let beneficiarios = use_state(Vec::<Beneficiario>::new);
    let loading = use_state(|| true);
    let error = use_state(|| None::<String>);

    {
        let beneficiarios = beneficiarios.clone();
        let loading = loading.clone();
        let error = error.clone();

        use_effect_with((), move |_| {
            spawn_local(async move {
                let client = ApiClient::new();
                match client
                    .get::<Envelope<Vec<Beneficiario>>>("/admin/beneficiarios")
                    .await
                {
                    Ok(envelope) => match envelope.into_result() {
                        ApiResult::Success { data } => {
                            log::info!("📋 {} beneficiarios cargados", data.len());
                            beneficiarios.set(data);
                        }
                        ApiResult::Failure { message, .. } => error.set(Some(message)),
                    },
                    Err(e) => error.set(Some(e.user_message())),
                }
                loading.set(false);
            });
            || ()
        });
    }

    let on_toggle = {
        let beneficiarios = beneficiarios.clone();
        let error = error.clone();

        Callback::from(move |(id, activo): (i64, bool)| {
            let beneficiarios = beneficiarios.clone();
            let error = error.clone();

            spawn_local(async move {
                let client = ApiClient::new();
                let body = CambioEstadoRequest { activo: !activo };
                let path = format!("/admin/beneficiarios/{}/estado", id);

                match client.patch::<_, Envelope<Beneficiario>>(&path, &body).await {
                    Ok(envelope) => match envelope.into_result() {
                        ApiResult::Success { data } => {
                            let updated = beneficiarios
                                .iter()
                                .map(|b| if b.id == data.id { data.clone() } else { b.clone() })
                                .collect::<Vec<_>>();
                            beneficiarios.set(updated);
                        }
                        ApiResult::Failure { message, .. } => error.set(Some(message)),
                    },
                    Err(e) => {
                        log::error!("❌ No se pudo cambiar el estado: {}", e);
                        error.set(Some(e.user_message()));
                    }
                }
            });
        })
    };

    html! {
        <main class="page beneficiaries-page">
            <h2>{"Beneficiarios"}</h2>

            if let Some(message) = (*error).clone() {
                <div class="error-banner">{message}</div>
            }

            if *loading {
                <p class="loading">{"Cargando beneficiarios..."}</p>
            } else if beneficiarios.is_empty() {
                <p class="empty">{"No hay beneficiarios registrados."}</p>
            } else {
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>{"Nombre"}</th>
                            <th>{"Correo"}</th>
                            <th>{"CURP"}</th>
                            <th>{"Estado"}</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        { for beneficiarios.iter().map(|b| {
                            let on_toggle = on_toggle.clone();
                            let id = b.id;
                            let activo = b.activo;
                            html! {
                                <tr key={b.id.to_string()}>
                                    <td>{b.nombre_completo()}</td>
                                    <td>{b.email.clone().unwrap_or_default()}</td>
                                    <td>{b.curp.clone().unwrap_or_default()}</td>
                                    <td>
                                        <span class={if activo { "badge active" } else { "badge inactive" }}>
                                            { if activo { "Activo" } else { "Inactivo" } }
                                        </span>
                                    </td>
                                    <td>
                                        <button
                                            class="btn-small"
                                            onclick={Callback::from(move |_| on_toggle.emit((id, activo)))}
                                        >
                                            { if activo { "Desactivar" } else { "Activar" } }
                                        </button>
                                    </td>
                                </tr>
                            }
                        }) }
                    </tbody>
                </table>
            }
        </main>
    }
}
