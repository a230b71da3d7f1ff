use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::models::{ApiResult, Envelope, EstadoPromocion, ResumenDueno};
use crate::services::ApiClient;

/// Panel del dueño: sus sucursales y el estado de sus promociones.
#[function_component(OwnerDashboard)]
pub fn owner_dashboard() -> Html {
    let resumen = use_state(|| None::<ResumenDueno>);
    let loading = use_state(|| true);
    let error = use_state(|| None::<String>);

    {
        let resumen = resumen.clone();
        let loading = loading.clone();
        let error = error.clone();

        use_effect_with((), move |_| {
            spawn_local(async move {
                let client = ApiClient::new();
                match client.get::<Envelope<ResumenDueno>>("/owner/resumen").await {
                    Ok(envelope) => match envelope.into_result() {
                        ApiResult::Success { data } => resumen.set(Some(data)),
                        ApiResult::Failure { message, .. } => error.set(Some(message)),
                    },
                    Err(e) => error.set(Some(e.user_message())),
                }
                loading.set(false);
            });
            || ()
        });
    }

    html! {
        <main class="dashboard owner-dashboard">
            <h2>{"Mi negocio"}</h2>

            if *loading {
                <p class="loading">{"Cargando resumen..."}</p>
            } else if let Some(message) = (*error).clone() {
                <div class="error-banner">{message}</div>
            } else if let Some(resumen) = (*resumen).clone() {
                <>
                if let Some(negocio) = resumen.establecimiento.clone() {
                    <section class="business-header">
                        <h3>{negocio.nombre}</h3>
                        if let Some(categoria) = negocio.categoria {
                            <span class="business-category">{categoria}</span>
                        }
                        <span class={if negocio.activo { "badge active" } else { "badge inactive" }}>
                            { if negocio.activo { "Afiliado" } else { "Suspendido" } }
                        </span>
                    </section>
                } else {
                    <p class="hint">{"Tu negocio aún no está dado de alta en el programa."}</p>
                }
                <section class="branches">
                    <h3>{format!("Sucursales ({})", resumen.sucursales.len())}</h3>
                    if resumen.sucursales.is_empty() {
                        <p class="empty">{"Aún no registras sucursales."}</p>
                    } else {
                        <ul class="branch-list">
                            { for resumen.sucursales.iter().map(|s| html! {
                                <li key={s.id.to_string()}>
                                    <strong>{s.nombre.clone()}</strong>
                                    if let Some(direccion) = s.direccion.clone() {
                                        <span class="branch-address">{direccion}</span>
                                    }
                                </li>
                            }) }
                        </ul>
                    }
                </section>

                <section class="promotions">
                    <h3>{format!("Promociones ({})", resumen.promociones.len())}</h3>
                    if resumen.promociones.is_empty() {
                        <p class="empty">{"No tienes promociones registradas."}</p>
                    } else {
                        <ul class="promo-list">
                            { for resumen.promociones.iter().map(|p| {
                                let badge = match p.estado {
                                    EstadoPromocion::Aprobada => "badge active",
                                    EstadoPromocion::Pendiente => "badge pending",
                                    EstadoPromocion::Rechazada => "badge inactive",
                                };
                                html! {
                                    <li key={p.id.to_string()}>
                                        <span class="promo-title">{p.titulo.clone()}</span>
                                        <span class={badge}>{p.estado.label()}</span>
                                    </li>
                                }
                            }) }
                        </ul>
                    }
                </section>
                </>
            }
        </main>
    }
}
