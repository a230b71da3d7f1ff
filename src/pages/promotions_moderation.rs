use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::models::{ApiResult, Envelope, EstadoPromocion, ModeracionRequest, Promocion};
use crate::services::ApiClient;

/// Cola de moderación: promociones enviadas por dueños a la espera de
/// aprobación o rechazo del administrador.
#[function_component(PromotionsModerationPage)]
pub fn promotions_moderation_page() -> Html {
    let pendientes = use_state(Vec::<Promocion>::new);
    let loading = use_state(|| true);
    let error = use_state(|| None::<String>);

    {
        let pendientes = pendientes.clone();
        let loading = loading.clone();
        let error = error.clone();

        use_effect_with((), move |_| {
            spawn_local(async move {
                let client = ApiClient::new();
                match client
                    .get::<Envelope<Vec<Promocion>>>("/admin/promociones/pendientes")
                    .await
                {
                    Ok(envelope) => match envelope.into_result() {
                        ApiResult::Success { data } => {
                            log::info!("🕐 {} promociones pendientes", data.len());
                            pendientes.set(data);
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

    let on_moderate = {
        let pendientes = pendientes.clone();
        let error = error.clone();

        Callback::from(move |(id, estado): (i64, EstadoPromocion)| {
            let pendientes = pendientes.clone();
            let error = error.clone();

            spawn_local(async move {
                let client = ApiClient::new();
                let body = ModeracionRequest {
                    estado,
                    motivo: None,
                };
                let path = format!("/admin/promociones/{}/estado", id);

                match client.put::<_, Envelope<Promocion>>(&path, &body).await {
                    Ok(envelope) => match envelope.into_result() {
                        ApiResult::Success { data } => {
                            log::info!("✅ Promoción {} → {}", data.id, data.estado.label());
                            let restantes = pendientes
                                .iter()
                                .filter(|p| p.id != id)
                                .cloned()
                                .collect::<Vec<_>>();
                            pendientes.set(restantes);
                        }
                        ApiResult::Failure { message, .. } => error.set(Some(message)),
                    },
                    Err(e) => error.set(Some(e.user_message())),
                }
            });
        })
    };

    html! {
        <main class="page moderation-page">
            <h2>{"Moderación de promociones"}</h2>

            if let Some(message) = (*error).clone() {
                <div class="error-banner">{message}</div>
            }

            if *loading {
                <p class="loading">{"Cargando promociones pendientes..."}</p>
            } else if pendientes.is_empty() {
                <p class="empty">{"No hay promociones por moderar. 🎉"}</p>
            } else {
                <div class="promo-queue">
                    { for pendientes.iter().map(|p| {
                        let approve = on_moderate.clone();
                        let reject = on_moderate.clone();
                        let id = p.id;
                        html! {
                            <div class="promo-card" key={p.id.to_string()}>
                                <div class="promo-info">
                                    <h3>{p.titulo.clone()}</h3>
                                    if let Some(nombre) = p.establecimiento_nombre.clone() {
                                        <span class="promo-business">{nombre}</span>
                                    }
                                    if let Some(desc) = p.descripcion.clone() {
                                        <p class="promo-description">{desc}</p>
                                    }
                                    if let Some(descuento) = p.descuento {
                                        <span class="promo-discount">{format!("{descuento}% de descuento")}</span>
                                    }
                                </div>
                                <div class="promo-actions">
                                    <button
                                        class="btn-approve"
                                        onclick={Callback::from(move |_| approve.emit((id, EstadoPromocion::Aprobada)))}
                                    >
                                        {"Aprobar"}
                                    </button>
                                    <button
                                        class="btn-reject"
                                        onclick={Callback::from(move |_| reject.emit((id, EstadoPromocion::Rechazada)))}
                                    >
                                        {"Rechazar"}
                                    </button>
                                </div>
                            </div>
                        }
                    }) }
                </div>
            }
        </main>
    }
}
