use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::models::{ApiResult, Envelope, Promocion};
use crate::services::ApiClient;

/// Panel del beneficiario: promociones vigentes para canjear.
#[function_component(BeneficiaryDashboard)]
pub fn beneficiary_dashboard() -> Html {
    let promociones = use_state(Vec::<Promocion>::new);
    let loading = use_state(|| true);
    let error = use_state(|| None::<String>);

    {
        let promociones = promociones.clone();
        let loading = loading.clone();
        let error = error.clone();

        use_effect_with((), move |_| {
            spawn_local(async move {
                let client = ApiClient::new();
                match client
                    .get::<Envelope<Vec<Promocion>>>("/common/promociones/activas")
                    .await
                {
                    Ok(envelope) => match envelope.into_result() {
                        ApiResult::Success { data } => promociones.set(data),
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
        <main class="dashboard beneficiary-dashboard">
            <h2>{"Promociones disponibles"}</h2>

            if *loading {
                <p class="loading">{"Buscando promociones..."}</p>
            } else if let Some(message) = (*error).clone() {
                <div class="error-banner">{message}</div>
            } else if promociones.is_empty() {
                <p class="empty">{"No hay promociones vigentes por ahora."}</p>
            } else {
                <div class="promo-grid">
                    { for promociones.iter().map(|p| html! {
                        <div class="promo-card" key={p.id.to_string()}>
                            <h3>{p.titulo.clone()}</h3>
                            if let Some(nombre) = p.establecimiento_nombre.clone() {
                                <span class="promo-business">{nombre}</span>
                            }
                            if let Some(descuento) = p.descuento {
                                <span class="promo-discount">{format!("-{descuento}%")}</span>
                            }
                            if let Some(fin) = p.fecha_fin {
                                <span class="promo-expiry">{format!("Vigente hasta {}", fin.format("%d/%m/%Y"))}</span>
                            }
                        </div>
                    }) }
                </div>
            }
        </main>
    }
}
