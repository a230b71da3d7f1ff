use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::models::{ApiResult, Envelope, EstadisticasDashboard};
use crate::services::ApiClient;

/// Panel del administrador: agregados del programa tal como los devuelve
/// el backend, sin cálculo local.
#[function_component(AdminDashboard)]
pub fn admin_dashboard() -> Html {
    let stats = use_state(|| None::<EstadisticasDashboard>);
    let loading = use_state(|| true);
    let error = use_state(|| None::<String>);

    {
        let stats = stats.clone();
        let loading = loading.clone();
        let error = error.clone();

        use_effect_with((), move |_| {
            spawn_local(async move {
                let client = ApiClient::new();
                match client
                    .get::<Envelope<EstadisticasDashboard>>("/admin/estadisticas")
                    .await
                {
                    Ok(envelope) => match envelope.into_result() {
                        ApiResult::Success { data } => stats.set(Some(data)),
                        ApiResult::Failure { message, .. } => error.set(Some(message)),
                    },
                    Err(e) => {
                        log::error!("❌ Error cargando estadísticas: {}", e);
                        error.set(Some(e.user_message()));
                    }
                }
                loading.set(false);
            });
            || ()
        });
    }

    html! {
        <main class="dashboard admin-dashboard">
            <h2>{"Panel de administración"}</h2>

            if *loading {
                <p class="loading">{"Cargando estadísticas..."}</p>
            } else if let Some(message) = (*error).clone() {
                <div class="error-banner">{message}</div>
            } else if let Some(stats) = (*stats).clone() {
                <div class="stat-cards">
                    <div class="stat-card">
                        <span class="stat-value">{stats.total_beneficiarios}</span>
                        <span class="stat-label">{"Beneficiarios"}</span>
                    </div>
                    <div class="stat-card">
                        <span class="stat-value">{stats.total_establecimientos}</span>
                        <span class="stat-label">{"Establecimientos"}</span>
                    </div>
                    <div class="stat-card">
                        <span class="stat-value">{stats.total_promociones}</span>
                        <span class="stat-label">{"Promociones"}</span>
                    </div>
                    <div class="stat-card highlight">
                        <span class="stat-value">{stats.promociones_pendientes}</span>
                        <span class="stat-label">{"Pendientes de moderar"}</span>
                    </div>
                    if let Some(canjes) = stats.canjes_ultimo_mes {
                        <div class="stat-card">
                            <span class="stat-value">{canjes}</span>
                            <span class="stat-label">{"Canjes último mes"}</span>
                        </div>
                    }
                </div>
            }
        </main>
    }
}
