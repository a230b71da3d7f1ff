// ============================================================================
// BENEFICIO JOVEN - Consola administrativa (Yew / WASM)
// ============================================================================
// Capas:
// - components: piezas de UI (login, guards, barra de navegación)
// - pages: pantallas que cargan datos al montar y renderizan
// - hooks: contexto de sesión compartido
// - services: cliente HTTP con interceptor, auth y persistencia local
// - models: estructuras compartidas con el backend
// ============================================================================

pub mod app;
pub mod components;
pub mod hooks;
pub mod models;
pub mod pages;
pub mod router;
pub mod services;
pub mod utils;

/// Arranque de la aplicación: logging, panic hook y render del árbol Yew.
pub fn start() {
    wasm_logger::init(wasm_logger::Config::default());
    console_error_panic_hook::set_once();

    log::info!("🚀 Beneficio Joven — consola administrativa iniciando...");

    yew::Renderer::<app::App>::new().render();
}
