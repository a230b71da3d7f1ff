// Pruebas de navegador: persistencia de sesión y política de 401.
// Se ejecutan con `wasm-pack test --headless --chrome` (o --firefox).

#![cfg(target_arch = "wasm32")]

use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen_test::*;

use beneficio_joven_admin::hooks::hydrate_from_storage;
use beneficio_joven_admin::models::{Envelope, LoginData, Role, UserProfile};
use beneficio_joven_admin::router::{landing_route, Route};
use beneficio_joven_admin::services::auth_storage;
use beneficio_joven_admin::services::auth_service;
use beneficio_joven_admin::services::http::on_unauthorized_response;
use beneficio_joven_admin::utils::storage;

wasm_bindgen_test_configure!(run_in_browser);

fn limpiar() {
    auth_storage::clear_auth();
}

fn perfil_admin() -> UserProfile {
    UserProfile {
        id: 1,
        nombre_usuario: "admin".to_string(),
        email: "admin@example.mx".to_string(),
        role: Role::Administrador,
    }
}

#[wasm_bindgen_test]
fn token_hace_round_trip() {
    limpiar();

    auth_storage::save_token("abc123").unwrap();
    assert_eq!(auth_storage::get_token().as_deref(), Some("abc123"));

    auth_storage::remove_token();
    assert_eq!(auth_storage::get_token(), None);
}

#[wasm_bindgen_test]
fn has_token_exige_token_no_vacio() {
    limpiar();
    assert!(!auth_storage::has_token());

    auth_storage::save_token("").unwrap();
    assert!(!auth_storage::has_token());

    auth_storage::save_token("xyz").unwrap();
    assert!(auth_storage::has_token());

    limpiar();
}

#[wasm_bindgen_test]
fn clear_auth_es_idempotente_con_storage_vacio() {
    limpiar();
    // Segunda pasada sin nada guardado: no debe fallar ni dejar residuos
    auth_storage::clear_auth();
    assert_eq!(auth_storage::get_token(), None);
    assert!(auth_storage::get_user().is_none());
}

#[wasm_bindgen_test]
fn perfil_hace_round_trip() {
    limpiar();

    let perfil = perfil_admin();
    auth_storage::save_user(&perfil).unwrap();

    let leido = auth_storage::get_user().expect("el perfil debería estar almacenado");
    assert_eq!(leido, perfil);

    limpiar();
}

#[wasm_bindgen_test]
fn json_corrupto_cuenta_como_ausencia() {
    limpiar();

    // Escribir basura directamente bajo la clave del perfil
    storage::save_raw("user_data", "{esto no es json").unwrap();
    assert!(auth_storage::get_user().is_none());

    limpiar();
}

#[wasm_bindgen_test]
fn login_exitoso_persiste_sesion_y_elige_el_panel_del_dueno() {
    limpiar();

    // Lo que el backend devuelve en data para credenciales válidas
    let data = LoginData {
        token: "xyz".to_string(),
        user: UserProfile {
            id: 7,
            nombre_usuario: "lgomez".to_string(),
            email: "lgomez@example.mx".to_string(),
            role: Role::Dueno,
        },
    };

    auth_service::persist_session(&data);

    assert_eq!(auth_storage::get_token().as_deref(), Some("xyz"));
    let perfil = auth_storage::get_user().expect("el perfil debería quedar persistido");
    assert_eq!(perfil.role, Role::Dueno);
    assert_eq!(landing_route(&perfil.role), Route::OwnerDashboard);

    limpiar();
}

#[wasm_bindgen_test]
fn login_fallido_devuelve_el_mensaje_y_no_toca_el_storage() {
    limpiar();

    // Respuesta 400 típica del backend ante credenciales malas
    let raw = r#"{"success":false,"message":"credenciales inválidas"}"#;
    let envelope: Envelope<LoginData> = serde_json::from_str(raw).unwrap();
    let result = envelope.into_result();

    assert!(!result.is_success());
    assert_eq!(result.message(), Some("credenciales inválidas"));
    // Sin éxito no hay persistencia: el storage sigue vacío
    assert_eq!(auth_storage::get_token(), None);
    assert!(auth_storage::get_user().is_none());
}

#[wasm_bindgen_test]
fn hidratacion_con_sesion_guardada() {
    limpiar();
    auth_storage::save_token("abc").unwrap();
    auth_storage::save_user(&perfil_admin()).unwrap();

    let estado = hydrate_from_storage();
    assert!(estado.is_authenticated);
    assert!(!estado.is_loading);
    assert_eq!(
        estado.user.map(|u| u.role),
        Some(Role::Administrador)
    );

    limpiar();
}

#[wasm_bindgen_test]
fn hidratacion_sin_nada_guardado() {
    limpiar();

    let estado = hydrate_from_storage();
    assert!(!estado.is_authenticated);
    assert!(!estado.is_loading);
    assert!(estado.user.is_none());
}

#[wasm_bindgen_test]
fn hidratacion_descarta_token_sin_perfil() {
    limpiar();
    auth_storage::save_token("huerfano").unwrap();

    let estado = hydrate_from_storage();
    assert!(!estado.is_authenticated);
    // La sesión inconsistente se limpia del storage
    assert_eq!(auth_storage::get_token(), None);
}

#[wasm_bindgen_test]
fn politica_401_limpia_y_notifica_una_vez() {
    limpiar();
    auth_storage::save_token("expirado").unwrap();
    auth_storage::save_user(&perfil_admin()).unwrap();

    let llamadas = Rc::new(Cell::new(0u32));
    let contador = llamadas.clone();

    on_unauthorized_response(true, &move || contador.set(contador.get() + 1));

    assert_eq!(llamadas.get(), 1, "la navegación debe dispararse exactamente una vez");
    assert_eq!(auth_storage::get_token(), None);
    assert!(auth_storage::get_user().is_none());
}

#[wasm_bindgen_test]
fn politica_401_sin_token_adjunto_no_hace_nada() {
    limpiar();
    // Un 401 del propio login (sin sesión previa) no debe limpiar ni redirigir
    auth_storage::save_token("vigente").unwrap();

    let llamadas = Rc::new(Cell::new(0u32));
    let contador = llamadas.clone();

    on_unauthorized_response(false, &move || contador.set(contador.get() + 1));

    assert_eq!(llamadas.get(), 0);
    assert_eq!(auth_storage::get_token().as_deref(), Some("vigente"));

    limpiar();
}
