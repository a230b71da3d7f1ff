// ============================================================================
// AUTH STORAGE - Persistencia de la sesión en localStorage
// ============================================================================
// Dos claves: el token crudo y el perfil serializado. Único recurso mutable
// compartido del núcleo; solo el contexto de sesión y el interceptor escriben.
// ============================================================================

use crate::models::UserProfile;
use crate::utils::constants::{STORAGE_KEY_TOKEN, STORAGE_KEY_USER};
use crate::utils::storage;

pub fn save_token(token: &str) -> Result<(), String> {
    storage::save_raw(STORAGE_KEY_TOKEN, token)
}

pub fn get_token() -> Option<String> {
    storage::load_raw(STORAGE_KEY_TOKEN)
}

pub fn remove_token() {
    let _ = storage::remove_from_storage(STORAGE_KEY_TOKEN);
}

/// `true` solo si hay un token no vacío almacenado.
pub fn has_token() -> bool {
    get_token().is_some_and(|t| !t.is_empty())
}

pub fn save_user(user: &UserProfile) -> Result<(), String> {
    storage::save_to_storage(STORAGE_KEY_USER, user)
}

/// Perfil almacenado. JSON corrupto cuenta como ausencia; nunca lanza pánico.
pub fn get_user() -> Option<UserProfile> {
    storage::load_from_storage(STORAGE_KEY_USER)
}

pub fn remove_user() {
    let _ = storage::remove_from_storage(STORAGE_KEY_USER);
}

/// Borrar token y perfil. Idempotente: seguro con el storage ya vacío.
pub fn clear_auth() {
    remove_token();
    remove_user();
}
