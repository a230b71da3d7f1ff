// ============================================================================
// USE AUTH - Estado de sesión compartido por toda la aplicación
// ============================================================================
// Máquina de estados: Inicializando (is_loading) → Listo con o sin sesión.
// La hidratación lee localStorage una sola vez al montar el provider; la
// expiración no se predice, la descubre el interceptor con el primer 401.
// ============================================================================

use yew::prelude::*;
use yew_router::prelude::*;

use crate::models::{ApiResult, LoginData, RegisterRequest, Role, UserProfile};
use crate::router::{landing_route, Route};
use crate::services::http::ApiClient;
use crate::services::{auth_service, auth_storage};

/// Estado reactivo de la sesión. Invariante: `is_authenticated` equivale a
/// "hay token persistido".
#[derive(Debug, Clone, PartialEq)]
pub struct AuthState {
    pub user: Option<UserProfile>,
    pub is_authenticated: bool,
    pub is_loading: bool,
}

impl AuthState {
    fn initializing() -> Self {
        Self {
            user: None,
            is_authenticated: false,
            is_loading: true,
        }
    }

    fn unauthenticated() -> Self {
        Self {
            user: None,
            is_authenticated: false,
            is_loading: false,
        }
    }

    fn authenticated(user: UserProfile) -> Self {
        Self {
            user: Some(user),
            is_authenticated: true,
            is_loading: false,
        }
    }
}

/// Handle que el provider expone por contexto. Clonable y comparable, así
/// que puede viajar como valor de `ContextProvider`.
#[derive(Clone, PartialEq)]
pub struct UseAuthHandle {
    state: UseStateHandle<AuthState>,
    client: ApiClient,
    navigate: Callback<Route>,
}

impl UseAuthHandle {
    pub fn user(&self) -> Option<UserProfile> {
        self.state.user.clone()
    }

    pub fn role(&self) -> Option<Role> {
        self.state.user.as_ref().map(|u| u.role.clone())
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.is_authenticated
    }

    pub fn is_loading(&self) -> bool {
        self.state.is_loading
    }

    /// Iniciar sesión. En éxito actualiza el estado, decide la pantalla de
    /// inicio según el rol y navega; en fallo el estado no cambia y el
    /// resultado normalizado vuelve al formulario para mostrarse inline.
    pub async fn login(&self, email: String, password: String) -> ApiResult<LoginData> {
        let result = auth_service::login(&self.client, &email, &password).await;

        if let ApiResult::Success { data } = &result {
            self.state.set(AuthState::authenticated(data.user.clone()));
            let destino = landing_route(&data.user.role);
            log::info!("➡️ Rol {} → {:?}", data.user.role, destino);
            self.navigate.emit(destino);
        }

        result
    }

    /// Registro: proxy puro del servicio, sin tocar el estado de sesión.
    pub async fn register(&self, payload: RegisterRequest) -> ApiResult<UserProfile> {
        auth_service::register(&self.client, &payload).await
    }

    /// Cerrar sesión: limpia storage y estado, y vuelve al login. Síncrono.
    pub fn logout(&self) {
        auth_service::logout();
        self.state.set(AuthState::unauthenticated());
        self.navigate.emit(Route::Login);
    }
}

/// Estado de sesión resultante de leer la persistencia. Separado del hook
/// para poder probarlo sin montar componentes.
pub fn hydrate_from_storage() -> AuthState {
    if !auth_storage::has_token() {
        return AuthState::unauthenticated();
    }
    match auth_storage::get_user() {
        Some(user) => {
            log::info!("💾 Sesión restaurada: {}", user.nombre_usuario);
            AuthState::authenticated(user)
        }
        None => {
            // Token sin perfil legible: sesión inconsistente, se descarta
            log::warn!("⚠️ Token sin perfil almacenado, se descarta la sesión");
            auth_storage::clear_auth();
            AuthState::unauthenticated()
        }
    }
}

/// Hook interno del provider: crea el estado, lo hidrata desde storage al
/// montar y arma el handle con el cliente API y la navegación.
#[hook]
pub fn use_auth_provider() -> UseAuthHandle {
    let state = use_state(AuthState::initializing);

    let navigator = use_navigator()
        .expect("AuthContextProvider debe montarse dentro de un BrowserRouter");
    let navigate = use_callback((), move |route: Route, _| {
        navigator.push(&route);
    });

    let client = use_memo((), |_| ApiClient::new());

    // Hidratación única al montar. Lectura síncrona de localStorage: los
    // guards ven is_loading=true hasta que esto corre, nunca un estado a
    // medio hidratar.
    {
        let state = state.clone();
        use_effect_with((), move |_| {
            state.set(hydrate_from_storage());
            || ()
        });
    }

    UseAuthHandle {
        state,
        client: (*client).clone(),
        navigate,
    }
}
