// ============================================================================
// APP - Árbol de rutas con sus guards
// ============================================================================

use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::{LoginScreen, NavBar, RegisterScreen, RequireRole};
use crate::hooks::AuthContextProvider;
use crate::models::Role;
use crate::pages::{
    AdminDashboard, BeneficiariesPage, BeneficiaryDashboard, Dashboard, OwnerDashboard,
    PromotionsModerationPage,
};
use crate::router::Route;

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <AuthContextProvider>
                <Switch<Route> render={switch} />
            </AuthContextProvider>
        </BrowserRouter>
    }
}

/// Envuelve una pantalla protegida con su guard y la barra de navegación.
fn protected(allowed_roles: Vec<Role>, page: Html) -> Html {
    html! {
        <RequireRole {allowed_roles}>
            <NavBar />
            { page }
        </RequireRole>
    }
}

fn switch(route: Route) -> Html {
    match route {
        Route::Login => html! { <LoginScreen /> },
        Route::Register => html! { <RegisterScreen /> },
        Route::Dashboard => protected(vec![], html! { <Dashboard /> }),
        Route::AdminDashboard => {
            protected(vec![Role::Administrador], html! { <AdminDashboard /> })
        }
        Route::AdminBeneficiarios => {
            protected(vec![Role::Administrador], html! { <BeneficiariesPage /> })
        }
        Route::AdminModeracion => {
            protected(vec![Role::Administrador], html! { <PromotionsModerationPage /> })
        }
        Route::OwnerDashboard => protected(vec![Role::Dueno], html! { <OwnerDashboard /> }),
        Route::BeneficiaryDashboard => {
            protected(vec![Role::Beneficiario], html! { <BeneficiaryDashboard /> })
        }
        Route::NotFound => html! {
            <div class="not-found">
                <h2>{"404"}</h2>
                <p>{"La página que buscas no existe."}</p>
            </div>
        },
    }
}
