/// Main application component and routing
///
/// Defines the root App component with routing, authentication, and global
/// notifications.

use leptos::*;
use leptos_meta::*;
use leptos_router::*;

use crate::auth::{use_auth, AuthProvider};
use crate::components::notifications::NotificationProvider;
use crate::components::shell::Shell;
use crate::pages::{
    auth::{LoginPage, LogoutPage},
    not_found::NotFoundPage,
};

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/attendify-web.css"/>
        <Title text="Attendify"/>
        <Meta name="description" content="Smart attendance tracking for modern campuses"/>
        <Meta name="viewport" content="width=device-width, initial-scale=1.0"/>

        <Router>
            <AuthProvider>
                <NotificationProvider>
                    <Routes>
                        // Public routes
                        <Route path="/auth/login" view=LoginPage/>
                        <Route path="/auth/logout" view=LogoutPage/>

                        // The portal itself, behind the session guard
                        <ProtectedRoute path="/" view=Shell/>

                        <Route path="/*any" view=NotFoundPage/>
                    </Routes>
                </NotificationProvider>
            </AuthProvider>
        </Router>
    }
}

/// Route that renders its view only with a signed-in session and sends
/// everyone else to the login page.
#[component]
fn ProtectedRoute<F, IV>(
    /// The route path
    path: &'static str,
    /// The view to render when authenticated
    view: F,
) -> impl IntoView
where
    F: Fn() -> IV + 'static,
    IV: IntoView + 'static,
{
    let auth = use_auth();

    view! {
        <Route
            path=path
            view=move || {
                match auth.session.get() {
                    Some(_) => view().into_view(),
                    None => {
                        let navigate = use_navigate();
                        create_effect(move |_| {
                            navigate("/auth/login", Default::default());
                        });
                        view! { <div>"Redirecting to login..."</div> }.into_view()
                    }
                }
            }
        />
    }
}
