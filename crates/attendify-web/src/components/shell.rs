/// Shell component that wraps the portal layout
///
/// Owns the active section and the drawer state, wires the sidebar
/// callbacks, and swaps section panels in the content column.

use leptos::*;

use crate::components::{footer::Footer, header::Header, sidebar::Sidebar};
use crate::pages::{
    analytics::AnalyticsPage, attendance::AttendancePage, classes::ClassesPage,
    dashboard::DashboardPage, faculty::FacultyPage, reports::ReportsPage, settings::SettingsPage,
    students::StudentsPage,
};

/// Panel for a section id. Unknown ids fall back to the dashboard.
fn section_panel(section: &str) -> View {
    match section {
        "attendance" => view! { <AttendancePage/> }.into_view(),
        "classes" => view! { <ClassesPage/> }.into_view(),
        "students" => view! { <StudentsPage/> }.into_view(),
        "faculty" => view! { <FacultyPage/> }.into_view(),
        "reports" => view! { <ReportsPage/> }.into_view(),
        "analytics" => view! { <AnalyticsPage/> }.into_view(),
        "settings" => view! { <SettingsPage/> }.into_view(),
        _ => view! { <DashboardPage/> }.into_view(),
    }
}

#[component]
pub fn Shell() -> impl IntoView {
    let (active_section, set_active_section) = create_signal(String::from("dashboard"));
    let (sidebar_open, set_sidebar_open) = create_signal(false);

    view! {
        <div class="min-h-screen bg-gray-50 dark:bg-gray-900 flex">
            <Sidebar
                active_section=active_section
                set_active_section=move |section: String| set_active_section.set(section)
                is_open=sidebar_open
                set_is_open=move |open: bool| set_sidebar_open.set(open)
            />

            <div class="flex flex-1 flex-col min-w-0">
                <Header
                    active_section=active_section
                    set_is_open=move |open: bool| set_sidebar_open.set(open)
                />

                <main class="flex-1 overflow-hidden">
                    <div class="h-full overflow-y-auto">
                        <div class="container mx-auto px-4 py-6 max-w-7xl">
                            {move || section_panel(&active_section.get())}
                        </div>
                    </div>
                </main>

                <Footer/>
            </div>
        </div>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod ssr_tests {
    use super::*;
    use crate::auth::{AuthContext, LoginRequest};
    use crate::types::{Role, Session, User};
    use leptos::ssr::render_to_string;

    fn provide_auth(role: Role) {
        let (session, set_session) = create_signal(Some(Session::new(User {
            name: "Avery Chen".to_string(),
            email: "avery@attendify.edu".to_string(),
            role,
        })));
        let login = create_action(|request: &LoginRequest| {
            let request = request.clone();
            async move { crate::auth::build_session(&request).map(|_| ()) }
        });
        let logout = create_action(|_: &()| async move {});
        provide_context(AuthContext {
            session,
            set_session,
            login,
            logout,
        });
    }

    #[test]
    fn test_shell_opens_on_the_dashboard() {
        let html = render_to_string(|| {
            provide_auth(Role::Student);
            view! { <Shell/> }
        })
        .to_string();

        assert!(html.contains("Dashboard"));
        assert!(html.contains("Welcome back, Avery Chen"));
    }

    #[test]
    fn test_drawer_starts_closed() {
        let html = render_to_string(|| {
            provide_auth(Role::Student);
            view! { <Shell/> }
        })
        .to_string();

        assert!(!html.contains("bg-black/40"));
        assert!(html.contains("-translate-x-full"));
    }
}
