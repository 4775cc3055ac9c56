/// Navigation sidebar for the portal shell
///
/// Role-filtered section menu with a mobile drawer, backdrop overlay,
/// Escape-to-close, and focus handoff when the drawer opens.

use leptos::*;
use wasm_bindgen::JsCast;

use crate::auth::use_auth;
use crate::components::icons::Icon;
use crate::types::{visible_items, Glyph, NavItem};
use crate::utils::format::initials;

/// Keydown handler for the global listener. Escape requests close, every
/// other key is ignored. Closing an already closed sidebar is a no-op.
fn escape_requests_close(key: &str) -> bool {
    key == "Escape"
}

/// A section pick always closes the drawer, so on mobile the chosen panel
/// is visible immediately.
fn select_section(set_active_section: Callback<String>, set_is_open: Callback<bool>, id: &str) {
    set_active_section.call(id.to_string());
    set_is_open.call(false);
}

/// Moves keyboard focus to the first menu entry. No-op when the menu is
/// empty or the document is not available.
fn focus_first_nav_item() {
    let first = document()
        .query_selector("[data-nav-item]")
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok());
    if let Some(el) = first {
        let _ = el.focus();
    }
}

/// Role-aware navigation sidebar.
///
/// Renders as a fixed drawer with a backdrop overlay below the `lg`
/// breakpoint and as a static column above it. Section and open state live
/// in the parent; the sidebar only reports changes through its callbacks.
#[component]
pub fn Sidebar(
    #[prop(into)] active_section: Signal<String>,
    #[prop(into)] set_active_section: Callback<String>,
    #[prop(into)] is_open: Signal<bool>,
    #[prop(into)] set_is_open: Callback<bool>,
) -> impl IntoView {
    let auth = use_auth();

    let user = move || auth.session.get().map(|session| session.user);
    let role_tag = move || user().map(|user| user.role.as_str()).unwrap_or_default();
    let user_name = move || user().map(|user| user.name).unwrap_or_default();
    let user_email = move || user().map(|user| user.email).unwrap_or_default();
    let user_initials = move || user().map(|user| initials(&user.name)).unwrap_or_default();
    let items = move || visible_items(user().map(|user| user.role));

    let handle = window_event_listener(ev::keydown, move |ev| {
        if escape_requests_close(&ev.key()) {
            set_is_open.call(false);
        }
    });
    on_cleanup(move || handle.remove());

    create_effect(move |_| {
        if is_open.get() {
            focus_first_nav_item();
        }
    });

    view! {
        <Show when=move || is_open.get()>
            <div
                class="fixed inset-0 bg-black/40 backdrop-blur-sm z-40 lg:hidden"
                on:click=move |_| set_is_open.call(false)
            ></div>
        </Show>

        <aside
            id="sidebar"
            class=move || {
                format!(
                    "fixed top-0 left-0 h-full w-72 bg-white/90 backdrop-blur-md dark:bg-gray-900/60 border-r border-white/10 dark:border-gray-700/40 shadow-2xl z-50 transform transition-transform duration-300 ease-in-out lg:translate-x-0 lg:static lg:z-auto {}",
                    if is_open.get() { "translate-x-0" } else { "-translate-x-full" }
                )
            }
        >
            <div class="flex items-center justify-between p-6 border-b border-white/10 dark:border-gray-700/40">
                <div class="flex items-center space-x-3">
                    <div class="w-10 h-10 bg-gradient-to-r from-[#6D28D9] to-[#3B82F6] rounded-xl flex items-center justify-center">
                        <Icon glyph=Glyph::AcademicCap class="w-6 h-6 text-white"/>
                    </div>
                    <div>
                        <h2 class="text-xl font-bold bg-gradient-to-r from-indigo-600 to-purple-600 bg-clip-text text-transparent">
                            "Attendify"
                        </h2>
                        <p class="text-xs text-gray-500 dark:text-gray-400 capitalize">
                            {move || format!("{} Portal", role_tag())}
                        </p>
                    </div>
                </div>

                <button
                    class="lg:hidden p-2 rounded-lg bg-gradient-to-r from-[#6D28D9] to-[#3B82F6] text-white hover:opacity-90 transition-opacity"
                    aria-label="Close sidebar"
                    on:click=move |_| set_is_open.call(false)
                >
                    <Icon glyph=Glyph::XMark class="w-6 h-6 text-gray-600"/>
                </button>
            </div>

            <div class="p-6 border-b border-white/10 dark:border-gray-700/40">
                <div class="flex items-center space-x-3">
                    <div class="w-12 h-12 bg-gradient-to-br from-[#6D28D9] to-[#3B82F6] rounded-xl flex items-center justify-center">
                        <span class="text-white font-semibold text-lg">{user_initials}</span>
                    </div>
                    <div>
                        <p class="font-semibold text-gray-800 dark:text-gray-100">{user_name}</p>
                        <p class="text-sm text-gray-500 dark:text-gray-400">{user_email}</p>
                    </div>
                </div>
            </div>

            <nav class="flex-1 p-4">
                <ul class="space-y-2">
                    <For
                        each=items
                        key=|item| item.id
                        children=move |item: &'static NavItem| {
                            let is_active = move || active_section.get() == item.id;
                            view! {
                                <li>
                                    <button
                                        data-nav-item=""
                                        aria-current=move || if is_active() { Some("page") } else { None }
                                        class=move || {
                                            let state = if is_active() {
                                                "bg-gradient-to-r from-[#6D28D9] to-[#3B82F6] text-white shadow-lg"
                                            } else {
                                                "text-gray-600 dark:text-gray-300 hover:bg-gray-100 dark:hover:bg-gray-700/50 hover:text-gray-800 dark:hover:text-gray-200"
                                            };
                                            format!(
                                                "w-full flex items-center space-x-3 px-4 py-3 rounded-2xl font-medium transition-all duration-200 {}",
                                                state
                                            )
                                        }
                                        on:click=move |_| {
                                            select_section(set_active_section, set_is_open, item.id)
                                        }
                                    >
                                        <Icon glyph=item.glyph class="w-5 h-5 flex-shrink-0"/>
                                        <span>{item.label}</span>
                                    </button>
                                </li>
                            }
                        }
                    />
                </ul>
            </nav>

            <div class="p-4 border-t border-white/10 dark:border-gray-700/40">
                <button
                    class="w-full flex items-center space-x-3 px-4 py-3 rounded-2xl font-medium text-red-600 dark:text-red-400 hover:bg-red-50 dark:hover:bg-red-900/20 transition-all duration-200"
                    on:click=move |_| auth.logout.dispatch(())
                >
                    <Icon glyph=Glyph::ArrowRightOnRectangle class="w-5 h-5 flex-shrink-0"/>
                    <span>"Sign Out"</span>
                </button>
            </div>
        </aside>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_escape_requests_close() {
        assert!(escape_requests_close("Escape"));
        assert!(!escape_requests_close("Enter"));
        assert!(!escape_requests_close("escape"));
        assert!(!escape_requests_close(""));
    }

    #[test]
    fn test_escape_closes_and_repeat_presses_stay_closed() {
        let runtime = create_runtime();

        let (open, set_open) = create_signal(true);
        let set_is_open = Callback::new(move |next| set_open.set(next));

        for _ in 0..2 {
            if escape_requests_close("Escape") {
                set_is_open.call(false);
            }
        }

        assert!(!open.get_untracked());

        runtime.dispose();
    }

    #[test]
    fn test_selecting_a_section_updates_and_closes() {
        let runtime = create_runtime();

        let (section, set_section) = create_signal(String::from("dashboard"));
        let (open, set_open) = create_signal(true);

        select_section(
            Callback::new(move |id| set_section.set(id)),
            Callback::new(move |next| set_open.set(next)),
            "reports",
        );

        assert_eq!(section.get_untracked(), "reports");
        assert!(!open.get_untracked());

        runtime.dispose();
    }

    #[test]
    fn test_selecting_while_closed_still_updates_section() {
        let runtime = create_runtime();

        let (section, set_section) = create_signal(String::from("dashboard"));
        let (open, set_open) = create_signal(false);

        select_section(
            Callback::new(move |id| set_section.set(id)),
            Callback::new(move |next| set_open.set(next)),
            "settings",
        );

        assert_eq!(section.get_untracked(), "settings");
        assert!(!open.get_untracked());

        runtime.dispose();
    }
}

#[cfg(all(test, feature = "ssr"))]
mod ssr_tests {
    use super::*;
    use crate::auth::{AuthContext, LoginRequest};
    use crate::types::{Role, Session, User};
    use leptos::ssr::render_to_string;

    fn session_for(role: Role) -> Session {
        Session::new(User {
            name: "Avery Chen".to_string(),
            email: "avery@attendify.edu".to_string(),
            role,
        })
    }

    fn provide_auth(session: Option<Session>) {
        let (session, set_session) = create_signal(session);
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

    fn render_sidebar(session: Option<Session>, active: &str, open: bool) -> String {
        let active = active.to_string();
        render_to_string(move || {
            provide_auth(session);
            let (active_section, _) = create_signal(active);
            let (is_open, _) = create_signal(open);
            view! {
                <Sidebar
                    active_section=active_section
                    set_active_section=Callback::new(|_: String| {})
                    is_open=is_open
                    set_is_open=Callback::new(|_: bool| {})
                />
            }
        })
        .to_string()
    }

    #[test]
    fn test_admin_menu_renders_every_section_in_order() {
        let html = render_sidebar(Some(session_for(Role::Admin)), "dashboard", false);

        assert_eq!(html.matches("data-nav-item").count(), 8);

        let dashboard = html.find("Dashboard").unwrap();
        let classes = html.find("Classes").unwrap();
        let faculty = html.find(">Faculty<").unwrap();
        let settings = html.find("Settings").unwrap();
        assert!(dashboard < classes);
        assert!(classes < faculty);
        assert!(faculty < settings);
    }

    #[test]
    fn test_student_menu_is_filtered() {
        let html = render_sidebar(Some(session_for(Role::Student)), "dashboard", false);

        assert_eq!(html.matches("data-nav-item").count(), 3);
        assert!(html.contains("Dashboard"));
        assert!(html.contains("Attendance"));
        assert!(html.contains("Settings"));
        assert!(!html.contains("Classes"));
        assert!(!html.contains("Analytics"));
        assert!(!html.contains(">Faculty<"));
    }

    #[test]
    fn test_no_user_renders_empty_menu() {
        let html = render_sidebar(None, "dashboard", false);

        assert_eq!(html.matches("data-nav-item").count(), 0);
        assert!(html.contains("Sign Out"));
    }

    #[test]
    fn test_overlay_renders_only_while_open() {
        let open = render_sidebar(Some(session_for(Role::Student)), "dashboard", true);
        let closed = render_sidebar(Some(session_for(Role::Student)), "dashboard", false);

        assert!(open.contains("bg-black/40"));
        assert!(!closed.contains("bg-black/40"));
    }

    #[test]
    fn test_drawer_is_off_canvas_while_closed() {
        let open = render_sidebar(Some(session_for(Role::Student)), "dashboard", true);
        let closed = render_sidebar(Some(session_for(Role::Student)), "dashboard", false);

        assert!(closed.contains("-translate-x-full"));
        assert!(!open.contains("-translate-x-full"));
    }

    #[test]
    fn test_exactly_the_active_section_is_marked_current() {
        let html = render_sidebar(Some(session_for(Role::Admin)), "attendance", false);
        assert_eq!(html.matches("aria-current").count(), 1);
    }

    #[test]
    fn test_unknown_active_section_marks_nothing_current() {
        let html = render_sidebar(Some(session_for(Role::Admin)), "bogus", false);
        assert_eq!(html.matches("aria-current").count(), 0);
    }

    #[test]
    fn test_user_identity_is_shown() {
        let html = render_sidebar(Some(session_for(Role::Faculty)), "dashboard", false);

        assert!(html.contains("AC"));
        assert!(html.contains("Avery Chen"));
        assert!(html.contains("avery@attendify.edu"));
        assert!(html.contains("faculty Portal"));
    }
}
