/// Authentication pages (login, logout)
///
/// Sign-in form backed by the campus directory seed data, and the logout
/// handoff page.

use leptos::*;
use leptos_router::*;

use crate::auth::{use_auth, LoginRequest};
use crate::components::icons::Icon;
use crate::components::notifications::use_notifications;
use crate::types::Glyph;

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth();
    let notifications = use_notifications();
    let navigate = use_navigate();

    let (name, set_name) = create_signal(String::new());
    let (email, set_email) = create_signal(String::new());
    let (role, set_role) = create_signal(String::from("student"));

    // Already signed in, go straight to the portal
    create_effect(move |_| {
        if auth.session.get().is_some() {
            navigate("/", Default::default());
        }
    });

    let handle_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        auth.login.dispatch(LoginRequest {
            name: name.get(),
            email: email.get(),
            role: role.get(),
        });
    };

    // Watch for login result
    create_effect(move |_| {
        if let Some(result) = auth.login.value().get() {
            match result {
                Ok(()) => {
                    let title = match auth.session.get_untracked() {
                        Some(session) => format!("Welcome back, {}", session.user.name),
                        None => String::from("Signed in"),
                    };
                    notifications.show_success.call((title, None));
                }
                Err(error) => {
                    notifications
                        .show_error
                        .call((String::from("Sign-in failed"), Some(error)));
                }
            }
        }
    });

    view! {
        <div class="min-h-screen flex items-center justify-center bg-gray-50 dark:bg-gray-900 py-12 px-4 sm:px-6 lg:px-8">
            <div class="max-w-md w-full space-y-8">
                <div class="text-center">
                    <div class="flex justify-center">
                        <div class="w-12 h-12 bg-gradient-to-r from-[#6D28D9] to-[#3B82F6] rounded-xl flex items-center justify-center">
                            <Icon glyph=Glyph::AcademicCap class="w-7 h-7 text-white"/>
                        </div>
                    </div>
                    <h2 class="mt-6 text-3xl font-extrabold text-gray-900 dark:text-white">
                        "Sign in to Attendify"
                    </h2>
                    <p class="mt-2 text-sm text-gray-600 dark:text-gray-400">
                        "Smart attendance for modern campuses"
                    </p>
                </div>

                <form class="mt-8 space-y-6" on:submit=handle_submit>
                    <div class="space-y-4">
                        <div>
                            <label for="name" class="block text-sm font-medium text-gray-700 dark:text-gray-300">
                                "Full name"
                            </label>
                            <input
                                id="name"
                                name="name"
                                type="text"
                                required
                                autocomplete="name"
                                class="mt-1 block w-full px-3 py-2 border border-gray-300 dark:border-gray-600 rounded-md shadow-sm bg-white dark:bg-gray-800 text-gray-900 dark:text-white placeholder-gray-500 dark:placeholder-gray-400 focus:outline-none focus:ring-indigo-500 focus:border-indigo-500"
                                placeholder="Enter your full name"
                                prop:value=name
                                on:input=move |ev| set_name.set(event_target_value(&ev))
                            />
                        </div>

                        <div>
                            <label for="email" class="block text-sm font-medium text-gray-700 dark:text-gray-300">
                                "Email"
                            </label>
                            <input
                                id="email"
                                name="email"
                                type="email"
                                required
                                autocomplete="email"
                                class="mt-1 block w-full px-3 py-2 border border-gray-300 dark:border-gray-600 rounded-md shadow-sm bg-white dark:bg-gray-800 text-gray-900 dark:text-white placeholder-gray-500 dark:placeholder-gray-400 focus:outline-none focus:ring-indigo-500 focus:border-indigo-500"
                                placeholder="you@campus.edu"
                                prop:value=email
                                on:input=move |ev| set_email.set(event_target_value(&ev))
                            />
                        </div>

                        <div>
                            <label for="role" class="block text-sm font-medium text-gray-700 dark:text-gray-300">
                                "Role"
                            </label>
                            <select
                                id="role"
                                name="role"
                                class="mt-1 block w-full px-3 py-2 border border-gray-300 dark:border-gray-600 rounded-md shadow-sm bg-white dark:bg-gray-800 text-gray-900 dark:text-white focus:outline-none focus:ring-indigo-500 focus:border-indigo-500"
                                prop:value=role
                                on:change=move |ev| set_role.set(event_target_value(&ev))
                            >
                                <option value="student">"Student"</option>
                                <option value="faculty">"Faculty"</option>
                                <option value="admin">"Admin"</option>
                            </select>
                        </div>
                    </div>

                    <div>
                        <button
                            type="submit"
                            class="group relative w-full flex justify-center py-2 px-4 border border-transparent text-sm font-medium rounded-md text-white bg-gradient-to-r from-[#6D28D9] to-[#3B82F6] hover:opacity-90 focus:outline-none focus:ring-2 focus:ring-offset-2 focus:ring-indigo-500 transition-opacity"
                        >
                            "Sign in"
                        </button>
                    </div>

                    <div class="text-center">
                        <p class="text-sm text-gray-600 dark:text-gray-400">
                            "Use your campus directory details to sign in"
                        </p>
                    </div>
                </form>
            </div>
        </div>
    }
}

#[component]
pub fn LogoutPage() -> impl IntoView {
    let auth = use_auth();
    let notifications = use_notifications();
    let navigate = use_navigate();

    // Clear the session and hand back to the login page
    create_effect(move |_| {
        auth.logout.dispatch(());
        notifications.show_info.call((String::from("Signed out"), None));
        navigate("/auth/login", Default::default());
    });

    view! {
        <div class="min-h-screen flex items-center justify-center bg-gray-50 dark:bg-gray-900">
            <div class="text-center">
                <p class="text-gray-600 dark:text-gray-400">"Signing out..."</p>
            </div>
        </div>
    }
}
