/// Settings section
///
/// Session details and account preferences.

use leptos::*;

use crate::auth::use_auth;
use crate::utils::format::initials;
use crate::utils::time::format_relative_time;

#[component]
pub fn SettingsPage() -> impl IntoView {
    let auth = use_auth();

    let session = move || auth.session.get();

    view! {
        <div class="space-y-6">
            <div>
                <h1 class="text-2xl font-bold text-gray-900 dark:text-white">
                    "Settings"
                </h1>
                <p class="mt-1 text-sm text-gray-600 dark:text-gray-400">
                    "Your account and session"
                </p>
            </div>

            {/* Session card */}
            <div class="bg-white dark:bg-gray-800 rounded-lg border border-gray-200 dark:border-gray-700 p-6">
                <h2 class="text-lg font-medium text-gray-900 dark:text-white mb-4">
                    "Current Session"
                </h2>

                {move || session().map(|session| {
                    view! {
                        <div class="flex items-center space-x-4">
                            <div class="w-12 h-12 bg-gradient-to-br from-[#6D28D9] to-[#3B82F6] rounded-xl flex items-center justify-center">
                                <span class="text-white font-semibold text-lg">
                                    {initials(&session.user.name)}
                                </span>
                            </div>
                            <div class="flex-1">
                                <div class="flex items-center space-x-2">
                                    <p class="font-medium text-gray-900 dark:text-white">
                                        {session.user.name.clone()}
                                    </p>
                                    <span class="inline-flex px-2 py-1 text-xs font-semibold rounded-full bg-indigo-100 text-indigo-800 dark:bg-indigo-900/20 dark:text-indigo-400">
                                        {session.user.role.label()}
                                    </span>
                                </div>
                                <p class="text-sm text-gray-600 dark:text-gray-400">
                                    {session.user.email.clone()}
                                </p>
                                <p class="text-xs text-gray-500 dark:text-gray-500 mt-1">
                                    {format!("Signed in {}", format_relative_time(session.signed_in_at))}
                                </p>
                            </div>
                        </div>
                    }
                })}
            </div>

            {/* Preferences */}
            <div class="bg-white dark:bg-gray-800 rounded-lg border border-gray-200 dark:border-gray-700 p-6">
                <h2 class="text-lg font-medium text-gray-900 dark:text-white mb-2">
                    "Appearance"
                </h2>
                <p class="text-sm text-gray-600 dark:text-gray-400">
                    "The portal follows your system color scheme."
                </p>
            </div>
        </div>
    }
}
