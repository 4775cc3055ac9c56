/// Footer component
///
/// Slim footer with version info.

use leptos::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="bg-white dark:bg-gray-900 border-t border-gray-200 dark:border-gray-800 py-4">
            <div class="container mx-auto px-4">
                <div class="flex items-center justify-between text-sm text-gray-600 dark:text-gray-400">
                    <div>"Attendify v0.1.0"</div>
                    <div class="hidden sm:block">"Smart attendance for modern campuses"</div>
                </div>
            </div>
        </footer>
    }
}
