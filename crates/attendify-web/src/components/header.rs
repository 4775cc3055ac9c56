/// Header bar for the content column
///
/// Shows the current section title and, below the `lg` breakpoint, the
/// hamburger button that opens the navigation drawer.

use leptos::*;

use crate::components::icons::Icon;
use crate::types::{section_label, Glyph};

#[component]
pub fn Header(
    #[prop(into)] active_section: Signal<String>,
    #[prop(into)] set_is_open: Callback<bool>,
) -> impl IntoView {
    let title = move || section_label(&active_section.get()).unwrap_or("Dashboard");
    let today = move || chrono::Local::now().format("%A, %B %e, %Y").to_string();

    view! {
        <header class="bg-white/80 backdrop-blur-md dark:bg-gray-900/60 border-b border-gray-200 dark:border-gray-800 shadow-sm">
            <div class="flex items-center justify-between h-16 px-4 lg:px-6">
                <div class="flex items-center space-x-3">
                    <button
                        class="lg:hidden p-2 rounded-lg text-gray-600 dark:text-gray-300 hover:bg-gray-100 dark:hover:bg-gray-800 transition-colors"
                        aria-label="Open sidebar"
                        aria-controls="sidebar"
                        on:click=move |_| set_is_open.call(true)
                    >
                        <Icon glyph=Glyph::Bars3 class="w-6 h-6"/>
                    </button>
                    <h1 class="text-xl font-bold text-gray-900 dark:text-white">{title}</h1>
                </div>

                <p class="hidden sm:block text-sm text-gray-500 dark:text-gray-400">{today}</p>
            </div>
        </header>
    }
}
