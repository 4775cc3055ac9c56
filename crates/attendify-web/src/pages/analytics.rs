/// Analytics section
///
/// Attendance trends and at-risk indicators for staff.

use leptos::*;

#[component]
pub fn AnalyticsPage() -> impl IntoView {
    view! {
        <div class="space-y-6">
            <div>
                <h1 class="text-2xl font-bold text-gray-900 dark:text-white">
                    "Analytics"
                </h1>
                <p class="mt-1 text-sm text-gray-600 dark:text-gray-400">
                    "Attendance trends across classes and terms"
                </p>
            </div>

            {/* Chart placeholder until the analytics backend lands */}
            <div class="bg-white dark:bg-gray-800 rounded-lg border border-gray-200 dark:border-gray-700 p-8">
                <div class="animate-pulse">
                    <div class="h-4 bg-gray-200 dark:bg-gray-700 rounded w-48 mb-4"></div>
                    <div class="h-64 bg-gray-200 dark:bg-gray-700 rounded"></div>
                </div>
                <p class="mt-4 text-center text-gray-600 dark:text-gray-400">
                    "Trend charts coming soon..."
                </p>
            </div>
        </div>
    }
}
