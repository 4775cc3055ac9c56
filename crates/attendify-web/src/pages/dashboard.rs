/// Dashboard overview page
///
/// Landing section with headline attendance numbers and today's class list.

use leptos::*;

use crate::auth::use_auth;
use crate::components::icons::Icon;
use crate::types::Glyph;
use crate::utils::format::format_percentage;

#[derive(Debug, Clone, PartialEq, Eq)]
struct ClassRow {
    id: &'static str,
    name: &'static str,
    time: &'static str,
    room: &'static str,
    present: u32,
    enrolled: u32,
}

fn todays_classes() -> Vec<ClassRow> {
    vec![
        ClassRow {
            id: "cs-101",
            name: "CS 101: Intro to Programming",
            time: "09:00",
            room: "Hall B204",
            present: 42,
            enrolled: 45,
        },
        ClassRow {
            id: "math-210",
            name: "MATH 210: Linear Algebra",
            time: "11:00",
            room: "Hall A101",
            present: 35,
            enrolled: 38,
        },
        ClassRow {
            id: "phys-150",
            name: "PHYS 150: Mechanics",
            time: "14:00",
            room: "Lab C12",
            present: 27,
            enrolled: 31,
        },
    ]
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = use_auth();

    let greeting = move || match auth.session.get() {
        Some(session) => format!("Welcome back, {}", session.user.name),
        None => String::from("Welcome back"),
    };

    view! {
        <div class="space-y-6">
            {/* Page header */}
            <div>
                <h1 class="text-2xl font-bold text-gray-900 dark:text-white">
                    "Dashboard"
                </h1>
                <p class="mt-1 text-sm text-gray-600 dark:text-gray-400">{greeting}</p>
            </div>

            {/* Headline numbers */}
            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-6">
                <StatCard
                    title="Attendance Rate"
                    value=format_percentage(94.2)
                    glyph=Glyph::ClipboardCheck
                    color="green"
                />
                <StatCard
                    title="Classes Today"
                    value="3".to_string()
                    glyph=Glyph::Calendar
                    color="blue"
                />
                <StatCard
                    title="Students Present"
                    value="104".to_string()
                    glyph=Glyph::UserGroup
                    color="purple"
                />
                <StatCard
                    title="Absences"
                    value="10".to_string()
                    glyph=Glyph::ChartBar
                    color="yellow"
                />
            </div>

            {/* Today's classes */}
            <div class="bg-white dark:bg-gray-800 rounded-lg border border-gray-200 dark:border-gray-700 p-6">
                <h2 class="text-lg font-medium text-gray-900 dark:text-white mb-4">
                    "Today's Classes"
                </h2>

                <div class="space-y-3">
                    <For
                        each=todays_classes
                        key=|row| row.id
                        children=move |row: ClassRow| {
                            view! { <ClassItem row=row/> }
                        }
                    />
                </div>
            </div>
        </div>
    }
}

#[component]
fn StatCard(
    title: &'static str,
    value: String,
    glyph: Glyph,
    color: &'static str,
) -> impl IntoView {
    let (bg_class, text_class) = match color {
        "blue" => ("bg-blue-50 dark:bg-blue-900/20", "text-blue-600 dark:text-blue-400"),
        "green" => ("bg-green-50 dark:bg-green-900/20", "text-green-600 dark:text-green-400"),
        "yellow" => ("bg-yellow-50 dark:bg-yellow-900/20", "text-yellow-600 dark:text-yellow-400"),
        "purple" => ("bg-purple-50 dark:bg-purple-900/20", "text-purple-600 dark:text-purple-400"),
        _ => ("bg-gray-50 dark:bg-gray-900/20", "text-gray-600 dark:text-gray-400"),
    };

    view! {
        <div class="bg-white dark:bg-gray-800 rounded-lg border border-gray-200 dark:border-gray-700 p-6">
            <div class="flex items-center">
                <div class=format!("p-2 rounded-lg {}", bg_class)>
                    <div class=text_class>
                        <Icon glyph=glyph class="w-6 h-6"/>
                    </div>
                </div>
                <div class="ml-4">
                    <p class="text-sm font-medium text-gray-600 dark:text-gray-400">
                        {title}
                    </p>
                    <p class="text-2xl font-bold text-gray-900 dark:text-white">
                        {value}
                    </p>
                </div>
            </div>
        </div>
    }
}

#[component]
fn ClassItem(row: ClassRow) -> impl IntoView {
    let rate = format_percentage(f64::from(row.present) / f64::from(row.enrolled) * 100.0);

    view! {
        <div class="flex items-center space-x-3 p-3 rounded-lg bg-gray-50 dark:bg-gray-700/50">
            <div class="flex-1">
                <div class="flex items-center space-x-2">
                    <p class="text-sm font-medium text-gray-900 dark:text-white">
                        {row.name}
                    </p>
                    <span class="inline-flex px-2 py-1 text-xs font-semibold rounded-full bg-green-100 text-green-800 dark:bg-green-900/20 dark:text-green-400">
                        {rate}
                    </span>
                </div>
                <p class="text-xs text-gray-500 dark:text-gray-400">
                    {format!("{} • {} • {} of {} present", row.time, row.room, row.present, row.enrolled)}
                </p>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_classes_have_unique_ids() {
        let rows = todays_classes();
        let mut seen = Vec::new();
        for row in &rows {
            assert!(!seen.contains(&row.id));
            seen.push(row.id);
        }
    }

    #[test]
    fn test_demo_attendance_never_exceeds_enrollment() {
        for row in todays_classes() {
            assert!(row.present <= row.enrolled);
        }
    }
}
