/// Toast notifications for user feedback
///
/// Success, error, and info toasts stacked in the top-right corner. Success
/// and info toasts dismiss themselves, errors stay until dismissed.

use leptos::*;
use uuid::Uuid;

use crate::components::icons::Icon;
use crate::types::{Glyph, Notification, NotificationKind};

#[derive(Clone, Copy)]
pub struct NotificationContext {
    pub notifications: ReadSignal<Vec<Notification>>,
    pub show_success: Callback<(String, Option<String>)>,
    pub show_error: Callback<(String, Option<String>)>,
    pub show_info: Callback<(String, Option<String>)>,
    pub dismiss: Callback<Uuid>,
}

#[component]
pub fn NotificationProvider(children: Children) -> impl IntoView {
    let (notifications, set_notifications) = create_signal::<Vec<Notification>>(Vec::new());

    let push = move |notification: Notification| {
        set_notifications.update(|notifications| {
            notifications.push(notification.clone());

            if notification.auto_dismiss {
                let duration = notification.duration_secs.unwrap_or(5);
                let id = notification.id;

                gloo_timers::callback::Timeout::new(duration * 1000, move || {
                    set_notifications.update(|notifications| {
                        notifications.retain(|n| n.id != id);
                    });
                })
                .forget();
            }
        });
    };

    let dismiss = move |id: Uuid| {
        set_notifications.update(|notifications| {
            notifications.retain(|n| n.id != id);
        });
    };

    let show_success = move |(title, message): (String, Option<String>)| {
        push(Notification {
            id: Uuid::new_v4(),
            kind: NotificationKind::Success,
            title,
            message,
            auto_dismiss: true,
            duration_secs: Some(5),
        });
    };

    let show_error = move |(title, message): (String, Option<String>)| {
        push(Notification {
            id: Uuid::new_v4(),
            kind: NotificationKind::Error,
            title,
            message,
            auto_dismiss: false,
            duration_secs: None,
        });
    };

    let show_info = move |(title, message): (String, Option<String>)| {
        push(Notification {
            id: Uuid::new_v4(),
            kind: NotificationKind::Info,
            title,
            message,
            auto_dismiss: true,
            duration_secs: Some(5),
        });
    };

    provide_context(NotificationContext {
        notifications,
        show_success: Callback::new(show_success),
        show_error: Callback::new(show_error),
        show_info: Callback::new(show_info),
        dismiss: Callback::new(dismiss),
    });

    view! {
        {children()}
        <NotificationContainer/>
    }
}

pub fn use_notifications() -> NotificationContext {
    use_context::<NotificationContext>()
        .expect("NotificationContext should be provided by NotificationProvider")
}

/// Renders the active toasts above everything else.
#[component]
fn NotificationContainer() -> impl IntoView {
    let notifications = use_notifications();

    view! {
        <div class="fixed top-4 right-4 z-50 space-y-2 max-w-sm">
            <For
                each=move || notifications.notifications.get()
                key=|notification| notification.id
                children=move |notification| {
                    view! { <NotificationToast notification=notification/> }
                }
            />
        </div>
    }
}

#[component]
fn NotificationToast(notification: Notification) -> impl IntoView {
    let notifications = use_notifications();

    let (bg_class, border_class, text_class, glyph) = match notification.kind {
        NotificationKind::Success => (
            "bg-green-50 dark:bg-green-900/20",
            "border-green-200 dark:border-green-800",
            "text-green-800 dark:text-green-400",
            Glyph::CheckCircle,
        ),
        NotificationKind::Error => (
            "bg-red-50 dark:bg-red-900/20",
            "border-red-200 dark:border-red-800",
            "text-red-800 dark:text-red-400",
            Glyph::ExclamationTriangle,
        ),
        NotificationKind::Info => (
            "bg-blue-50 dark:bg-blue-900/20",
            "border-blue-200 dark:border-blue-800",
            "text-blue-800 dark:text-blue-400",
            Glyph::InformationCircle,
        ),
    };

    let id = notification.id;
    let title = notification.title.clone();
    let message = notification.message.clone();

    view! {
        <div class=format!(
            "rounded-lg border p-4 shadow-lg transition-all duration-300 {} {}",
            bg_class, border_class
        )>
            <div class="flex">
                <div class=format!("flex-shrink-0 {}", text_class)>
                    <Icon glyph=glyph class="h-5 w-5"/>
                </div>
                <div class="ml-3 flex-1">
                    <h3 class=format!("text-sm font-medium {}", text_class)>{title}</h3>
                    {message.map(|message| {
                        view! {
                            <div class=format!("mt-1 text-sm {}", text_class)>{message}</div>
                        }
                    })}
                </div>
                <div class="ml-4 flex-shrink-0">
                    <button
                        class=format!(
                            "inline-flex rounded-md p-1.5 hover:bg-opacity-20 focus:outline-none focus:ring-2 focus:ring-offset-2 {}",
                            text_class
                        )
                        on:click=move |_| notifications.dismiss.call(id)
                    >
                        <span class="sr-only">"Dismiss"</span>
                        <Icon glyph=Glyph::XMark class="h-4 w-4"/>
                    </button>
                </div>
            </div>
        </div>
    }
}
