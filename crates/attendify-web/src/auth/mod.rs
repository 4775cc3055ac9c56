/// Authentication state for the Attendify portal
///
/// Holds the signed-in session in a signal pair and exposes login and
/// logout as actions, so any component can dispatch them without owning
/// the session itself.

use leptos::*;
use serde::{Deserialize, Serialize};

use crate::types::{Role, Session, User};
use crate::utils::validation::{validate_email, validate_name};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub name: String,
    pub email: String,
    pub role: String,
}

#[derive(Clone, Copy)]
pub struct AuthContext {
    pub session: ReadSignal<Option<Session>>,
    pub set_session: WriteSignal<Option<Session>>,
    pub login: Action<LoginRequest, Result<(), String>>,
    pub logout: Action<(), ()>,
}

/// Builds a session from a login form submission.
///
/// The portal runs against directory data seeded at sign-in, so a valid
/// name, email and role tag are all that is required.
pub fn build_session(request: &LoginRequest) -> Result<Session, String> {
    validate_name(&request.name).map_err(|err| err.message)?;
    validate_email(&request.email).map_err(|err| err.message)?;
    let role = request.role.parse::<Role>().map_err(|err| err.message)?;
    Ok(Session::new(User {
        name: request.name.trim().to_string(),
        email: request.email.trim().to_string(),
        role,
    }))
}

#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let (session, set_session) = create_signal(None::<Session>);

    let login = create_action(move |request: &LoginRequest| {
        let request = request.clone();
        async move {
            let session = build_session(&request)?;
            log::info!(
                "signed in: {} as {}",
                session.user.email,
                session.user.role
            );
            set_session.set(Some(session));
            Ok(())
        }
    });

    // Route guards watch the session signal, so clearing it is enough to
    // send the user back to the login page.
    let logout = create_action(move |_: &()| async move {
        log::info!("signed out");
        set_session.set(None);
    });

    provide_context(AuthContext {
        session,
        set_session,
        login,
        logout,
    });

    children()
}

pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthContext should be provided by AuthProvider")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(name: &str, email: &str, role: &str) -> LoginRequest {
        LoginRequest {
            name: name.to_string(),
            email: email.to_string(),
            role: role.to_string(),
        }
    }

    #[test]
    fn test_build_session_accepts_valid_request() {
        let session = build_session(&request("Ada Lovelace", "ada@attendify.edu", "faculty"))
            .expect("valid request should produce a session");
        assert_eq!(session.user.name, "Ada Lovelace");
        assert_eq!(session.user.email, "ada@attendify.edu");
        assert_eq!(session.user.role, Role::Faculty);
    }

    #[test]
    fn test_build_session_trims_whitespace() {
        let session = build_session(&request("  Grace Hopper ", " grace@attendify.edu ", "admin"))
            .expect("padded fields should still validate");
        assert_eq!(session.user.name, "Grace Hopper");
        assert_eq!(session.user.email, "grace@attendify.edu");
    }

    #[test]
    fn test_build_session_rejects_empty_name() {
        let err = build_session(&request("   ", "ada@attendify.edu", "student"))
            .expect_err("blank name should be rejected");
        assert!(err.contains("Name"));
    }

    #[test]
    fn test_build_session_rejects_malformed_email() {
        assert!(build_session(&request("Ada Lovelace", "ada-at-attendify", "student")).is_err());
    }

    #[test]
    fn test_build_session_rejects_unknown_role() {
        let err = build_session(&request("Ada Lovelace", "ada@attendify.edu", "principal"))
            .expect_err("unknown role tag should be rejected");
        assert!(err.contains("role"));
    }
}
