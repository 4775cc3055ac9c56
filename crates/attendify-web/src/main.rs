/// Attendify Web Portal Server
///
/// Axum-based server that serves the Leptos application with SSR support.

#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() {
    use attendify_web::app::*;
    use axum::Router;
    use leptos::*;
    use leptos_axum::{generate_route_list, LeptosRoutes};
    use tower_http::services::ServeDir;

    // get_configuration(None) picks up cargo-leptos's env values; a file
    // such as Some("Cargo.toml") can be passed instead when deploying
    // without the toolchain.
    let conf = get_configuration(None).await.unwrap();
    let leptos_options = conf.leptos_options;
    let addr = leptos_options.site_addr;
    let routes = generate_route_list(App);

    let app = Router::new()
        .leptos_routes(&leptos_options, routes, App)
        .fallback_service(ServeDir::new(&leptos_options.site_root))
        .with_state(leptos_options);

    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    println!("🎓 Attendify portal listening on http://{}", &addr);
    axum::serve(listener, app.into_make_service())
        .await
        .unwrap();
}

#[cfg(not(feature = "ssr"))]
pub fn main() {
    // no client-side main function
    // see lib.rs for the hydration entry point instead
}
