/// appshell web server
///
/// Axum-based server that serves the Leptos application with SSR support.

#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use anyhow::Context;
    use appshell_common::{config::ShellConfig, logging::init_logging};
    use appshell_web::app::*;
    use axum::Router;
    use leptos::*;
    use leptos_axum::{generate_route_list, LeptosRoutes};
    use tower_http::services::ServeDir;

    let config = ShellConfig::load(None).context("Failed to load configuration")?;
    init_logging(&config.logging).context("Failed to initialize logging")?;

    // Setting get_configuration(None) means we'll be using cargo-leptos's env values
    let conf = get_configuration(None)
        .await
        .context("Failed to read Leptos configuration")?;
    let mut leptos_options = conf.leptos_options;
    if let Some(addr) = config.site_addr()? {
        leptos_options.site_addr = addr;
    }
    let addr = leptos_options.site_addr;
    let routes = generate_route_list(App);

    let app = Router::new()
        .leptos_routes(&leptos_options, routes, App)
        .fallback_service(ServeDir::new(leptos_options.site_root.clone()))
        .with_state(leptos_options);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    log::info!("appshell listening on http://{}", addr);

    axum::serve(listener, app.into_make_service())
        .await
        .context("Server error")?;

    Ok(())
}

#[cfg(not(feature = "ssr"))]
pub fn main() {
    // no client-side main function
    // see lib.rs for hydration function instead
}
