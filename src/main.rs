#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() {
    use axum::Router;
    use leptos::prelude::*;
    use leptos_axum::{generate_route_list, LeptosRoutes};
    use portfolio_site::{
        app::*,
        content::Portfolio,
        relay::{Relay, RelayConfig},
    };
    use tower::ServiceBuilder;
    use tower_http::trace::TraceLayer;
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // fail fast rather than serve an empty page
    if let Err(e) = Portfolio::from_embedded() {
        tracing::error!("invalid portfolio content: {e}");
        std::process::exit(1);
    }

    let relay = match RelayConfig::from_env() {
        Ok(config) => Relay::from(config),
        Err(e) => {
            tracing::error!("invalid contact relay settings: {e}");
            std::process::exit(1);
        }
    };
    tracing::info!(relay = relay.kind(), "contact relay ready");

    let conf = get_configuration(None).expect("Should be able to read leptos configuration");
    let addr = conf.leptos_options.site_addr;
    let leptos_options = conf.leptos_options;
    // Generate the list of routes in your Leptos App
    let routes = generate_route_list(App);

    let app = Router::new()
        .leptos_routes_with_context(
            &leptos_options,
            routes,
            move || provide_context(relay.clone()),
            {
                let leptos_options = leptos_options.clone();
                move || shell(leptos_options.clone())
            },
        )
        .fallback(leptos_axum::file_and_error_handler(shell))
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        .with_state(leptos_options);

    tracing::info!("listening on http://{}", &addr);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Should be able to bind site address");
    axum::serve(listener, app.into_make_service())
        .await
        .expect("Server should run until shutdown");
}

#[cfg(not(feature = "ssr"))]
pub fn main() {
    // no client-side main function
    // see lib.rs for hydration function instead
}
