#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use anyhow::Context;
    use axum::Router;
    use axum_tracing_opentelemetry::middleware::{OtelAxumLayer, OtelInResponseLayer};
    use folio::app::*;
    use folio::config::Config;
    use folio::feed::ShowcaseLoader;
    use leptos::prelude::*;
    use leptos_axum::{generate_route_list, LeptosRoutes};
    use opentelemetry_configuration::OtelSdkBuilder;
    use tower_http::compression::CompressionLayer;

    let config = Config::load().context("failed to load configuration")?;

    let _guard = OtelSdkBuilder::new()
        .service_name(env!("CARGO_PKG_NAME"))
        .service_version(env!("CARGO_PKG_VERSION"))
        .resource_attribute("vcs.repository.name", env!("CARGO_PKG_NAME"))
        .resource_attribute("vcs.ref.head.revision", env!("VCS_REF_HEAD_REVISION"))
        .resource_attribute("vcs.ref.head.name", env!("VCS_REF_HEAD_NAME"))
        .resource_attribute("vcs.ref.head.type", "branch")
        .resource_attribute(
            "deployment.environment.name",
            config.otel.environment.clone(),
        )
        .endpoint(
            config
                .otel
                .endpoint
                .as_deref()
                .unwrap_or("http://127.0.0.1:4318"),
        )
        .with_standard_env()
        .build()
        .map_err(|e| anyhow::anyhow!("failed to initialise OpenTelemetry: {e:?}"))?;

    tracing::debug!(?config, "configuration loaded");

    let loader = ShowcaseLoader::from_config(&config.showcase)
        .context("failed to build showcase loader")?;
    tracing::info!(owner = loader.owner(), "showcase loader ready");

    let conf = get_configuration(None).context("failed to read leptos configuration")?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(App);

    let app = Router::new()
        .leptos_routes_with_context(
            &leptos_options,
            routes,
            move || provide_context(loader.clone()),
            {
                let leptos_options = leptos_options.clone();
                move || shell(leptos_options.clone())
            },
        )
        .fallback(leptos_axum::file_and_error_handler(shell))
        .layer(CompressionLayer::new())
        .layer(OtelInResponseLayer)
        .layer(OtelAxumLayer::default())
        .with_state(leptos_options);

    serve(app, &config).await.context("server error")
}

#[cfg(feature = "ssr")]
async fn serve(app: axum::Router, config: &folio::config::Config) -> Result<(), folio::error::AppError> {
    if let Some(socket_path) = &config.socket {
        tracing::info!("listening on unix socket {}", socket_path.display());
        let listener = tokio::net::UnixListener::bind(socket_path)?;
        axum::serve(listener, app.into_make_service()).await?;
    } else {
        tracing::info!("listening on http://{}", &config.listen);
        let listener = tokio::net::TcpListener::bind(&config.listen).await?;
        axum::serve(listener, app.into_make_service()).await?;
    }

    Ok(())
}

#[cfg(not(feature = "ssr"))]
pub fn main() {
    // no client-side main function
    // see lib.rs for hydration function instead
}
