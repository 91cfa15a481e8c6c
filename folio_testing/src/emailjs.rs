use std::{net::IpAddr, sync::Arc};

use anyhow::Context;
use axum::{extract::State, http::StatusCode, routing, Json, Router};
use serde::Deserialize;
use tokio::net::TcpListener;
use tracing::info;

const SEND_ROUTE: &str = "/api/v1.0/email/send";

pub async fn start_server(
    host: IpAddr,
    port: u16,
    service_id: String,
    template_id: String,
    public_key: String,
) -> anyhow::Result<()> {
    info!("Starting emailjs testing server on {host}:{port}");
    info!("Send endpoint: http://{host}:{port}{SEND_ROUTE}");
    info!("Service id: {service_id:?}, template id: {template_id:?}, public key: {public_key:?}");
    info!("Messages containing \"[bounce]\" are rejected with a server error");

    let router = Router::new()
        .route(SEND_ROUTE, routing::post(send))
        .with_state(Arc::new(Credentials {
            service_id,
            template_id,
            public_key,
        }));

    let listener = TcpListener::bind((host, port))
        .await
        .with_context(|| format!("Failed to bind to {host}:{port}"))?;
    axum::serve(listener, router)
        .await
        .context("Failed to start HTTP server")
}

struct Credentials {
    service_id: String,
    template_id: String,
    public_key: String,
}

#[derive(Deserialize)]
struct SendRequest {
    service_id: String,
    template_id: String,
    user_id: String,
    template_params: TemplateParams,
}

#[derive(Deserialize)]
struct TemplateParams {
    from_name: String,
    from_email: String,
    message: String,
}

async fn send(
    state: State<Arc<Credentials>>,
    Json(request): Json<SendRequest>,
) -> (StatusCode, &'static str) {
    if request.service_id != state.service_id
        || request.template_id != state.template_id
        || request.user_id != state.public_key
    {
        return (StatusCode::FORBIDDEN, "Invalid service, template or user id");
    }

    if request.template_params.message.contains("[bounce]") {
        return (StatusCode::INTERNAL_SERVER_ERROR, "Mailbox unavailable");
    }

    info!(
        "Message from {} ({}):\n\n{}",
        request.template_params.from_name,
        request.template_params.from_email,
        request.template_params.message
    );

    (StatusCode::OK, "OK")
}
