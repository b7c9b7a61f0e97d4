use actix_web::{rt, web, App, HttpServer};
use giretra_bot::ai;
use giretra_bot::config::AppConfig;
use giretra_bot::middleware::request_trace::RequestTrace;
use giretra_bot::middleware::trace_span::TraceSpan;
use giretra_bot::routes;
use giretra_bot::state::app_state::AppState;
use giretra_bot::watchdog;

mod telemetry;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    telemetry::init_tracing();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("invalid configuration: {e}");
            std::process::exit(1);
        }
    };

    // Reject unknown AI kinds before binding the listener.
    if ai::create_ai(&config.ai_kind, "startup-probe", config.ai_seed).is_none() {
        eprintln!("invalid configuration: unknown AI kind {:?}", config.ai_kind);
        std::process::exit(1);
    }

    // If a launcher pid was supplied, exit when that process dies so no
    // orphan bots accumulate behind a crashed launcher.
    if let Some(pid) = config.launcher_pid {
        rt::spawn(async move {
            watchdog::wait_for_parent_exit(pid).await;
            tracing::info!(pid, "launcher process exited, shutting down");
            std::process::exit(0);
        });
    }

    let app_state = AppState::new(config.ai_kind.clone(), config.ai_seed);
    let data = web::Data::new(app_state);

    tracing::info!(host = %config.host, port = config.port, ai_kind = %config.ai_kind, "giretra-bot listening");

    HttpServer::new(move || {
        App::new()
            .wrap(TraceSpan)
            .wrap(RequestTrace)
            .app_data(data.clone())
            .configure(routes::configure)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
