use actix_web::{web, App, HttpServer};
use scoreboard::config::Config;
use scoreboard::infra::state::build_state;
use scoreboard::middleware::cors::cors_middleware;
use scoreboard::middleware::request_trace::RequestTrace;
use scoreboard::middleware::security_headers::SecurityHeaders;
use scoreboard::routes;
use scoreboard::telemetry;
use tracing::{error, info};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    telemetry::init_tracing();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "invalid configuration");
            eprintln!("❌ {e}");
            std::process::exit(1);
        }
    };

    let host = config.host.clone();
    let port = config.port;
    let cors_origins = config.cors_allowed_origins.clone();

    let app_state = build_state().with_config(config).build();
    info!(
        host = %host,
        port,
        win_threshold = app_state.config.initial_win_threshold.get(),
        "scoreboard starting"
    );
    println!("🚀 Starting Scoreboard Backend on http://{}:{}", host, port);

    // Wrap AppState with web::Data before passing to HttpServer so every
    // worker shares the same game
    let data = web::Data::new(app_state);

    HttpServer::new(move || {
        App::new()
            .wrap(cors_middleware(&cors_origins))
            .wrap(SecurityHeaders)
            .wrap(RequestTrace)
            .app_data(data.clone())
            .configure(routes::configure)
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
