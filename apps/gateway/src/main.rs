use actix_web::{web, App, HttpServer};
use gateway::config::{HttpConfig, StoreConfig};
use gateway::infra::state::build_state;
use gateway::routes;
use gateway::state::access_config::AccessConfig;
use gateway::{RequestTrace, SecurityHeaders, StructuredLogger};

mod telemetry;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    telemetry::init_tracing();

    // Environment variables must be set by the runtime environment:
    // - GATEWAY_HOST / GATEWAY_PORT: listen address (default 0.0.0.0:8777)
    // - GATEWAY_FLAG_DIR: directory of {CODE}.png flag images
    // - GATEWAY_COOKIE_NAME: identity cookie set by the access layer
    let http = match HttpConfig::from_env() {
        Ok(http) => http,
        Err(e) => {
            eprintln!("❌ {e}");
            std::process::exit(1);
        }
    };

    let store = StoreConfig::from_env();
    if store.flag_dir.is_none() {
        eprintln!("⚠️  GATEWAY_FLAG_DIR not set; serving from an empty in-memory store");
    }

    let mut builder = build_state().with_access(AccessConfig::from_env());
    if let Some(dir) = store.flag_dir {
        builder = builder.with_flag_dir(dir);
    }
    let app_state = builder.build();

    println!("🚀 Starting flag gateway on http://{}:{}", http.host, http.port);

    // Wrap AppState with web::Data before passing to HttpServer
    let data = web::Data::new(app_state);

    HttpServer::new(move || {
        App::new()
            .wrap(SecurityHeaders)
            .wrap(StructuredLogger)
            .wrap(RequestTrace)
            .app_data(data.clone())
            .configure(routes::configure)
    })
    .bind((http.host.as_str(), http.port))?
    .run()
    .await
}
