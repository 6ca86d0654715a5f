use std::sync::Arc;

use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::{App, HttpServer, cookie::Key, middleware, web};

use aptmeet::clock::{Clock, SystemClock};
use aptmeet::handlers::form_handlers;
use aptmeet::sink::{LogSink, SubmissionSink};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    // Session encryption key — load from SESSION_KEY env var so form state
    // survives server restarts
    let secret_key = match std::env::var("SESSION_KEY") {
        Ok(val) if val.len() >= 64 => {
            log::info!("Using SESSION_KEY from environment");
            Key::from(val.as_bytes())
        }
        Ok(val) => {
            log::warn!(
                "SESSION_KEY too short ({} bytes, need 64+) — generating random key",
                val.len()
            );
            Key::generate()
        }
        Err(_) => {
            log::warn!("No SESSION_KEY set — generating random key (sessions lost on restart)");
            Key::generate()
        }
    };

    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let sink: Arc<dyn SubmissionSink> = Arc::new(LogSink);

    let bind_addr =
        std::env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:8080".to_string());
    log::info!("Starting server at http://{bind_addr}");

    HttpServer::new(move || {
        let session_mw = SessionMiddleware::builder(
            CookieSessionStore::default(),
            secret_key.clone(),
        )
        .cookie_secure(false)
        .cookie_http_only(true)
        .build();

        App::new()
            .wrap(session_mw)
            .wrap(middleware::Logger::default())
            .app_data(web::Data::from(clock.clone()))
            .app_data(web::Data::from(sink.clone()))
            .route("/", web::get().to(form_handlers::form_page))
            .route("/field", web::post().to(form_handlers::set_field))
            .route("/submit", web::post().to(form_handlers::submit))
            .route("/reset", web::post().to(form_handlers::reset))
    })
    .bind(bind_addr)?
    .run()
    .await
}
