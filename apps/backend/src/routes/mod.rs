use actix_web::web;

pub mod game;
pub mod health;

/// Register every route: `/`, `/health` and the `/api` scoreboard.
///
/// `main.rs` adds the middleware stack around this; tests call it directly.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(health::root));

    cfg.service(web::scope("/health").configure(health::configure_routes));

    cfg.service(web::scope("/api").configure(game::configure_routes));
}
