// Route exports
pub mod market;

use actix_web::web;

pub use market::AppState;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .configure(market::configure),
    );
}
