use actix_web::web;

use super::testimonial::testimonial_handlers;

pub fn testimonial_configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api-testimonials")
            .app_data(web::QueryConfig::default().error_handler(testimonial_handlers::query_error))
            .route("", web::get().to(testimonial_handlers::list_published))
            .route("/", web::get().to(testimonial_handlers::list_published))
            .route("/{id}", web::get().to(testimonial_handlers::get_published))
    );
}
