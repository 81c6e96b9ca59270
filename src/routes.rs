pub mod routes;

pub mod testimonial {
    pub mod testimonial_handlers;
    pub mod testimonial_models;
}
