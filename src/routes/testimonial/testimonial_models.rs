use serde::{Deserialize, Serialize};

// Published testimonial list query; page through with offset
#[derive(Deserialize)]
pub struct ListTestimonialsQuery {
    pub limit: Option<usize>,
    pub offset: Option<usize>,
}

// Returned whenever a testimonial request fails
#[derive(Serialize, Deserialize)]
pub struct TestimonialErrorResponse {
    pub success: bool,
    pub message: String,
}
