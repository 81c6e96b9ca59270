use actix_web::{error::QueryPayloadError, web, Error, HttpRequest, HttpResponse, Responder};
use log::{error, info};
use uuid::Uuid;
use crate::models::testimonial::Testimonial;
use crate::models::TESTIMONIALS_TABLE;
use crate::supabase::SupabaseClient;
use super::testimonial_models::{ListTestimonialsQuery, TestimonialErrorResponse};

pub const MAX_LIST_LIMIT: usize = 100;

// Published testimonials, newest first, one page at a time
pub async fn list_published(
    client: web::Data<SupabaseClient>,
    query: web::Query<ListTestimonialsQuery>,
) -> impl Responder {
    let limit = query.limit.unwrap_or(MAX_LIST_LIMIT).clamp(1, MAX_LIST_LIMIT);
    let offset = query.offset.unwrap_or(0);
    info!(
        "Received request to list published testimonials (limit {}, offset {})",
        limit, offset
    );

    let result = client
        .from(TESTIMONIALS_TABLE)
        .select("*")
        .eq("isPublished", true)
        .order("createdAt", false)
        .limit(limit)
        .offset(offset)
        .fetch::<Testimonial>()
        .await;

    match result {
        Ok(testimonials) => {
            info!("Returning {} published testimonials", testimonials.len());
            HttpResponse::Ok().json(testimonials)
        }
        Err(e) => {
            error!("Failed to fetch testimonials: {}", e);
            HttpResponse::BadGateway().json(TestimonialErrorResponse {
                success: false,
                message: "Failed to fetch testimonials".into(),
            })
        }
    }
}

// One published testimonial by id
pub async fn get_published(
    client: web::Data<SupabaseClient>,
    path: web::Path<String>,
) -> impl Responder {
    let raw_id = path.into_inner();
    let id = match Uuid::parse_str(&raw_id) {
        Ok(id) => id,
        Err(_) => {
            info!("Invalid testimonial id: {}", raw_id);
            return HttpResponse::BadRequest().json(TestimonialErrorResponse {
                success: false,
                message: "Invalid testimonial id".into(),
            });
        }
    };
    info!("Received request for testimonial {}", id);

    let result = client
        .from(TESTIMONIALS_TABLE)
        .select("*")
        .eq("id", id)
        .eq("isPublished", true)
        .fetch_optional::<Testimonial>()
        .await;

    match result {
        Ok(Some(testimonial)) => HttpResponse::Ok().json(testimonial),
        Ok(None) => {
            info!("Testimonial {} not found or unpublished", id);
            HttpResponse::NotFound().json(TestimonialErrorResponse {
                success: false,
                message: "Testimonial not found".into(),
            })
        }
        Err(e) => {
            error!("Failed to fetch testimonial {}: {}", id, e);
            HttpResponse::BadGateway().json(TestimonialErrorResponse {
                success: false,
                message: "Failed to fetch testimonial".into(),
            })
        }
    }
}

// Malformed list query parameters, e.g. `limit=-1`
pub fn query_error(err: QueryPayloadError, _: &HttpRequest) -> Error {
    info!("Rejected testimonial query: {}", err);
    let response = HttpResponse::BadRequest().json(TestimonialErrorResponse {
        success: false,
        message: format!("Invalid query parameters: {}", err),
    });
    actix_web::error::InternalError::from_response(err, response).into()
}
