use actix_web::{web, App, HttpResponse, HttpServer};
use dotenv::dotenv;
use log::{error, info};

use testimonial_backend::config::{self, SupabaseConfig};
use testimonial_backend::routes;
use testimonial_backend::supabase::{self, SupabaseClient};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let client = match SupabaseConfig::from_env().and_then(SupabaseClient::new) {
        Ok(client) => client,
        Err(e) => {
            error!("Failed to configure backend client: {}", e);
            return Err(std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string()));
        }
    };
    let client = match supabase::install(client) {
        Ok(client) => client.clone(),
        Err(e) => {
            error!("Failed to install backend client: {}", e);
            return Err(std::io::Error::new(std::io::ErrorKind::Other, e.to_string()));
        }
    };
    info!("Backend endpoint: {}", client.endpoint());

    let server_address = config::server_address();
    info!("Server running at http://{}", server_address);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(client.clone()))
            .route("/", web::get().to(|| async { HttpResponse::Ok().body("Hello, world!") }))
            .configure(routes::routes::testimonial_configure)
    })
    .bind(server_address)?
    .run()
    .await
}
