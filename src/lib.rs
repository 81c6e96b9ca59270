//! Shared backend handle and record shapes for the testimonials site.
//!
//! The hosted backend is configured from the environment (`SUPABASE_URL`,
//! `SUPABASE_ANON_KEY`); see [`config::SupabaseConfig`].

pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod supabase;

pub use config::SupabaseConfig;
pub use error::{BackendError, Result};
pub use models::{Account, AccountRole, Session, SessionUser, Testimonial};
pub use supabase::SupabaseClient;
