// src/models/mod.rs

pub mod account;
pub mod session;
pub mod testimonial;

pub use account::{Account, AccountRole};
pub use session::{Session, SessionUser};
pub use testimonial::Testimonial;

pub const USERS_TABLE: &str = "users";
pub const TESTIMONIALS_TABLE: &str = "testimonials";
