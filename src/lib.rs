//! Access gate and table-link service for the Las Tortillas ordering app.
//!
//! Two independent stateless components: an HS256 bearer-token issuer and
//! verifier for the single admin credential, and a table deep-link
//! generator with QR rendering. Neither holds per-request state; the only
//! process-wide data is the credential store loaded at startup.

pub mod app;
pub mod config;
pub mod error;
pub mod state;

pub mod models {
    pub mod claims;
    pub mod credential;
    pub mod table_link;
}

pub mod services {
    pub mod auth;
    pub mod table_link;
    pub mod token;
}

pub mod handlers {
    pub mod auth;
    pub mod tables;
}

pub mod middleware_layer {
    pub mod auth;
}

pub mod validation {
    pub mod auth;
    pub mod tables;
}
