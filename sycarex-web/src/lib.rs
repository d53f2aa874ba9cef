pub(crate) mod base;
pub(crate) mod components;
pub(crate) mod routes;
pub(crate) mod vars;

pub mod app;

pub use base::state::GlobalState;
