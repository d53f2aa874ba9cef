mod requests_wasm32;

pub use requests_wasm32::http_post_request;
