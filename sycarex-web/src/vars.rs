pub const BRAND_NAME: &str = "Sycarex AI";

#[cfg(target_arch = "wasm32")]
pub const CONSULTATIONS_TABLE: &str = "consultations";

// build-time equivalents of the deployment's environment values
#[cfg(target_arch = "wasm32")]
pub const SUPABASE_URL: Option<&str> = option_env!("SYCAREX_SUPABASE_URL");
#[cfg(target_arch = "wasm32")]
pub const SUPABASE_ANON_KEY: Option<&str> = option_env!("SYCAREX_SUPABASE_ANON_KEY");
