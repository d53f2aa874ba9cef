use std::rc::Rc;

use sycarex::ConsultationStore;

/// Application-wide state provided through context. The consultation
/// store is constructed once at startup and injected into the form.
#[derive(Clone)]
pub struct GlobalState {
    pub store: Rc<dyn ConsultationStore>,
}

impl GlobalState {
    pub fn new(store: Rc<dyn ConsultationStore>) -> Self {
        Self { store }
    }
}

impl Default for GlobalState {
    fn default() -> Self {
        Self::new(default_store())
    }
}

#[cfg(target_arch = "wasm32")]
fn default_store() -> Rc<dyn ConsultationStore> {
    use log::warn;
    use sycarex::{RestTableStore, StoreConfig};

    use crate::vars::{CONSULTATIONS_TABLE, SUPABASE_ANON_KEY, SUPABASE_URL};

    let config = match StoreConfig::new(
        SUPABASE_URL.unwrap_or_default(),
        SUPABASE_ANON_KEY.unwrap_or_default(),
    ) {
        Ok(config) => config,
        Err(err) => {
            warn!("store config rejected, using placeholder fallback: {}", err);
            StoreConfig::with_fallback(SUPABASE_URL, SUPABASE_ANON_KEY)
        }
    };
    Rc::new(RestTableStore::new(config, CONSULTATIONS_TABLE))
}

// native builds (tooling, tests) have no browser fetch; submissions stay
// in memory
#[cfg(not(target_arch = "wasm32"))]
fn default_store() -> Rc<dyn ConsultationStore> {
    Rc::new(sycarex::MemoryStore::new())
}
