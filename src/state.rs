use std::sync::Arc;

use crate::hook::LifecycleHook;

#[derive(Clone)]
pub struct AppState {
    pub hook: Arc<dyn LifecycleHook>,
}

impl AppState {
    pub fn new(hook: Arc<dyn LifecycleHook>) -> Self {
        Self { hook }
    }
}
