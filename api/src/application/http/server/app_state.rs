use std::sync::Arc;

use smarteats_core::application::SmartEatsService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: SmartEatsService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: SmartEatsService) -> Self {
        Self { args, service }
    }
}
