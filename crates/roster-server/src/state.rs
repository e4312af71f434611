use std::sync::Arc;

use roster_employee::EmployeeService;

use crate::config::ServerConfig;

/// Shared state handed to every handler.
#[derive(Clone, Debug)]
pub struct AppState {
    pub service: Arc<EmployeeService>,
    pub config: Arc<ServerConfig>,
}

impl AppState {
    /// Fresh in-memory service sized from `config`.
    pub fn new(config: ServerConfig) -> Self {
        let service = EmployeeService::in_memory().with_page_sizing(config.page_sizing());
        Self {
            service: Arc::new(service),
            config: Arc::new(config),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(ServerConfig::default())
    }
}
