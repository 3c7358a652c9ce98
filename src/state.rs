use crate::config::AppConfig;
use crate::services::catalog::Catalog;
use crate::services::interpreter::Interpreter;
use crate::services::store::ListStore;

pub struct AppState {
    pub config: AppConfig,
    pub interpreter: Interpreter,
    pub catalog: Catalog,
    pub store: Box<dyn ListStore>,
}
