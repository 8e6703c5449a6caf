use std::future::Future;

use crate::domain::{common::entities::app_errors::CoreError, menu::entities::MenuCatalog};

#[cfg_attr(test, mockall::automock)]
pub trait MenuRepository: Send + Sync {
    /// Reads the full catalog in a stable order (restaurants and their items
    /// by insertion order).
    fn fetch_catalog(&self) -> impl Future<Output = Result<MenuCatalog, CoreError>> + Send;
}
