use std::sync::Arc;

use zipcode_core::ZipCodeDirectory;

#[derive(Clone)]
pub struct AppState {
    directory: Arc<dyn ZipCodeDirectory>,
}

impl AppState {
    pub fn new(directory: Arc<dyn ZipCodeDirectory>) -> Self {
        Self { directory }
    }

    pub fn directory(&self) -> &dyn ZipCodeDirectory {
        self.directory.as_ref()
    }
}
