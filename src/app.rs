use crate::dataset::Dataset;
use crate::errors::ServerError;
use crate::model::LinearModel;

/// Everything loaded once at startup and shared read-only across worker
/// threads. Handlers receive it by reference; nothing global.
pub struct App {
    pub dataset: Dataset,
    pub model: LinearModel,
}

impl App {
    pub fn load(dataset_path: &str, model_path: &str) -> Result<Self, ServerError> {
        let dataset = Dataset::load(dataset_path)?;
        let model = LinearModel::load(model_path)?;
        Ok(App { dataset, model })
    }
}
