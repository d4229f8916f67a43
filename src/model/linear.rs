use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::errors::ServerError;
use crate::model::features::{FeatureRow, FEATURE_COLUMNS};
use crate::model::Predictor;

/// A linear regression artifact fitted offline. The dashboard treats it as
/// a black box behind [`Predictor`]; nothing here knows how it was trained.
#[derive(Debug, Deserialize)]
pub struct LinearModel {
    pub name: String,
    intercept: f64,
    features: Vec<FeatureWeight>,
}

#[derive(Debug, Deserialize)]
struct FeatureWeight {
    name: String,
    coefficient: f64,
}

impl LinearModel {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ServerError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|e| {
            ServerError::ModelError(format!("failed to read {}: {e}", path.display()))
        })?;
        Self::from_json(&raw)
    }

    /// Parses the artifact and checks its feature list against the columns
    /// this application extracts. A mismatch means the artifact was trained
    /// on a different schema and every prediction would be meaningless.
    pub fn from_json(raw: &str) -> Result<Self, ServerError> {
        let model: LinearModel = serde_json::from_str(raw)
            .map_err(|e| ServerError::ModelError(format!("malformed model artifact: {e}")))?;

        let names: Vec<&str> = model.features.iter().map(|f| f.name.as_str()).collect();
        if names != FEATURE_COLUMNS {
            return Err(ServerError::ModelError(format!(
                "artifact features {names:?} do not match the expected columns {FEATURE_COLUMNS:?}"
            )));
        }
        Ok(model)
    }
}

impl Predictor for LinearModel {
    fn predict(&self, rows: &[FeatureRow]) -> Result<Vec<f64>, ServerError> {
        let prices = rows
            .iter()
            .map(|row| {
                self.intercept
                    + self
                        .features
                        .iter()
                        .zip(row.values())
                        .map(|(weight, value)| weight.coefficient * value)
                        .sum::<f64>()
            })
            .collect();
        Ok(prices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ARTIFACT: &str = r#"{
        "name": "test-linear",
        "intercept": 50.0,
        "features": [
            {"name": "host_is_superhost", "coefficient": 10.0},
            {"name": "host_identity_verified", "coefficient": 5.0},
            {"name": "host_has_profile_pic", "coefficient": 2.0},
            {"name": "accommodates", "coefficient": 20.0},
            {"name": "minimum_nights", "coefficient": -1.0},
            {"name": "review_scores_rating", "coefficient": 4.0}
        ]
    }"#;

    #[test]
    fn predicts_a_weighted_sum() {
        let model = LinearModel::from_json(ARTIFACT).unwrap();
        let row = FeatureRow::new(true, false, true, 2, 3, 5.0);

        let prices = model.predict(&[row]).unwrap();

        // 50 + 10 + 2 + 40 - 3 + 20
        assert_eq!(prices, vec![119.0]);
    }

    #[test]
    fn predicts_one_price_per_row() {
        let model = LinearModel::from_json(ARTIFACT).unwrap();
        let rows = vec![
            FeatureRow::new(false, false, false, 1, 1, 0.0),
            FeatureRow::new(true, true, true, 1, 1, 0.0),
        ];

        let prices = model.predict(&rows).unwrap();
        assert_eq!(prices.len(), 2);
        assert!(prices[1] > prices[0]);
    }

    #[test]
    fn rejects_an_artifact_with_foreign_features() {
        let raw = ARTIFACT.replace("host_is_superhost", "bedrooms");

        let err = LinearModel::from_json(&raw).unwrap_err();
        assert!(matches!(err, ServerError::ModelError(_)));
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(LinearModel::from_json("{not json").is_err());
    }
}
