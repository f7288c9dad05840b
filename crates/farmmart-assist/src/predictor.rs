//! Canned crop-disease predictor.
//!
//! A stand-in for a real classifier: it picks one of a fixed set of
//! results at random and never looks at the image. Kept so the
//! predict-disease endpoint still answers when no model is configured.

use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

/// A single diagnosis result.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DiseasePrediction {
    /// Disease name.
    pub disease: String,
    /// Classifier confidence in [0, 1].
    pub confidence: f64,
    /// What the disease looks like.
    pub description: String,
    /// Recommended treatment.
    pub treatment: String,
}

impl DiseasePrediction {
    /// Render the prediction as the multi-line text the endpoint returns.
    pub fn summary_text(&self) -> String {
        format!(
            "{} (confidence {:.0}%)\n\nDescription: {}\n\nRecommended treatment: {}",
            self.disease,
            self.confidence * 100.0,
            self.description,
            self.treatment
        )
    }
}

/// Picks a canned prediction at random.
#[derive(Debug, Clone, Copy, Default)]
pub struct MockDiseasePredictor;

impl MockDiseasePredictor {
    /// The fixed result set.
    fn candidates() -> Vec<DiseasePrediction> {
        vec![
            DiseasePrediction {
                disease: "Healthy".to_string(),
                confidence: 0.95,
                description: "Your crop appears to be healthy.".to_string(),
                treatment: "Continue with regular care and monitoring.".to_string(),
            },
            DiseasePrediction {
                disease: "Powdery Mildew".to_string(),
                confidence: 0.85,
                description: "White powdery spots on leaves and stems.".to_string(),
                treatment: "Apply sulfur-based fungicide and improve air circulation."
                    .to_string(),
            },
            DiseasePrediction {
                disease: "Bacterial Blight".to_string(),
                confidence: 0.78,
                description: "Water-soaked lesions on leaves.".to_string(),
                treatment: "Remove affected plants and apply copper-based bactericide."
                    .to_string(),
            },
        ]
    }

    /// Produce a prediction. The input image is ignored.
    pub fn predict(&self) -> DiseasePrediction {
        let candidates = Self::candidates();
        candidates
            .choose(&mut rand::thread_rng())
            .cloned()
            .unwrap_or_else(|| candidates[0].clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prediction_is_one_of_fixed_set() {
        let predictor = MockDiseasePredictor;
        let names: Vec<String> = MockDiseasePredictor::candidates()
            .into_iter()
            .map(|p| p.disease)
            .collect();

        for _ in 0..20 {
            let prediction = predictor.predict();
            assert!(names.contains(&prediction.disease));
        }
    }

    #[test]
    fn test_summary_text_mentions_disease_and_treatment() {
        let prediction = DiseasePrediction {
            disease: "Powdery Mildew".to_string(),
            confidence: 0.85,
            description: "White powdery spots on leaves and stems.".to_string(),
            treatment: "Apply sulfur-based fungicide.".to_string(),
        };

        let text = prediction.summary_text();
        assert!(text.contains("Powdery Mildew"));
        assert!(text.contains("85%"));
        assert!(text.contains("Apply sulfur-based fungicide."));
    }

    #[test]
    fn test_confidence_in_range() {
        for candidate in MockDiseasePredictor::candidates() {
            assert!(candidate.confidence > 0.0 && candidate.confidence <= 1.0);
        }
    }
}
