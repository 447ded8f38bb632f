use serde::{Deserialize, Serialize};

/// Display labels for step navigation controls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StepLabels {
    /// Default Next label.
    pub next: String,
    /// Default Back label.
    pub back: String,
    /// Label forced onto the Next control on the last step.
    pub finish: String,
}

impl Default for StepLabels {
    fn default() -> Self {
        Self {
            next: "Next".to_string(),
            back: "Back".to_string(),
            finish: "Finish".to_string(),
        }
    }
}

impl StepLabels {
    /// Spanish preset.
    pub fn spanish() -> Self {
        Self {
            next: "Siguiente".to_string(),
            back: "Anterior".to_string(),
            finish: "Finalizar".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn partial_config_keeps_english_defaults() {
        let labels: StepLabels =
            serde_json::from_str(r#"{ "finish": "Done" }"#).expect("deserialize labels");
        assert_eq!(
            labels,
            StepLabels {
                finish: "Done".to_string(),
                ..StepLabels::default()
            }
        );
    }

    #[test]
    fn spanish_preset_round_trips_through_json() {
        let encoded = serde_json::to_value(StepLabels::spanish()).expect("serialize labels");
        assert_eq!(encoded["finish"], "Finalizar");
        let decoded: StepLabels = serde_json::from_value(encoded).expect("deserialize labels");
        assert_eq!(decoded, StepLabels::spanish());
    }
}
