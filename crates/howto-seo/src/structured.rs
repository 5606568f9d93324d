use serde::{Deserialize, Serialize};

use crate::meta::placeholder_image;
use crate::outline::TutorialOutline;

/// schema.org HowTo record, serialized as JSON-LD.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HowTo {
    #[serde(rename = "@context")]
    pub context: String,
    #[serde(rename = "@type")]
    pub schema_type: String,
    pub name: String,
    pub description: String,
    pub image: String,
    #[serde(rename = "totalTime")]
    pub total_time: String,
    pub supply: Vec<String>,
    pub tool: Vec<String>,
    pub step: Vec<HowToStep>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HowToStep {
    #[serde(rename = "@type")]
    pub schema_type: String,
    pub position: usize,
    pub name: String,
    pub text: String,
    pub url: String,
}

impl HowTo {
    pub fn to_json_ld(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// Build the schema.org HowTo record for a tutorial page.
///
/// Missing outline pieces degrade to empty strings, mirroring how the
/// page itself renders whatever the markup contains. Steps are numbered
/// from 1 and anchored at `{url}#step-N`.
pub fn structured_data(outline: &TutorialOutline, total_time: &str, url: &str) -> HowTo {
    let name = outline.title.clone().unwrap_or_default();
    HowTo {
        context: "https://schema.org".to_string(),
        schema_type: "HowTo".to_string(),
        image: placeholder_image(&name),
        name,
        description: outline.introduction.clone().unwrap_or_default(),
        total_time: total_time.to_string(),
        supply: Vec::new(),
        tool: Vec::new(),
        step: outline
            .steps
            .iter()
            .enumerate()
            .map(|(i, text)| HowToStep {
                schema_type: "HowToStep".to_string(),
                position: i + 1,
                name: format!("Step {}", i + 1),
                text: text.clone(),
                url: format!("{}#step-{}", url, i + 1),
            })
            .collect(),
    }
}
