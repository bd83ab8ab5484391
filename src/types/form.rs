//! Core Domain Types
//!
//! Form data collected from the client, the asset store of uploaded files,
//! and the generation bundle produced by one pipeline run.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::prompts::SectionKind;
use crate::types::{AdforgeError, Result};

// =============================================================================
// Form Data
// =============================================================================

/// Campaign flavor selected on the intake form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdType {
    Commercial,
    Festival,
}

impl AdType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Commercial => "commercial",
            Self::Festival => "festival",
        }
    }
}

/// Wardrobe direction for the model in generated imagery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttireType {
    Professional,
    Traditional,
}

impl AttireType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Professional => "professional",
            Self::Traditional => "traditional",
        }
    }
}

/// Total video length. Segments are a fixed eight seconds each, so the
/// package also determines how many video prompts a run produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum DurationPackage {
    Short,
    Medium,
    Long,
}

impl DurationPackage {
    pub fn seconds(&self) -> u32 {
        match self {
            Self::Short => 16,
            Self::Medium => 32,
            Self::Long => 64,
        }
    }

    pub fn segment_count(&self) -> usize {
        (self.seconds() / crate::constants::pipeline::SEGMENT_SECONDS) as usize
    }
}

impl TryFrom<u32> for DurationPackage {
    type Error = AdforgeError;

    fn try_from(seconds: u32) -> Result<Self> {
        match seconds {
            16 => Ok(Self::Short),
            32 => Ok(Self::Medium),
            64 => Ok(Self::Long),
            other => Err(AdforgeError::config(format!(
                "invalid duration {other}s; valid packages: 16, 32, 64"
            ))),
        }
    }
}

impl From<DurationPackage> for u32 {
    fn from(package: DurationPackage) -> u32 {
        package.seconds()
    }
}

/// Everything the intake form collects besides files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdFormData {
    pub ad_type: AdType,
    /// Festival name; meaningful only when `ad_type` is `Festival`.
    #[serde(default)]
    pub festival_name: String,
    pub attire: AttireType,
    pub duration: DurationPackage,
    /// Free-text client instructions typed into the form.
    #[serde(default)]
    pub text_instructions: String,
}

// =============================================================================
// Assets
// =============================================================================

/// One binary asset ready to attach to a model request: base64 payload plus
/// its mime type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Attachment {
    pub mime_type: String,
    pub data: String,
}

/// The files a client supplied for one generation run. Every slot is
/// optional; the pipeline attaches whatever is present.
#[derive(Debug, Clone, Default)]
pub struct AssetStore {
    pub logo: Option<Attachment>,
    pub visiting_card: Option<Attachment>,
    pub store_image: Option<Attachment>,
    pub product_images: Vec<Attachment>,
    pub flyers: Vec<Attachment>,
    pub voice_recording: Option<Attachment>,
    /// Content of an uploaded instruction file, already read as UTF-8.
    pub text_instructions_file: Option<String>,
}

impl AssetStore {
    pub fn has_product_images(&self) -> bool {
        !self.product_images.is_empty()
    }
}

// =============================================================================
// Generation Bundle
// =============================================================================

/// The aggregate of all artifacts produced by one pipeline run.
///
/// Immutable after the run completes, except for targeted single-section
/// refinement (which replaces exactly one field) and on-demand stock-image
/// population (which overwrites the previous list, if any).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenerationBundle {
    /// Structured business intelligence extracted from the assets. Falls
    /// back to `{"raw": <text>}` when the model returned unparsable JSON.
    pub business_info: Value,
    pub main_frame_prompt: String,
    pub header_prompt: String,
    /// Poster design prompt: pretty-printed JSON when the model output
    /// parsed, otherwise the raw response text.
    pub poster_prompt: String,
    pub voice_over_script: String,
    /// One video prompt per duration segment, in order.
    pub video_prompts: Vec<String>,
    pub has_product_images: bool,
    pub product_image_count: usize,
    /// Populated on demand after the main run; `None` until then.
    pub stock_image_prompts: Option<Vec<Value>>,
}

impl GenerationBundle {
    /// Bundle for an extraction-only run: business info populated, every
    /// other artifact empty.
    pub fn extraction_only(business_info: Value) -> Self {
        Self {
            business_info,
            ..Self::default()
        }
    }

    /// Read the current content of one section, in the textual form that
    /// refinement operates on (video prompts are joined by their separator).
    pub fn section_text(&self, kind: SectionKind) -> String {
        match kind {
            SectionKind::MainFrame => self.main_frame_prompt.clone(),
            SectionKind::Header => self.header_prompt.clone(),
            SectionKind::Poster => self.poster_prompt.clone(),
            SectionKind::VoiceOver => self.voice_over_script.clone(),
            SectionKind::VideoSegments => self
                .video_prompts
                .join(crate::constants::pipeline::SEGMENT_SEPARATOR),
        }
    }

    /// Replace exactly one section with refined content, leaving every other
    /// field untouched. Video-segment text is re-split into its parts.
    pub fn apply_refinement(&mut self, kind: SectionKind, refined: String) {
        match kind {
            SectionKind::MainFrame => self.main_frame_prompt = refined,
            SectionKind::Header => self.header_prompt = refined,
            SectionKind::Poster => self.poster_prompt = refined,
            SectionKind::VoiceOver => self.voice_over_script = refined,
            SectionKind::VideoSegments => {
                self.video_prompts = crate::ai::postprocess::split_segments(&refined);
            }
        }
    }

    /// Best-effort business name pulled from the extracted info, for
    /// labeling saved generations.
    pub fn business_name(&self) -> String {
        self.business_info
            .get("businessName")
            .and_then(Value::as_str)
            .unwrap_or("Unknown Business")
            .to_string()
    }

    /// Best-effort business type pulled from the extracted info.
    pub fn business_type(&self) -> String {
        self.business_info
            .get("businessType")
            .and_then(Value::as_str)
            .unwrap_or("")
            .to_string()
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_duration_packages() {
        assert_eq!(DurationPackage::Short.seconds(), 16);
        assert_eq!(DurationPackage::Short.segment_count(), 2);
        assert_eq!(DurationPackage::Medium.segment_count(), 4);
        assert_eq!(DurationPackage::Long.segment_count(), 8);
    }

    #[test]
    fn test_duration_round_trip() {
        for package in [
            DurationPackage::Short,
            DurationPackage::Medium,
            DurationPackage::Long,
        ] {
            let seconds: u32 = package.into();
            assert_eq!(DurationPackage::try_from(seconds).unwrap(), package);
        }
        assert!(DurationPackage::try_from(17).is_err());
    }

    #[test]
    fn test_refinement_replaces_one_field() {
        let mut bundle = GenerationBundle {
            main_frame_prompt: "original main frame".to_string(),
            header_prompt: "original header".to_string(),
            ..Default::default()
        };

        bundle.apply_refinement(SectionKind::Header, "refined header".to_string());

        assert_eq!(bundle.header_prompt, "refined header");
        assert_eq!(bundle.main_frame_prompt, "original main frame");
    }

    #[test]
    fn test_video_refinement_resplits() {
        let mut bundle = GenerationBundle::default();
        bundle.apply_refinement(
            SectionKind::VideoSegments,
            "first prompt###SEGMENT###second prompt".to_string(),
        );
        assert_eq!(bundle.video_prompts, vec!["first prompt", "second prompt"]);
    }

    #[test]
    fn test_business_name_fallbacks() {
        let named = GenerationBundle {
            business_info: json!({"businessName": "Sri Lakshmi Jewellers"}),
            ..Default::default()
        };
        assert_eq!(named.business_name(), "Sri Lakshmi Jewellers");

        let raw = GenerationBundle {
            business_info: json!({"raw": "not json"}),
            ..Default::default()
        };
        assert_eq!(raw.business_name(), "Unknown Business");
    }
}
