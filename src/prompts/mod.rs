//! Prompt Template Library
//!
//! Static configuration consumed by the section generators: one closed
//! section-kind enum mapped to its system-prompt builder and refinement
//! framing, plus the business-type and festival lookup tables the prompt
//! builders draw from. Adding a new artifact kind is a one-place change.

mod business;
mod festival;
mod system;

pub use business::{BusinessKind, detect_business_kind};
pub use festival::{FestivalTheme, festival_theme};
pub use system::{
    EXTRACTION_SYSTEM_PROMPT, STOCK_IMAGE_SYSTEM_PROMPT, StockTheme,
    TRANSLITERATION_SYSTEM_PROMPT, extraction_trigger, header_system_prompt,
    header_user_prompt, logo_caption, main_frame_system_prompt, main_frame_user_prompt,
    poster_system_prompt, poster_user_prompt, stock_image_user_prompt,
    transliteration_user_prompt, video_segment_system_prompt, video_segment_user_prompt,
    visiting_card_caption, voice_over_system_prompt, voice_over_user_prompt,
};

use crate::types::{AdFormData, AdforgeError, Result};

/// The artifacts a run can produce or refine, as a closed set. Each kind
/// knows its own system prompt and how to frame a refinement request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    MainFrame,
    Header,
    Poster,
    VoiceOver,
    VideoSegments,
}

impl SectionKind {
    /// Human-readable name used in progress output and failure messages.
    pub fn label(&self) -> &'static str {
        match self {
            Self::MainFrame => "Main Frame",
            Self::Header => "Header",
            Self::Poster => "Poster",
            Self::VoiceOver => "Voice Over",
            Self::VideoSegments => "Video Segments",
        }
    }

    /// The same system instructions used for the section's original
    /// generation; refinement deliberately reuses them.
    pub fn system_prompt(&self, form: &AdFormData) -> String {
        match self {
            Self::MainFrame => main_frame_system_prompt(form),
            Self::Header => header_system_prompt(form),
            Self::Poster => poster_system_prompt(form),
            Self::VoiceOver => voice_over_system_prompt(form),
            Self::VideoSegments => video_segment_system_prompt(form.duration.segment_count()),
        }
    }

    /// Frame a refinement request: here is the previous output, apply only
    /// these changes.
    pub fn refine_user_prompt(&self, current: &str, instructions: &str) -> String {
        match self {
            Self::MainFrame | Self::Header => format!(
                "You previously generated this {label} prompt:\n\n\
                 ---CURRENT PROMPT---\n{current}\n---END CURRENT PROMPT---\n\n\
                 The user wants the following changes/additions:\n\"{instructions}\"\n\n\
                 IMPORTANT:\n\
                 - Apply ONLY the requested changes to the existing prompt\n\
                 - Keep all other aspects exactly the same\n\
                 - Output ONLY the refined prompt, no explanations\n\
                 - Do NOT wrap in markdown code blocks\n\
                 - Make sure the output is a clean, copy-paste ready prompt",
                label = self.label(),
            ),
            Self::Poster => format!(
                "You previously generated this Poster design prompt (JSON):\n\n\
                 ---CURRENT PROMPT---\n{current}\n---END CURRENT PROMPT---\n\n\
                 The user wants the following changes/additions:\n\"{instructions}\"\n\n\
                 IMPORTANT:\n\
                 - Apply ONLY the requested changes to the existing JSON prompt\n\
                 - Keep all other fields exactly the same\n\
                 - Output ONLY the refined JSON, no explanations\n\
                 - The output must be a valid JSON object\n\
                 - Do NOT wrap in markdown code blocks"
            ),
            Self::VoiceOver => format!(
                "You previously generated this Voice Over script:\n\n\
                 ---CURRENT SCRIPT---\n{current}\n---END CURRENT SCRIPT---\n\n\
                 The user wants the following changes/additions:\n\"{instructions}\"\n\n\
                 IMPORTANT:\n\
                 - Apply ONLY the requested changes to the existing script\n\
                 - Keep the same structure and duration\n\
                 - Maintain Telugu language\n\
                 - Output ONLY the refined script, no explanations"
            ),
            Self::VideoSegments => format!(
                "You previously generated these video segment prompts:\n\n\
                 ---CURRENT PROMPTS---\n{current}\n---END CURRENT PROMPTS---\n\n\
                 The user wants the following changes/additions:\n\"{instructions}\"\n\n\
                 IMPORTANT:\n\
                 - Apply ONLY the requested changes to the existing prompts\n\
                 - Keep the same structure and segment count\n\
                 - Output ONLY the refined prompts, no explanations\n\
                 - Use ###SEGMENT### separator between segments"
            ),
        }
    }
}

impl std::str::FromStr for SectionKind {
    type Err = AdforgeError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "main-frame" | "mainframe" => Ok(Self::MainFrame),
            "header" => Ok(Self::Header),
            "poster" => Ok(Self::Poster),
            "voice-over" | "voiceover" => Ok(Self::VoiceOver),
            "video" | "video-segments" => Ok(Self::VideoSegments),
            other => Err(AdforgeError::config(format!(
                "unknown section '{other}'; valid: main-frame, header, poster, voice-over, video"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{AdType, AttireType, DurationPackage};

    fn form() -> AdFormData {
        AdFormData {
            ad_type: AdType::Commercial,
            festival_name: String::new(),
            attire: AttireType::Traditional,
            duration: DurationPackage::Medium,
            text_instructions: String::new(),
        }
    }

    #[test]
    fn test_section_kind_parsing() {
        assert_eq!(
            "main-frame".parse::<SectionKind>().unwrap(),
            SectionKind::MainFrame
        );
        assert_eq!(
            "voiceover".parse::<SectionKind>().unwrap(),
            SectionKind::VoiceOver
        );
        assert!("banner".parse::<SectionKind>().is_err());
    }

    #[test]
    fn test_refinement_embeds_current_content() {
        let prompt =
            SectionKind::Poster.refine_user_prompt("{\"layout\": 1}", "make the headline red");
        assert!(prompt.contains("{\"layout\": 1}"));
        assert!(prompt.contains("make the headline red"));
        assert!(prompt.contains("valid JSON object"));
    }

    #[test]
    fn test_video_refinement_mentions_separator() {
        let prompt = SectionKind::VideoSegments.refine_user_prompt("a###SEGMENT###b", "slower");
        assert!(prompt.contains("###SEGMENT###"));
    }

    #[test]
    fn test_system_prompt_dispatch() {
        let form = form();
        // Every kind produces non-trivial instructions.
        for kind in [
            SectionKind::MainFrame,
            SectionKind::Header,
            SectionKind::Poster,
            SectionKind::VoiceOver,
            SectionKind::VideoSegments,
        ] {
            assert!(kind.system_prompt(&form).len() > 100, "{kind:?} too short");
        }
    }
}
