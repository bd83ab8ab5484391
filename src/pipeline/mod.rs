//! Generation Pipeline
//!
//! Sequences the section generators for the two creation modes and the
//! post-hoc operations, reporting progress and assembling the final bundle.
//!
//! ## Pipeline Flow
//!
//! ```text
//! Full mode:        Extract → Main Frame → Header → Poster → Voice Over → Video Segments
//! Extraction mode:  Extract
//! Post-hoc:         Refine section | Regenerate poster | Stock images | Transliterate
//! ```
//!
//! Steps run strictly sequentially: they share the progress stream and the
//! credential cursor, and sequential execution keeps failure attribution
//! unambiguous. Extraction always runs first because every later prompt
//! embeds the extracted business data; voice-over precedes video segments
//! because segment prompts derive from the script's own timed structure.
//!
//! Any unrecoverable section failure aborts the whole run: no partial bundle
//! is returned, and the error surfaces to the caller unmodified.

pub mod progress;
pub mod segments;

pub use progress::{NullSink, ProgressSink, RecordingSink};

use std::sync::Arc;

use serde_json::Value;
use tracing::{info, instrument};

use crate::ai::dispatcher::SharedGenerator;
use crate::ai::postprocess::{
    json_or_raw, pretty_json_or_raw, split_segments, stock_list_or_marker, strip_code_fences,
};
use crate::ai::request::ModelRequest;
use crate::ai::retry::generate_with_retry;
use crate::constants::pipeline::progress as pct;
use crate::constants::retry::{DEFAULT_MAX_RETRIES, MIN_SECTION_CHARS};
use crate::prompts::{
    self, SectionKind, StockTheme, extraction_trigger, header_system_prompt, header_user_prompt,
    logo_caption, main_frame_system_prompt, main_frame_user_prompt, poster_system_prompt,
    poster_user_prompt, stock_image_user_prompt, transliteration_user_prompt,
    video_segment_system_prompt, video_segment_user_prompt, visiting_card_caption,
    voice_over_system_prompt, voice_over_user_prompt,
};
use crate::types::{AdFormData, AssetStore, GenerationBundle, Result};

/// Orchestrator for one generation run and the post-hoc operations.
pub struct Pipeline {
    model: SharedGenerator,
    progress: Arc<dyn ProgressSink>,
}

impl Pipeline {
    pub fn new(model: SharedGenerator, progress: Arc<dyn ProgressSink>) -> Self {
        Self { model, progress }
    }

    fn report(&self, label: &str, percent: u8) {
        self.progress.report(label, percent);
    }

    // =========================================================================
    // Full Pipeline
    // =========================================================================

    /// Run the full pipeline and assemble the artifact bundle.
    #[instrument(skip_all)]
    pub async fn generate(
        &self,
        form: &AdFormData,
        assets: &AssetStore,
    ) -> Result<GenerationBundle> {
        // --- Step 1: Business Info Extraction ---
        self.report("Extracting business intelligence...", pct::EXTRACTING);
        let business_info = self.extract_business_info(form, assets).await?;

        let product_count = assets.product_images.len();

        // --- Step 2: Main Frame Prompt ---
        self.report("Generating Main Frame prompt...", pct::MAIN_FRAME);
        let mut main_frame_request = ModelRequest::new(main_frame_system_prompt(form))
            .with_text(main_frame_user_prompt(&business_info, form, product_count));
        for (i, product) in assets.product_images.iter().enumerate() {
            main_frame_request.push_attachment(
                product,
                format!(
                    "Product Image {} of {product_count} — this product MUST appear in the \
                     generated main frame image.",
                    i + 1
                ),
            );
        }
        let main_frame_prompt = strip_code_fences(
            &self
                .section_with_retry(SectionKind::MainFrame, &main_frame_request)
                .await?,
        );

        // --- Step 3: Header Prompt ---
        self.report("Generating Header prompt...", pct::HEADER);
        let mut header_request = ModelRequest::new(header_system_prompt(form))
            .with_text(header_user_prompt(&business_info, form, product_count));
        // The visiting card and logo are attached directly: the header is a
        // digital rendition of the card, not a derivative of the main frame.
        if let Some(card) = &assets.visiting_card {
            header_request.push_attachment(card, visiting_card_caption());
        }
        if let Some(logo) = &assets.logo {
            header_request.push_attachment(logo, logo_caption());
        }
        for (i, product) in assets.product_images.iter().enumerate() {
            header_request.push_attachment(
                product,
                format!(
                    "Product Image {} of {product_count} — include this product in the \
                     header's product banner strip.",
                    i + 1
                ),
            );
        }
        let header_prompt = strip_code_fences(
            &self
                .section_with_retry(SectionKind::Header, &header_request)
                .await?,
        );

        // --- Step 4: Poster Design Prompt (JSON) ---
        self.report("Designing Poster prompt...", pct::POSTER);
        let poster_request = ModelRequest::new(poster_system_prompt(form))
            .with_text(poster_user_prompt(&business_info, form, None))
            .expect_json();
        let poster_raw = self.model.generate(poster_request).await?;
        let poster_prompt = pretty_json_or_raw(&default_if_empty(&poster_raw, "{}"));

        // --- Step 5: Voice Over Script ---
        self.report("Writing Voice Over script...", pct::VOICE_OVER);
        let script_request = ModelRequest::new(voice_over_system_prompt(form))
            .with_text(voice_over_user_prompt(&business_info, form));
        let script_raw = self.model.generate(script_request).await?;
        let voice_over_script = default_if_empty(&script_raw, "Failed to generate script.");

        // --- Step 6: Video Segment Prompts ---
        self.report("Creating video segment prompts...", pct::VIDEO_SEGMENTS);
        let script_segments = segments::split_voice_over_segments(
            &voice_over_script,
            form.duration.segment_count(),
        );
        let video_request =
            ModelRequest::new(video_segment_system_prompt(form.duration.segment_count()))
                .with_text(video_segment_user_prompt(&script_segments));
        let video_raw = self.model.generate(video_request).await?;
        let video_prompts = split_segments(&video_raw);

        self.report("Finalizing...", pct::DONE);
        info!(
            videos = video_prompts.len(),
            products = product_count,
            "Generation run complete"
        );

        Ok(GenerationBundle {
            business_info,
            main_frame_prompt,
            header_prompt,
            poster_prompt,
            voice_over_script,
            video_prompts,
            has_product_images: product_count > 0,
            product_image_count: product_count,
            // Generated on demand by the user after the main run.
            stock_image_prompts: None,
        })
    }

    // =========================================================================
    // Extraction-Only Mode
    // =========================================================================

    /// Extract business info only, for poster-first workflows.
    #[instrument(skip_all)]
    pub async fn extract_only(
        &self,
        form: &AdFormData,
        assets: &AssetStore,
    ) -> Result<GenerationBundle> {
        self.report("Extracting business intelligence...", pct::EXTRACT_ONLY);
        let business_info = self.extract_business_info(form, assets).await?;
        self.report("Business info extracted. Ready for poster creation.", pct::DONE);

        Ok(GenerationBundle::extraction_only(business_info))
    }

    // =========================================================================
    // Post-Hoc Operations
    // =========================================================================

    /// Re-run one section with additional user instructions against its own
    /// current content. Returns the refined text; the caller applies it to
    /// the bundle so exactly one field changes.
    pub async fn refine_section(
        &self,
        kind: SectionKind,
        current: &str,
        instructions: &str,
        form: &AdFormData,
    ) -> Result<String> {
        let request = ModelRequest::new(kind.system_prompt(form))
            .with_text(kind.refine_user_prompt(current, instructions));

        let refined = self.model.generate(request).await?;
        if refined.is_empty() {
            // The model gave nothing back; keep what the user already has.
            return Ok(current.to_string());
        }

        Ok(match kind {
            // Same fallback discipline as initial generation: re-validate
            // JSON, keep the raw text when it does not parse.
            SectionKind::Poster => pretty_json_or_raw(&refined),
            SectionKind::MainFrame | SectionKind::Header => strip_code_fences(&refined),
            SectionKind::VoiceOver | SectionKind::VideoSegments => refined,
        })
    }

    /// Regenerate the poster JSON from extracted business info plus optional
    /// poster-specific instructions.
    pub async fn regenerate_poster(
        &self,
        business_info: &Value,
        form: &AdFormData,
        instructions: &str,
    ) -> Result<String> {
        let request = ModelRequest::new(poster_system_prompt(form))
            .with_text(poster_user_prompt(business_info, form, Some(instructions)))
            .expect_json();

        let raw = self.model.generate(request).await?;
        Ok(pretty_json_or_raw(&default_if_empty(&raw, "{}")))
    }

    /// Generate stock-image prompts from a completed voice-over script.
    /// Invoked on demand after a full run; a repeat invocation replaces the
    /// previous result.
    pub async fn stock_image_prompts(
        &self,
        script: &str,
        business_info: &Value,
        form: &AdFormData,
        theme: StockTheme,
    ) -> Result<Vec<Value>> {
        let request = ModelRequest::new(prompts::STOCK_IMAGE_SYSTEM_PROMPT)
            .with_text(stock_image_user_prompt(script, business_info, form, theme))
            .expect_json();

        let raw = self.model.generate(request).await?;
        Ok(stock_list_or_marker(&default_if_empty(&raw, "[]")))
    }

    /// Transliterate a Telugu voice-over script to Roman script, preserving
    /// formatting. Falls back to the input when the model returns nothing.
    pub async fn transliterate(&self, script: &str) -> Result<String> {
        let request = ModelRequest::new(prompts::TRANSLITERATION_SYSTEM_PROMPT)
            .with_text(transliteration_user_prompt(script));

        let text = self.model.generate(request).await?;
        if text.is_empty() {
            return Ok(script.to_string());
        }
        Ok(text)
    }

    // =========================================================================
    // Internal
    // =========================================================================

    async fn extract_business_info(
        &self,
        form: &AdFormData,
        assets: &AssetStore,
    ) -> Result<Value> {
        let mut request =
            ModelRequest::new(prompts::EXTRACTION_SYSTEM_PROMPT).expect_json();
        push_asset_parts(&mut request, form, assets);
        request.push_text(extraction_trigger());

        let raw = self.model.generate(request).await?;
        Ok(json_or_raw(&default_if_empty(&raw, "{}")))
    }

    /// Dispatch a section through the validation-retry wrapper. Each retry
    /// re-enters the dispatcher, so credential rotation composes with
    /// response validation.
    async fn section_with_retry(
        &self,
        kind: SectionKind,
        request: &ModelRequest,
    ) -> Result<String> {
        generate_with_retry(kind.label(), MIN_SECTION_CHARS, DEFAULT_MAX_RETRIES, || {
            self.model.generate(request.clone())
        })
        .await
    }
}

/// Substitute a default when the model returned an empty payload.
fn default_if_empty(text: &str, default: &str) -> String {
    if text.is_empty() {
        default.to_string()
    } else {
        text.to_string()
    }
}

/// Assemble the shared asset parts every extraction request carries, in the
/// fixed intake order.
fn push_asset_parts(request: &mut ModelRequest, form: &AdFormData, assets: &AssetStore) {
    if !form.text_instructions.is_empty() {
        request.push_text(format!(
            "Client Text Instructions: {}",
            form.text_instructions
        ));
    }
    if let Some(content) = &assets.text_instructions_file {
        request.push_text(format!("Client Text File Content: {content}"));
    }
    if let Some(logo) = &assets.logo {
        request.push_attachment(logo, "This is the Business Logo.");
    }
    if let Some(card) = &assets.visiting_card {
        request.push_attachment(card, "This is the Visiting Card.");
    }
    if let Some(store) = &assets.store_image {
        request.push_attachment(store, "This is the Store/Office Image.");
    }
    if let Some(recording) = &assets.voice_recording {
        request.push_attachment(
            recording,
            "This is the Client's Voice Instructions. Listen carefully.",
        );
    }
    let flyer_count = assets.flyers.len();
    for (i, flyer) in assets.flyers.iter().enumerate() {
        request.push_attachment(
            flyer,
            format!(
                "This is a Flyer/Offer Poster/Brochure ({} of {flyer_count}). Extract ALL \
                 business information, offers, services, contact details, and branding from \
                 this material.",
                i + 1
            ),
        );
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::dispatcher::TextGenerator;
    use crate::types::{AdType, AdforgeError, AttireType, DurationPackage};
    use async_trait::async_trait;
    use serde_json::json;
    use std::collections::VecDeque;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Model that plays back scripted responses in order.
    struct ScriptedModel {
        responses: Mutex<VecDeque<Result<String>>>,
        calls: AtomicUsize,
    }

    impl ScriptedModel {
        fn new(responses: Vec<Result<String>>) -> Arc<Self> {
            Arc::new(Self {
                responses: Mutex::new(responses.into()),
                calls: AtomicUsize::new(0),
            })
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl TextGenerator for ScriptedModel {
        async fn generate(&self, _request: ModelRequest) -> Result<String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.responses
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Err(AdforgeError::api("script exhausted")))
        }
    }

    fn form() -> AdFormData {
        AdFormData {
            ad_type: AdType::Commercial,
            festival_name: String::new(),
            attire: AttireType::Traditional,
            duration: DurationPackage::Short,
            text_instructions: "highlight the discount".to_string(),
        }
    }

    fn long(text: &str) -> String {
        format!("{text} {}", "detail ".repeat(20))
    }

    #[tokio::test]
    async fn test_full_run_assembles_bundle() {
        let model = ScriptedModel::new(vec![
            Ok(r#"{"businessName": "Surya Solar", "businessType": "solar"}"#.to_string()),
            Ok(format!("```\n{}\n```", long("main frame prompt"))),
            Ok(long("header prompt")),
            Ok(r#"{"canvas":{"ratio":"9:16"}}"#.to_string()),
            Ok("Segment 1: మొదటి\nSegment 2: రెండవ".to_string()),
            Ok("video one###SEGMENT###video two".to_string()),
        ]);
        let sink = RecordingSink::new();
        let pipeline = Pipeline::new(model.clone(), sink.clone());

        let bundle = pipeline.generate(&form(), &AssetStore::default()).await.unwrap();

        assert_eq!(bundle.business_info["businessName"], "Surya Solar");
        assert!(bundle.main_frame_prompt.starts_with("main frame prompt"));
        assert!(!bundle.main_frame_prompt.contains("```"));
        assert!(bundle.header_prompt.starts_with("header prompt"));
        assert!(bundle.poster_prompt.contains("\"ratio\": \"9:16\""));
        assert_eq!(bundle.video_prompts, vec!["video one", "video two"]);
        assert!(!bundle.has_product_images);
        assert_eq!(bundle.stock_image_prompts, None);
        assert_eq!(model.calls(), 6);

        // Progress is monotonically non-decreasing and finishes at 100.
        let events = sink.events();
        let percents: Vec<u8> = events.iter().map(|(_, p)| *p).collect();
        assert!(percents.windows(2).all(|w| w[0] <= w[1]), "{percents:?}");
        assert_eq!(*percents.last().unwrap(), 100);
    }

    #[tokio::test]
    async fn test_malformed_extraction_downgrades_to_raw() {
        let model = ScriptedModel::new(vec![
            Ok("definitely not json".to_string()),
            Ok(long("main frame")),
            Ok(long("header")),
            Ok("{}".to_string()),
            Ok("Segment 1: script".to_string()),
            Ok("one video".to_string()),
        ]);
        let pipeline = Pipeline::new(model, Arc::new(NullSink));

        let bundle = pipeline.generate(&form(), &AssetStore::default()).await.unwrap();

        assert_eq!(bundle.business_info, json!({"raw": "definitely not json"}));
        // The run was never aborted over the parse failure.
        assert_eq!(bundle.video_prompts, vec!["one video"]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_persistently_short_section_aborts_run() {
        let model = ScriptedModel::new(vec![
            Ok("{}".to_string()),
            Ok("too short".to_string()),
            Ok("too short".to_string()),
            Ok("too short".to_string()),
        ]);
        let pipeline = Pipeline::new(model.clone(), Arc::new(NullSink));

        let err = pipeline
            .generate(&form(), &AssetStore::default())
            .await
            .unwrap_err();

        match err {
            AdforgeError::Section { section, .. } => assert_eq!(section, "Main Frame"),
            other => panic!("expected section failure, got {other}"),
        }
        // Extraction plus three main-frame attempts; nothing after the abort.
        assert_eq!(model.calls(), 4);
    }

    #[tokio::test]
    async fn test_extract_only_populates_info_alone() {
        let model = ScriptedModel::new(vec![Ok(r#"{"businessName": "Asha Silks"}"#.to_string())]);
        let sink = RecordingSink::new();
        let pipeline = Pipeline::new(model, sink.clone());

        let bundle = pipeline
            .extract_only(&form(), &AssetStore::default())
            .await
            .unwrap();

        assert_eq!(bundle.business_info["businessName"], "Asha Silks");
        assert!(bundle.main_frame_prompt.is_empty());
        assert!(bundle.video_prompts.is_empty());
        assert_eq!(sink.events().last().unwrap().1, 100);
    }

    #[tokio::test]
    async fn test_refine_poster_keeps_raw_on_invalid_json() {
        let model = ScriptedModel::new(vec![Ok("this is not { json".to_string())]);
        let pipeline = Pipeline::new(model, Arc::new(NullSink));

        let refined = pipeline
            .refine_section(SectionKind::Poster, r#"{"old": true}"#, "add a red headline", &form())
            .await
            .unwrap();

        // The new raw text replaces the field; the old value is gone.
        assert_eq!(refined, "this is not { json");
    }

    #[tokio::test]
    async fn test_refine_empty_response_keeps_current() {
        let model = ScriptedModel::new(vec![Ok(String::new())]);
        let pipeline = Pipeline::new(model, Arc::new(NullSink));

        let refined = pipeline
            .refine_section(SectionKind::VoiceOver, "current script", "shorter", &form())
            .await
            .unwrap();

        assert_eq!(refined, "current script");
    }

    #[tokio::test]
    async fn test_refine_main_frame_strips_fences() {
        let model = ScriptedModel::new(vec![Ok("```\nrefined prompt\n```".to_string())]);
        let pipeline = Pipeline::new(model, Arc::new(NullSink));

        let refined = pipeline
            .refine_section(SectionKind::MainFrame, "old", "brighter", &form())
            .await
            .unwrap();

        assert_eq!(refined, "refined prompt");
    }

    #[tokio::test]
    async fn test_stock_prompts_parse_and_fallback() {
        let model = ScriptedModel::new(vec![
            Ok(r#"[{"id":1,"concept":"storefront"}]"#.to_string()),
            Ok("broken json".to_string()),
        ]);
        let pipeline = Pipeline::new(model, Arc::new(NullSink));

        let parsed = pipeline
            .stock_image_prompts("script", &json!({}), &form(), StockTheme::Indian)
            .await
            .unwrap();
        assert_eq!(parsed[0]["concept"], "storefront");

        let fallback = pipeline
            .stock_image_prompts("script", &json!({}), &form(), StockTheme::Indian)
            .await
            .unwrap();
        assert_eq!(fallback.len(), 1);
        assert_eq!(fallback[0]["concept"], "Parse Error");
    }

    #[tokio::test]
    async fn test_transliterate_falls_back_to_input() {
        let model = ScriptedModel::new(vec![Ok(String::new())]);
        let pipeline = Pipeline::new(model, Arc::new(NullSink));

        let text = pipeline.transliterate("మీ కోసం").await.unwrap();
        assert_eq!(text, "మీ కోసం");
    }

    #[tokio::test]
    async fn test_full_run_with_rate_limited_first_credential() {
        // Credential 1 is rate-limited; the dispatcher settles on credential
        // 2 for the whole run, and the bundle carries its (fence-stripped)
        // response text.
        use crate::ai::{CredentialPool, Dispatcher};
        use crate::config::ModelConfig;

        let mut server = mockito::Server::new_async().await;
        let body_text = "x".repeat(200);
        server
            .mock("POST", "/models/gemini-2.5-flash:generateContent")
            .match_header("x-goog-api-key", "key-0")
            .with_status(429)
            .with_body(r#"{"error":{"message":"Resource has been exhausted"}}"#)
            .create_async()
            .await;
        server
            .mock("POST", "/models/gemini-2.5-flash:generateContent")
            .match_header("x-goog-api-key", "key-1")
            .with_status(200)
            .with_body(
                serde_json::json!({
                    "candidates": [{"content": {"parts": [{"text": format!("```\n{body_text}\n```")}]}}]
                })
                .to_string(),
            )
            .expect_at_least(6)
            .create_async()
            .await;

        let pool = Arc::new(
            CredentialPool::load((0..3).map(|i| format!("key-{i}"))).unwrap(),
        );
        let model_config = ModelConfig {
            api_base: server.url(),
            ..ModelConfig::default()
        };
        let dispatcher = Arc::new(Dispatcher::new(pool.clone(), &model_config).unwrap());
        let pipeline = Pipeline::new(dispatcher, Arc::new(NullSink));

        let bundle = pipeline.generate(&form(), &AssetStore::default()).await.unwrap();

        // The pool settled on the working credential.
        assert_eq!(pool.cursor(), 1);
        assert_eq!(bundle.main_frame_prompt, body_text);
        // The same raw text flowed into the other sections with their own
        // fallback disciplines.
        assert_eq!(
            bundle.business_info,
            serde_json::json!({"raw": format!("```\n{body_text}\n```")})
        );
        assert_eq!(bundle.video_prompts.len(), 1);
    }

    #[test]
    fn test_asset_parts_follow_intake_order() {
        use crate::ai::request::Part;
        use crate::types::Attachment;

        let attachment = |mime: &str| Attachment {
            mime_type: mime.to_string(),
            data: "Zm9v".to_string(),
        };
        let assets = AssetStore {
            logo: Some(attachment("image/png")),
            visiting_card: Some(attachment("image/jpeg")),
            store_image: None,
            product_images: vec![],
            flyers: vec![attachment("image/jpeg")],
            voice_recording: None,
            text_instructions_file: Some("file says hello".to_string()),
        };

        let mut request = ModelRequest::new("system");
        push_asset_parts(&mut request, &form(), &assets);

        let texts: Vec<String> = request
            .parts
            .iter()
            .filter_map(|p| match p {
                Part::Text { text } => Some(text.clone()),
                _ => None,
            })
            .collect();

        assert!(texts[0].starts_with("Client Text Instructions"));
        assert!(texts[1].starts_with("Client Text File Content"));
        assert_eq!(texts[2], "This is the Business Logo.");
        assert_eq!(texts[3], "This is the Visiting Card.");
        assert!(texts[4].starts_with("This is a Flyer/Offer Poster/Brochure (1 of 1)"));
    }
}
