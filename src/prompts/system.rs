//! System and User Prompt Builders
//!
//! Condensed templates for every section the pipeline generates. The copy
//! mirrors the house style of the agency's campaigns: celebrity-standard
//! subject, locked pose, business-specific environment, and strict output
//! formatting so post-processing can rely on the shape of the response.

use serde_json::Value;

use super::business::BusinessKind;
use super::festival::festival_theme;
use crate::constants::pipeline::SEGMENT_SEPARATOR;
use crate::types::{AdFormData, AdType, AttireType};

// =============================================================================
// Extraction
// =============================================================================

pub const EXTRACTION_SYSTEM_PROMPT: &str = r#"Analyze all provided files (images, audio, text) and extract the following business information.

CRITICAL - VISITING CARD PRIORITY:
If a VISITING CARD image is provided, it is the MOST IMPORTANT source of business information. Extract EVERY SINGLE detail from it: business name, owner name, designation, ALL phone numbers (mobile, landline, WhatsApp), email addresses, website URL, COMPLETE address, tagline, services listed, and any other text visible on the card. Do NOT skip or summarize anything.

You may also receive FLYERS, OFFER POSTERS, or BROCHURES. Extract ALL details from them: offers, discounts, pricing, services advertised, contact details, social media handles, design themes, and campaign messaging.

EXTRACT THE FOLLOWING (mark as "Not provided" if unavailable):

1. businessName (EXACT as on visiting card), ownerName, designation, tagline, businessType
2. contact: fullAddress, phoneNumbers (ALL), emails (ALL), website, socialHandles
3. services: mainServices, productCategories, keyOfferings, currentOffers
4. brandAesthetics: colorPalette (from overall branding, NOT from describing the logo), designStyle
   NOTE: Do NOT extract or describe logo colors or logo visual elements; the logo file is used directly.
5. specialRequirements (from audio or text): modelPlacement, productsToFeature, customInstructions, tonePreferences
6. environmentContext: storeDescription, environmentQuality
7. promotionalAnalysis (from flyers/posters): keyMessaging, offers, visualThemes, targetAudience

OUTPUT FORMAT:
Return ONLY a valid JSON object with the field names above. Do not wrap in markdown code blocks."#;

/// Trailing instruction appended after the asset parts.
pub fn extraction_trigger() -> &'static str {
    "Extract business info."
}

// =============================================================================
// Main Frame
// =============================================================================

fn saree_color_guide() -> String {
    BusinessKind::ALL
        .iter()
        .map(|kind| format!("• {}: {}", kind.sector_name(), kind.saree_palette()))
        .collect::<Vec<_>>()
        .join("\n")
}

fn environment_guide() -> String {
    BusinessKind::ALL
        .iter()
        .map(|kind| format!("• {}: {}", kind.sector_name(), kind.environment()))
        .collect::<Vec<_>>()
        .join("\n")
}

fn is_festival(form: &AdFormData) -> bool {
    form.ad_type == AdType::Festival && !form.festival_name.trim().is_empty()
}

pub fn main_frame_system_prompt(form: &AdFormData) -> String {
    let mood = if is_festival(form) {
        format!(
            "Overall look & mood: premium **{} business greeting** start image — powerful, \
             celebratory, trustworthy, aspirational. Feels like a national-level brand \
             advertisement.",
            form.festival_name
        )
    } else {
        "Overall look & mood: premium **business brand-intro start image** — powerful, \
         aspirational, authoritative, trustworthy. Feels like a national-level brand \
         advertisement."
            .to_string()
    };

    let attire = match (form.attire, is_festival(form)) {
        (_, true) => {
            let theme = festival_theme(&form.festival_name);
            format!(
                "ATTIRE (BUSINESS SECTOR + {festival} FESTIVAL BLEND — MANDATORY):\n\
                 Base festival treatment: {saree}.\n\
                 The saree MUST also incorporate the business brand colors from the logo, so \
                 each business gets a visually different saree for the same festival. Fabric \
                 must look expensive Kanchipuram / Banarasi silk with natural gravity, folds, \
                 and realistic creases.\n\n\
                 JEWELLERY (MANDATORY): {jewellery}.",
                festival = form.festival_name.to_uppercase(),
                saree = theme.saree,
                jewellery = theme.jewellery,
            )
        }
        (AttireType::Traditional, false) => format!(
            "ATTIRE (BUSINESS-THEMED SAREE — MANDATORY, DYNAMIC PER BUSINESS):\n\
             Premium traditional Indian silk saree; the color MUST be unique to the business \
             sector and brand colors. Color guide by business type:\n{guide}\n\
             Fabric must look expensive Kanchipuram / Banarasi silk with natural gravity and \
             realistic creases. Styling at film-industry celebrity level, never catalog.\n\n\
             JEWELLERY (MANDATORY): one ultra-thin elegant gold chain, small premium studs or \
             tiny jhumkas, optional single thin bangle. Understated, expensive, actress-style. \
             No heavy temple jewellery, no chunky pieces.",
            guide = saree_color_guide(),
        ),
        (AttireType::Professional, false) => {
            "ATTIRE (CORPORATE — MANDATORY):\n\
             High-fashion premium corporate suit with an \"Old Money\" aesthetic. Preferred \
             colors: beige, cream, pastel pink, soft grey, navy. Structured blazer, crisp \
             white shirt, minimalist gold chain. CEO / founder / brand-ambassador look.\n\n\
             JEWELLERY (MANDATORY): one ultra-thin gold chain and small premium studs; \
             understated and expensive."
                .to_string()
        }
    };

    let environment = if is_festival(form) {
        let theme = festival_theme(&form.festival_name);
        format!(
            "ENVIRONMENT (REAL BUSINESS PREMISES + {festival} DECORATIONS — MOST CRITICAL):\n\
             STEP 1 — build the real business environment first, so anyone can instantly tell \
             what this business does. Environment guide by business type:\n{guide}\n\n\
             STEP 2 — add {festival} decorations ON TOP, as if the staff decorated their own \
             premises: {decorations}.\n\
             Floor: {floor}.\nCultural elements that must be visible: {cultural}.\n\
             Lighting: {lighting}.\nMood: {mood}.\n\
             The final image must feel like a photographer walked into THIS business and shot \
             their decorated premises — not a generic festival scene, not a studio.",
            festival = form.festival_name.to_uppercase(),
            guide = environment_guide(),
            decorations = theme.decorations,
            floor = theme.floor_decor,
            cultural = theme.cultural_elements,
            lighting = theme.lighting,
            mood = theme.mood,
        )
    } else {
        format!(
            "ENVIRONMENT (BUSINESS-THEMED PREMISES — VERY IMPORTANT):\n\
             Photographed inside a real, operational, premium establishment of this exact \
             business type; the environment must instantly communicate what the business \
             does. Environment guide by business type:\n{guide}",
            guide = environment_guide(),
        )
    };

    format!(
        "You are an AI assistant specialized in generating START-FRAME IMAGE PROMPTS for \
         business ads and brand intro creatives.\n\n\
         WORKFLOW RULES (MANDATORY):\n\
         • Generate ONE final output: a SINGLE ultra-detailed, copy-paste-ready IMAGE \
         GENERATION PROMPT\n\
         • The output MUST be inside a code block, with no explanations\n\
         • Do NOT mention video, clip, cinematic motion, or frame\n\n\
         FIRST analyze all provided inputs and extract: business name, business type, \
         services, occasion, and brand colors from the logo.\n\n\
         The generated prompt MUST follow this structure:\n\n\
         Create an ultra-realistic DSLR photograph, single image, 9:16 vertical — a real, \
         high-budget national photoshoot for this business type. No AI-art feel, no \
         rendering, no stock-photo look.\n\n\
         SUBJECT (CELEBRITY STANDARD — NON-NEGOTIABLE):\n\
         One exceptionally beautiful young Indian woman (early-20s) with true \
         celebrity-level presence, like a top South Indian film actress fronting a premium \
         brand campaign. Perfect natural facial symmetry, sharp expressive eyes, prominent \
         healthy blushing cheeks, flawless luminous skin with visible pores for realism, \
         subtle natural makeup. No plastic skin, no airbrushing, no AI glow.\n\n\
         POSE & FRAMING (LOCKED — HIGHEST PRIORITY):\n\
         Mid shot only (head to just below waist). Subject EXACTLY centered with equal space \
         left and right, camera at chest level straight-on, hands gently folded at the \
         waist, one hand resting naturally over the other. The model occupies about 70% of \
         the frame height; the remaining space shows the business environment and logo.\n\n\
         HAIR: silky jet-black hair with natural volume, styled like a leading film actress; \
         glossy but natural, slight flyaways allowed.\n\n\
         {attire}\n\n\
         {environment}\n\n\
         LOGO PLACEMENT: take the ATTACHED logo image and place it as-is on the wall as \
         real physical signage. Never recreate or redesign the logo.\n\n\
         {mood}\n\n\
         NEGATIVE CONSTRAINTS: no text overlays other than the logo signage, no watermark, \
         no extra people, no distorted hands."
    )
}

pub fn main_frame_user_prompt(business_info: &Value, form: &AdFormData, product_count: usize) -> String {
    let sector = super::detect_business_kind(&business_info.to_string());
    let mut prompt = format!(
        "Generate a Main Frame image prompt for:\n\
         BUSINESS INFORMATION: {info}\n\
         DETECTED BUSINESS SECTOR: {sector}\n\
         AD TYPE: {ad_type}\n",
        info = serde_json::to_string_pretty(business_info).unwrap_or_else(|_| business_info.to_string()),
        sector = sector.sector_name(),
        ad_type = form.ad_type.as_str(),
    );
    if is_festival(form) {
        prompt.push_str(&format!("FESTIVAL: {}\n", form.festival_name));
    }
    prompt.push_str(&format!("ATTIRE: {}\n", form.attire.as_str()));

    let custom = business_info
        .pointer("/specialRequirements/customInstructions")
        .and_then(Value::as_str)
        .unwrap_or("None");
    prompt.push_str(&format!("SPECIAL CLIENT INSTRUCTIONS: {custom}\n"));

    if product_count > 0 {
        prompt.push_str(&format!(
            "\nPRODUCT IMAGES ATTACHED: {product_count} product image(s).\n\
             CRITICAL PRODUCT IMAGE INSTRUCTIONS FOR MAIN FRAME:\n\
             - The attached product images MUST be incorporated into the generated image\n\
             - Place the products in the LOWER 20-25% of the frame, below the model's waist\n\
             - Products displayed elegantly on a surface or shelf fitting the business environment\n\
             - Maintain the 70% model dominance rule; products never compete with the model\n\
             - Use the EXACT product images provided, never redesigned\n\
             - Arrange multiple products in a clean, organized layout\n"
        ));
    }
    prompt.push_str("Generate the complete image generation prompt now.");
    prompt
}

// =============================================================================
// Header
// =============================================================================

pub fn header_system_prompt(form: &AdFormData) -> String {
    let palette = if is_festival(form) {
        let theme = festival_theme(&form.festival_name);
        format!(
            "Background: {} blended with the business sector palette. Subtle {} accents are \
             welcome, kept slim and elegant.",
            theme.header_palette, form.festival_name
        )
    } else {
        format!(
            "Background: premium gradient matched to the business sector. Palette guide:\n{}",
            BusinessKind::ALL
                .iter()
                .map(|kind| format!("• {}: {}", kind.sector_name(), kind.header_palette()))
                .collect::<Vec<_>>()
                .join("\n")
        )
    };

    format!(
        "You are an AI assistant specialized in generating HEADER IMAGE PROMPTS: a slim \
         top-banner strip (the top ~10% of a 9:16 creative) that works as a premium digital \
         version of the business visiting card.\n\n\
         WORKFLOW RULES (MANDATORY):\n\
         • Output ONE copy-paste-ready image prompt, no explanations, inside a code block\n\
         • The header must contain EVERY detail from the visiting card: business name, owner \
         name and designation, ALL phone numbers, email, website, complete address, tagline, \
         services. Never skip a detail.\n\
         • The ATTACHED logo must be placed as-is, never redesigned\n\
         • Typography: premium, legible at small sizes, clear hierarchy (business name \
         largest, contact lines compact)\n\
         {palette}\n\n\
         NEGATIVE CONSTRAINTS: no mascots, no clip-art, no invented contact details."
    )
}

pub fn header_user_prompt(business_info: &Value, form: &AdFormData, product_count: usize) -> String {
    let mut prompt = format!(
        "Generate a Header image prompt for:\n\
         BUSINESS INFORMATION: {info}\n\
         AD TYPE: {ad_type}\n",
        info = serde_json::to_string_pretty(business_info).unwrap_or_else(|_| business_info.to_string()),
        ad_type = form.ad_type.as_str(),
    );
    if is_festival(form) {
        prompt.push_str(&format!("FESTIVAL: {}\n", form.festival_name));
    }
    prompt.push_str(
        "\nCRITICAL INSTRUCTION: If a visiting card is attached, extract EVERY piece of \
         information from it (business name, owner name, ALL phone numbers, email, website, \
         full address, tagline, services) and include ALL of them in the header prompt. The \
         visiting card is the PRIMARY source — the header is a premium digital version of \
         the visiting card.\n",
    );
    if product_count > 0 {
        prompt.push_str(&format!(
            "\nPRODUCT IMAGES ATTACHED: {product_count} product image(s).\n\
             Add a slim PRODUCT BANNER STRIP at the bottom of the header: small clean \
             thumbnail-style product images in a horizontal row, using the EXACT product \
             images provided.\n"
        ));
    }
    prompt
}

/// Caption for the visiting card when attached to header generation.
pub fn visiting_card_caption() -> &'static str {
    "This is the VISITING CARD — the #1 PRIMARY SOURCE for ALL header content. Extract \
     EVERY detail from this card and include ALL of them in the header: business name \
     (exact as printed), owner name and designation, ALL phone numbers, email addresses, \
     website, complete address, tagline, services, and any other visible text. The \
     visiting card IS the header, redesigned in a premium digital format."
}

/// Caption for the logo when attached to header generation.
pub fn logo_caption() -> &'static str {
    "This is the LOGO — place this exact image as-is in the header. Do NOT recreate or \
     redesign it."
}

// =============================================================================
// Poster
// =============================================================================

pub fn poster_system_prompt(form: &AdFormData) -> String {
    let occasion = if is_festival(form) {
        format!(
            "The design must carry a tasteful {} festive layer (colors, motifs, greeting \
             line) on top of the business branding.",
            form.festival_name
        )
    } else {
        "The design is a commercial promotion: offer-forward, brand-forward, no festival \
         elements."
            .to_string()
    };

    format!(
        "You are a world-class graphic designer AI specializing in INTERNATIONAL-LEVEL \
         promotional poster designs. You generate ATOMIC-LEVEL detailed image prompts in \
         structured JSON that produce award-winning, print-ready posters.\n\n\
         OUTPUT RULES (MANDATORY):\n\
         • Return ONLY a valid JSON object, never wrapped in markdown code blocks\n\
         • Required top-level fields: \"canvas\" (size, ratio, dpi), \"background\" (style, \
         palette, texture), \"headline\" (text, font style, size, placement), \"subheadline\", \
         \"bodyBlocks\" (array of text blocks with placement), \"contactBar\" (phones, \
         address, website placement), \"logoPlacement\", \"imagery\" (subjects, treatment), \
         \"colorPalette\" (hex values with purpose), \"typographySystem\", \"effects\"\n\
         • Every text field must use the REAL extracted business details, never placeholders\n\
         • {occasion}\n\
         • Composition must follow a clear visual hierarchy: headline, offer, proof, contact"
    )
}

pub fn poster_user_prompt(
    business_info: &Value,
    form: &AdFormData,
    extra_instructions: Option<&str>,
) -> String {
    let mut prompt = format!(
        "Generate an atomic-level detailed poster design prompt in JSON format for:\n\
         BUSINESS INFORMATION: {info}\n\
         AD TYPE: {ad_type}\n",
        info = serde_json::to_string_pretty(business_info).unwrap_or_else(|_| business_info.to_string()),
        ad_type = form.ad_type.as_str(),
    );
    if is_festival(form) {
        prompt.push_str(&format!("FESTIVAL: {}\n", form.festival_name));
    }
    if let Some(instructions) = extra_instructions
        && !instructions.trim().is_empty()
    {
        prompt.push_str(&format!(
            "\nUSER POSTER INSTRUCTIONS (IMPORTANT — follow these closely):\n{instructions}\n"
        ));
    }
    prompt.push_str("Generate the complete poster design JSON now.");
    prompt
}

// =============================================================================
// Voice Over
// =============================================================================

pub fn voice_over_system_prompt(form: &AdFormData) -> String {
    let duration = form.duration.seconds();
    let segments = form.duration.segment_count();
    let tone = if is_festival(form) {
        format!(
            "Festive, warm and celebratory yet premium; open with a {} greeting before the \
             brand story.",
            form.festival_name
        )
    } else {
        "Confident, premium brand authority; aspirational and trustworthy.".to_string()
    };

    format!(
        "You are a WORLD-CLASS TELUGU VOICE-OVER SCRIPT ARTIST whose scripts front premium \
         TV and digital campaigns for national brands.\n\n\
         YOUR TASK: generate a {duration}-second voice-over script for a business \
         advertisement.\n\n\
         ABSOLUTE LANGUAGE RULES (NON-NEGOTIABLE):\n\
         • Output 100% Telugu script (తెలుగు లిపి); zero English alphabet anywhere\n\
         • Common English loanwords are transliterated phonetically into Telugu script \
         (service → సర్వీస్, quality → క్వాలిటీ, offer → ఆఫర్)\n\
         • Phone numbers spelled digit-by-digit as Telugu words, first five digits, a \
         pause (...), then the rest\n\
         • Modern conversational Telugu as actually spoken today; never archaic or bookish\n\n\
         STRICT 8-SECOND SEGMENT TIMING (CRITICAL):\n\
         • Total duration: {duration} seconds across exactly {segments} segments of 8 \
         seconds each\n\
         • Maximum 20-25 Telugu words per segment; short, punchy sentences\n\
         • Label each segment on its own line as \"Segment N: ...\"\n\n\
         CONTENT: powerful opening, emotional connection, the brand name woven in \
         naturally 3-4 times, one memorable punchline, and a clear call-to-action with the \
         phone number in the final segment.\n\n\
         TONE: {tone}"
    )
}

pub fn voice_over_user_prompt(business_info: &Value, form: &AdFormData) -> String {
    let mut prompt = format!(
        "Generate a {duration}-second Telugu voice-over script for:\n\
         BUSINESS INFORMATION: {info}\n\
         AD TYPE: {ad_type}\n",
        duration = form.duration.seconds(),
        info = serde_json::to_string_pretty(business_info).unwrap_or_else(|_| business_info.to_string()),
        ad_type = form.ad_type.as_str(),
    );
    if is_festival(form) {
        prompt.push_str(&format!("FESTIVAL: {}\n", form.festival_name));
    }
    prompt.push_str(&format!(
        "DURATION: {} seconds ({} segments)",
        form.duration.seconds(),
        form.duration.segment_count()
    ));
    prompt
}

// =============================================================================
// Video Segments
// =============================================================================

pub fn video_segment_system_prompt(segment_count: usize) -> String {
    format!(
        "You are an expert at formatting video generation prompts for Veo 3.\n\n\
         YOUR TASK: generate {segment_count} copy-paste-ready Veo 3 prompts, one per \
         voice-over segment provided.\n\n\
         Each prompt MUST follow this EXACT format:\n\n\
         With a very sweet voice she needs to say:\n\n\
         \"<the segment's voice-over text>\"\n\n\
         with appropriate gestures in same location don't change face 100% face match. \
         <segment-appropriate gestures>\n\n\
         Negative prompt:\nNo text on the screen\n\n\
         GESTURE GUIDELINES: opening segment warm welcoming smile and inviting hands; \
         middle segments confident explaining gestures and expressive hands showing \
         quality; closing segment grateful namaste gesture with warm smile.\n\n\
         OUTPUT FORMAT: provide ONLY the prompts, separated by \"{SEGMENT_SEPARATOR}\". \
         Do not include the main frame description."
    )
}

pub fn video_segment_user_prompt(segments: &[String]) -> String {
    let listed = segments
        .iter()
        .enumerate()
        .map(|(i, s)| format!("Segment {}: {}", i + 1, s))
        .collect::<Vec<_>>()
        .join("\n");
    format!(
        "Generate Veo 3 prompts for all segments.\n\
         VOICE-OVER SEGMENTS:\n{listed}\n\
         Generate {count} complete Veo 3 prompts now.",
        count = segments.len(),
    )
}

// =============================================================================
// Stock Images
// =============================================================================

pub const STOCK_IMAGE_SYSTEM_PROMPT: &str = r#"You are a WORLD-CLASS CREATIVE DIRECTOR at a top international advertising agency, curating premium B-roll visuals for a brand campaign.

YOUR TASK: analyze the voice-over script and generate stock image prompts for cutaway shots used during video editing.

There are two image types; pick per prompt:
1. PHOTOGRAPHIC: world-class photographer quality, cinematic lighting, razor-sharp subject, professional color grading.
2. GRAPHIC DESIGN: agency-level designed visual with premium typography, intentional palette, perfect alignment.

OUTPUT RULES:
• Identify the KEY VISUAL MOMENTS in the script that need supporting imagery
• Generate ONLY what the script needs: minimum 1, maximum 5 prompts
• Every image is 9:16 vertical portrait (1080x1920); every prompt starts with "Create a hyper-realistic 9:16 vertical portrait of"
• For each prompt, state which script segment it supports and the exact second range based on 8-second segments (Segment 1 = 0s-8s, Segment 2 = 8s-16s, ...), plus how the editor should place it

OUTPUT FORMAT:
Return ONLY a valid JSON array, never wrapped in markdown code blocks. Each element:
{"id": <number>, "concept": <short name>, "timing": <"Segment N, Xs-Ys">, "prompt": <the full image prompt>, "usage": <editor instruction>}"#;

/// Cultural theme applied to every stock image in a batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StockTheme {
    #[default]
    Indian,
    American,
    MiddleEastern,
    European,
    EastAsian,
    African,
    Universal,
}

impl StockTheme {
    pub fn instruction(&self) -> &'static str {
        match self {
            Self::Indian => {
                "INDIAN — Indian people, Indian skin tones, Indian clothing (sarees, kurtas, \
                 sherwanis), Indian jewelry, Indian urban and rural settings, Indian \
                 architecture and festivals, rangoli, diyas, Indian homes and offices. Models \
                 must look authentically Indian."
            }
            Self::American => {
                "AMERICAN — diverse American people, Western clothing, American urban and \
                 suburban settings, American architecture and lifestyle scenes."
            }
            Self::MiddleEastern => {
                "MIDDLE EASTERN — Middle Eastern people, traditional and modern Middle \
                 Eastern attire, Middle Eastern architecture, bazaars, ornate interiors."
            }
            Self::European => {
                "EUROPEAN — European people, European fashion, European cityscapes, cafés, \
                 cobblestone streets, classical and modern architecture."
            }
            Self::EastAsian => {
                "EAST ASIAN — East Asian people, East Asian fashion and aesthetics, East \
                 Asian cityscapes, minimalist interiors, East Asian cultural elements."
            }
            Self::African => {
                "AFRICAN — African people, vibrant African textiles and patterns, African \
                 landscapes, dynamic urban scenes, African cultural elements."
            }
            Self::Universal => {
                "UNIVERSAL/GLOBAL — a diverse mix of ethnicities and cultures, no specific \
                 regional focus, modern cosmopolitan settings."
            }
        }
    }
}

impl std::str::FromStr for StockTheme {
    type Err = crate::types::AdforgeError;

    fn from_str(s: &str) -> crate::types::Result<Self> {
        match s.to_lowercase().as_str() {
            "indian" => Ok(Self::Indian),
            "american" => Ok(Self::American),
            "middle-eastern" => Ok(Self::MiddleEastern),
            "european" => Ok(Self::European),
            "east-asian" => Ok(Self::EastAsian),
            "african" => Ok(Self::African),
            "universal" => Ok(Self::Universal),
            other => Err(crate::types::AdforgeError::config(format!(
                "unknown theme '{other}'; valid: indian, american, middle-eastern, european, \
                 east-asian, african, universal"
            ))),
        }
    }
}

pub fn stock_image_user_prompt(
    script: &str,
    business_info: &Value,
    form: &AdFormData,
    theme: StockTheme,
) -> String {
    let mut prompt = format!(
        "Analyze this voice-over script and generate stock image prompts for B-roll / \
         cutaway shots to use during video editing.\n\n\
         VOICE-OVER SCRIPT:\n{script}\n\n\
         BUSINESS INFORMATION:\n{info}\n\n\
         AD TYPE: {ad_type}\n",
        info = serde_json::to_string_pretty(business_info).unwrap_or_else(|_| business_info.to_string()),
        ad_type = form.ad_type.as_str(),
    );
    if is_festival(form) {
        prompt.push_str(&format!("FESTIVAL: {}\n", form.festival_name));
    }
    prompt.push_str(&format!(
        "\nCULTURAL THEME: {theme}\n\
         ALL people, clothing, settings, and cultural elements in every image MUST match \
         this theme. This is NON-NEGOTIABLE.\n\n\
         Generate ONLY the stock image prompts this specific script needs (1-5 maximum). \
         Do NOT always give 5 — provide only what editing genuinely needs.",
        theme = theme.instruction(),
    ));
    prompt
}

// =============================================================================
// Transliteration
// =============================================================================

pub const TRANSLITERATION_SYSTEM_PROMPT: &str =
    "You are an expert Telugu-to-English transliterator. You convert Telugu script into \
     readable English phonetic spelling while preserving formatting. You never translate \
     meaning — you only transliterate sounds.";

pub fn transliteration_user_prompt(telugu_text: &str) -> String {
    format!(
        "Transliterate the following Telugu voice-over script into English (Roman script).\n\n\
         Rules:\n\
         - Convert Telugu script words into their English phonetic spelling (e.g., మీ → mee, \
         కోసం → kosam)\n\
         - Keep any English words/brand names that are already in English as-is\n\
         - Keep numbers as-is\n\
         - Preserve all line breaks, segment headers, timestamps, and formatting exactly\n\
         - Do NOT translate — only transliterate (write how it sounds in English letters)\n\
         - Output ONLY the transliterated text, nothing else\n\n\
         Telugu script:\n{telugu_text}"
    )
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::DurationPackage;
    use serde_json::json;

    fn commercial_form() -> AdFormData {
        AdFormData {
            ad_type: AdType::Commercial,
            festival_name: String::new(),
            attire: AttireType::Traditional,
            duration: DurationPackage::Medium,
            text_instructions: String::new(),
        }
    }

    fn festival_form() -> AdFormData {
        AdFormData {
            ad_type: AdType::Festival,
            festival_name: "Diwali".to_string(),
            attire: AttireType::Traditional,
            duration: DurationPackage::Short,
            text_instructions: String::new(),
        }
    }

    #[test]
    fn test_main_frame_commercial_embeds_color_guide() {
        let prompt = main_frame_system_prompt(&commercial_form());
        assert!(prompt.contains("Jewellery"));
        assert!(prompt.contains("saree"));
        assert!(!prompt.contains("FESTIVAL BLEND"));
    }

    #[test]
    fn test_main_frame_festival_embeds_theme() {
        let prompt = main_frame_system_prompt(&festival_form());
        assert!(prompt.contains("DIWALI"));
        assert!(prompt.contains("diyas"));
    }

    #[test]
    fn test_festival_without_name_treated_as_commercial() {
        let mut form = festival_form();
        form.festival_name = "  ".to_string();
        let prompt = main_frame_system_prompt(&form);
        assert!(!prompt.contains("FESTIVAL BLEND"));
    }

    #[test]
    fn test_user_prompts_embed_business_info() {
        let info = json!({"businessName": "Surya Solar", "specialRequirements": {"customInstructions": "show panels"}});
        let prompt = main_frame_user_prompt(&info, &commercial_form(), 2);
        assert!(prompt.contains("Surya Solar"));
        assert!(prompt.contains("show panels"));
        assert!(prompt.contains("2 product image(s)"));

        let without_products = main_frame_user_prompt(&info, &commercial_form(), 0);
        assert!(!without_products.contains("PRODUCT IMAGES ATTACHED"));
    }

    #[test]
    fn test_voice_over_prompt_states_segments() {
        let prompt = voice_over_system_prompt(&commercial_form());
        assert!(prompt.contains("32-second"));
        assert!(prompt.contains("4 segments"));
    }

    #[test]
    fn test_video_segment_prompt_lists_segments() {
        let segments = vec!["opening line".to_string(), "closing line".to_string()];
        let prompt = video_segment_user_prompt(&segments);
        assert!(prompt.contains("Segment 1: opening line"));
        assert!(prompt.contains("Segment 2: closing line"));
        assert!(prompt.contains("2 complete"));
    }

    #[test]
    fn test_video_system_prompt_names_separator() {
        assert!(video_segment_system_prompt(4).contains(SEGMENT_SEPARATOR));
    }

    #[test]
    fn test_stock_theme_parsing_and_default() {
        assert_eq!("indian".parse::<StockTheme>().unwrap(), StockTheme::Indian);
        assert_eq!(
            "middle-eastern".parse::<StockTheme>().unwrap(),
            StockTheme::MiddleEastern
        );
        assert!("martian".parse::<StockTheme>().is_err());
        assert_eq!(StockTheme::default(), StockTheme::Indian);
    }

    #[test]
    fn test_stock_user_prompt_carries_theme() {
        let prompt = stock_image_user_prompt(
            "Segment 1: script",
            &json!({}),
            &commercial_form(),
            StockTheme::European,
        );
        assert!(prompt.contains("EUROPEAN"));
        assert!(prompt.contains("1-5 maximum"));
    }

    #[test]
    fn test_transliteration_prompt_preserves_input() {
        let prompt = transliteration_user_prompt("మీ కోసం");
        assert!(prompt.contains("మీ కోసం"));
        assert!(prompt.contains("only transliterate"));
    }
}
