//! Console Output Helpers
//!
//! Styled terminal output for command results and pipeline progress.

use console::style;

use crate::pipeline::ProgressSink;
use crate::storage::SavedGeneration;
use crate::types::GenerationBundle;

pub struct Output;

impl Output {
    pub fn new() -> Self {
        Self
    }

    pub fn success(&self, message: &str) {
        println!("{} {}", style("✓").green(), message);
    }

    pub fn error(&self, message: &str) {
        eprintln!("{} {}", style("✗").red(), message);
    }

    pub fn warning(&self, message: &str) {
        println!("{} {}", style("⚠").yellow(), message);
    }

    pub fn info(&self, message: &str) {
        println!("{} {}", style("ℹ").blue(), message);
    }

    pub fn section(&self, title: &str) {
        println!("\n{}", style(title).bold());
        println!("{}", "─".repeat(40));
    }

    /// Print a complete generation bundle, section by section.
    pub fn print_bundle(&self, bundle: &GenerationBundle) {
        self.section("Business Info");
        println!(
            "{}",
            serde_json::to_string_pretty(&bundle.business_info)
                .unwrap_or_else(|_| bundle.business_info.to_string())
        );

        if !bundle.main_frame_prompt.is_empty() {
            self.section("Main Frame Prompt");
            println!("{}", bundle.main_frame_prompt);
        }
        if !bundle.header_prompt.is_empty() {
            self.section("Header Prompt");
            println!("{}", bundle.header_prompt);
        }
        if !bundle.poster_prompt.is_empty() {
            self.section("Poster Prompt (JSON)");
            println!("{}", bundle.poster_prompt);
        }
        if !bundle.voice_over_script.is_empty() {
            self.section("Voice Over Script");
            println!("{}", bundle.voice_over_script);
        }
        for (i, prompt) in bundle.video_prompts.iter().enumerate() {
            self.section(&format!("Video Segment {}", i + 1));
            println!("{prompt}");
        }
        if let Some(stock) = &bundle.stock_image_prompts {
            self.section("Stock Image Prompts");
            for item in stock {
                println!(
                    "{}",
                    serde_json::to_string_pretty(item).unwrap_or_else(|_| item.to_string())
                );
            }
        }
        if bundle.has_product_images {
            self.info(&format!(
                "{} product image(s) were attached to this run",
                bundle.product_image_count
            ));
        }
    }

    /// Print the saved-generation listing, newest first.
    pub fn print_saved_list(&self, generations: &[SavedGeneration]) {
        if generations.is_empty() {
            self.info("No saved generations.");
            return;
        }
        for g in generations {
            println!(
                "{}  {}  {}  {}",
                style(&g.id).cyan(),
                g.created_at,
                style(&g.business_name).bold(),
                style(g.form.ad_type.as_str()).dim(),
            );
        }
    }
}

impl Default for Output {
    fn default() -> Self {
        Self::new()
    }
}

/// Progress sink that renders pipeline steps to the terminal.
pub struct ConsoleProgress;

impl ConsoleProgress {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ConsoleProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressSink for ConsoleProgress {
    fn report(&self, label: &str, percent: u8) {
        println!("{} {}", style(format!("[{percent:>3}%]")).dim(), label);
    }
}
