//! `adforge stock`: generate stock-image prompts for a completed run.
//!
//! A post-hoc, user-triggered step operating on the completed voice-over
//! script; repeating it overwrites the previous stock-image list.

use super::AppContext;
use crate::cli::output::Output;
use crate::prompts::StockTheme;
use crate::types::{AdforgeError, Result};

pub async fn run(id: String, theme: String, owner: String) -> Result<()> {
    let ctx = AppContext::init(owner)?;
    let out = Output::new();

    let theme: StockTheme = theme.parse()?;
    let mut saved = ctx.db.load_generation(&id)?;

    if saved.bundle.voice_over_script.is_empty() {
        return Err(AdforgeError::config(
            "this generation has no voice-over script; run a full `adforge generate` first",
        ));
    }

    let prompts = ctx
        .pipeline
        .stock_image_prompts(
            &saved.bundle.voice_over_script,
            &saved.bundle.business_info,
            &saved.form,
            theme,
        )
        .await?;

    out.section("Stock Image Prompts");
    for prompt in &prompts {
        println!(
            "{}",
            serde_json::to_string_pretty(prompt).unwrap_or_else(|_| prompt.to_string())
        );
    }

    saved.bundle.stock_image_prompts = Some(prompts);
    ctx.db.update_bundle(&id, &saved.bundle)?;
    out.success(&format!("Updated generation {id}"));

    Ok(())
}
