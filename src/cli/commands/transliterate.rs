//! `adforge transliterate`: romanize a saved voice-over script.
//!
//! Display-only: the stored bundle keeps the Telugu original.

use super::AppContext;
use crate::cli::output::Output;
use crate::types::{AdforgeError, Result};

pub async fn run(id: String, owner: String) -> Result<()> {
    let ctx = AppContext::init(owner)?;
    let out = Output::new();

    let saved = ctx.db.load_generation(&id)?;
    if saved.bundle.voice_over_script.is_empty() {
        return Err(AdforgeError::config(
            "this generation has no voice-over script to transliterate",
        ));
    }

    let romanized = ctx
        .pipeline
        .transliterate(&saved.bundle.voice_over_script)
        .await?;

    out.section("Voice Over (English phonetic)");
    println!("{romanized}");

    Ok(())
}
