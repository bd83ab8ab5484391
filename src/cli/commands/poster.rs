//! `adforge poster`: regenerate the poster JSON for a saved generation,
//! optionally steered by poster-specific instructions. Pairs with the
//! extraction-only workflow.

use super::AppContext;
use crate::cli::output::Output;
use crate::prompts::SectionKind;
use crate::types::Result;

pub async fn run(id: String, instructions: String, owner: String) -> Result<()> {
    let ctx = AppContext::init(owner)?;
    let out = Output::new();

    let mut saved = ctx.db.load_generation(&id)?;

    let poster = ctx
        .pipeline
        .regenerate_poster(&saved.bundle.business_info, &saved.form, &instructions)
        .await?;

    saved.bundle.apply_refinement(SectionKind::Poster, poster);
    ctx.db.update_bundle(&id, &saved.bundle)?;

    out.section("Poster Prompt (JSON)");
    println!("{}", saved.bundle.poster_prompt);
    out.success(&format!("Updated generation {id}"));

    Ok(())
}
