//! `adforge refine`: re-run one section of a saved generation with
//! additional instructions. Exactly one bundle field is replaced.

use super::AppContext;
use crate::cli::output::Output;
use crate::prompts::SectionKind;
use crate::types::Result;

pub async fn run(id: String, section: String, instructions: String, owner: String) -> Result<()> {
    let ctx = AppContext::init(owner)?;
    let out = Output::new();

    let kind: SectionKind = section.parse()?;
    let mut saved = ctx.db.load_generation(&id)?;

    let current = saved.bundle.section_text(kind);
    let refined = ctx
        .pipeline
        .refine_section(kind, &current, &instructions, &saved.form)
        .await?;

    saved.bundle.apply_refinement(kind, refined);
    ctx.db.update_bundle(&id, &saved.bundle)?;

    out.section(&format!("Refined {}", kind.label()));
    println!("{}", saved.bundle.section_text(kind));
    out.success(&format!("Updated generation {id}"));

    Ok(())
}
