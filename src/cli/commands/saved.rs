//! `adforge saved`: list, show, and delete saved generations.

use super::StorageContext;
use crate::cli::output::Output;
use crate::types::Result;

pub fn list(owner: String) -> Result<()> {
    let ctx = StorageContext::init(owner)?;
    let out = Output::new();

    let generations = ctx.db.list_generations(&ctx.owner)?;
    out.print_saved_list(&generations);

    Ok(())
}

pub fn show(id: String, owner: String) -> Result<()> {
    let ctx = StorageContext::init(owner)?;
    let out = Output::new();

    let saved = ctx.db.load_generation(&id)?;
    out.info(&format!(
        "{} | {} ({}), saved {}",
        saved.id,
        saved.business_name,
        saved.form.ad_type.as_str(),
        saved.created_at
    ));
    out.print_bundle(&saved.bundle);

    Ok(())
}

pub fn delete(id: String, owner: String) -> Result<()> {
    let ctx = StorageContext::init(owner)?;
    let out = Output::new();

    ctx.db.delete_generation(&id)?;
    out.success(&format!("Deleted generation {id}"));

    Ok(())
}
