//! `adforge generate`: run the full pipeline.

use super::{AppContext, AssetArgs, FormArgs, load_assets};
use crate::cli::output::Output;
use crate::types::Result;

pub async fn run(
    form: FormArgs,
    asset_args: AssetArgs,
    save: bool,
    owner: String,
) -> Result<()> {
    let ctx = AppContext::init(owner)?;
    let out = Output::new();

    let form = form.into_form();
    let assets = load_assets(&asset_args)?;

    let bundle = ctx.pipeline.generate(&form, &assets).await?;
    out.print_bundle(&bundle);

    if save {
        let id = ctx.db.save_generation(&ctx.owner, &form, &bundle)?;
        out.success(&format!("Saved generation {id}"));
    }

    Ok(())
}
