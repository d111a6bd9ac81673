use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output_list;

pub async fn run(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let records = ctx.db.list_all().await?;
    output_list(&records, flags.format)
}
