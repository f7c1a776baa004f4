use std::io::Write;

use clap::Args;
use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use user_service::UserApi;

use crate::output;

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Page to fetch, starting at 1
    #[arg(long, short, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    pub page: u32,
}

pub async fn execute(api: &dyn UserApi, args: ListArgs, out: &mut impl Write) -> Result<()> {
    output::status("Fetching", &format!("users page {}", args.page));

    let page = api
        .list_users(args.page)
        .await
        .wrap_err("Failed to fetch users")?;
    output::write_page(out, &page)?;

    if page.total_pages > 0 {
        output::dim(&format!("  page {} of {}", args.page, page.total_pages));
    }
    Ok(())
}
