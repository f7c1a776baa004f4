use std::io::Write;

use clap::Args;
use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use user_service::{UserApi, UserId};

use crate::output;

#[derive(Args, Debug)]
pub struct ShowArgs {
    /// User identifier
    pub id: UserId,
}

pub async fn execute(api: &dyn UserApi, args: ShowArgs, out: &mut impl Write) -> Result<()> {
    let user = api
        .get_user(args.id)
        .await
        .wrap_err("Failed to fetch user data")?;
    output::write_user_detail(out, &user)?;
    Ok(())
}
