use clap::Args;
use color_eyre::eyre::{bail, WrapErr};
use color_eyre::Result;
use user_service::{ServiceError, UserApi, UserId, UserUpdate};

use crate::output;

/// Fields left out keep their current value
#[derive(Args, Debug)]
pub struct UpdateArgs {
    /// User identifier
    pub id: UserId,

    #[arg(long)]
    pub first_name: Option<String>,

    #[arg(long)]
    pub last_name: Option<String>,

    #[arg(long)]
    pub email: Option<String>,
}

pub async fn execute(api: &dyn UserApi, args: UpdateArgs) -> Result<()> {
    let current = api
        .get_user(args.id)
        .await
        .wrap_err("Failed to fetch user data")?;

    let mut update = UserUpdate::from(&current);
    if let Some(first_name) = args.first_name {
        update.first_name = first_name;
    }
    if let Some(last_name) = args.last_name {
        update.last_name = last_name;
    }
    if let Some(email) = args.email {
        update.email = email;
    }

    if let Err(e) = update.validate() {
        let message = match e {
            ServiceError::InvalidInput(message) => message,
            other => other.to_string(),
        };
        output::failure(&message);
        bail!("{}", message);
    }

    output::status("Updating", &format!("user {}", args.id));
    api.update_user(args.id, &update)
        .await
        .wrap_err("Failed to update user")?;
    output::success(&format!(
        "Updated {} {} <{}>",
        update.first_name, update.last_name, update.email
    ));
    Ok(())
}
