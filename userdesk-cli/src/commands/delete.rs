use clap::Args;
use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use user_service::{UserApi, UserId};

use crate::output;

#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// User identifier
    pub id: UserId,
}

pub async fn execute(api: &dyn UserApi, args: DeleteArgs) -> Result<()> {
    output::status("Deleting", &format!("user {}", args.id));
    api.delete_user(args.id)
        .await
        .wrap_err("Failed to delete user")?;
    output::success(&format!("Deleted user {}", args.id));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use user_service::testing::{ApiCall, MockUserApi};

    #[tokio::test]
    async fn test_delete_issues_one_request() {
        let api = MockUserApi::new();
        execute(&api, DeleteArgs { id: UserId::new(4) }).await.unwrap();
        assert_eq!(api.calls(), vec![ApiCall::Delete(UserId::new(4))]);
    }

    #[tokio::test]
    async fn test_delete_failure() {
        let api = MockUserApi::new().failing_delete();
        let err = execute(&api, DeleteArgs { id: UserId::new(4) })
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Failed to delete user");
    }
}
