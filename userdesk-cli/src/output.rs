// Output formatting helpers for CLI commands

use std::io::{self, Write};

use user_service::{User, UserPage};

/// Print a status message: "  Status message"
pub fn status(action: &str, message: &str) {
    eprintln!("\x1b[1;36m{:>12}\x1b[0m {}", action, message);
}

/// Print a success message with checkmark
pub fn success(message: &str) {
    eprintln!("\x1b[1;32m  \u{2713}\x1b[0m {}", message);
}

/// Print a failure message with X
pub fn failure(message: &str) {
    eprintln!("\x1b[1;31m  \u{2717}\x1b[0m {}", message);
}

/// Print a dim/muted message
pub fn dim(message: &str) {
    eprintln!("\x1b[2m{}\x1b[0m", message);
}

/// One user per line: id, name, email
pub fn write_user_row(out: &mut impl Write, user: &User) -> io::Result<()> {
    writeln!(
        out,
        "{:>4}  {:<24}  {}",
        user.id,
        user.full_name(),
        user.email
    )
}

pub fn write_page(out: &mut impl Write, page: &UserPage) -> io::Result<()> {
    if page.data.is_empty() {
        return writeln!(out, "No users found.");
    }
    for user in &page.data {
        write_user_row(out, user)?;
    }
    Ok(())
}

/// All fields of one user, one per line
pub fn write_user_detail(out: &mut impl Write, user: &User) -> io::Result<()> {
    writeln!(out, "id:         {}", user.id)?;
    writeln!(out, "first_name: {}", user.first_name)?;
    writeln!(out, "last_name:  {}", user.last_name)?;
    writeln!(out, "email:      {}", user.email)?;
    writeln!(out, "avatar:     {}", user.avatar)
}

#[cfg(test)]
mod tests {
    use super::*;
    use user_service::testing::sample_user;

    #[test]
    fn test_write_page_rows() {
        let page = UserPage {
            data: vec![sample_user(1), sample_user(2)],
            ..UserPage::default()
        };
        let mut out = Vec::new();
        write_page(&mut out, &page).unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("   1  George Bluth"));
        assert!(lines[1].ends_with("janet.weaver@reqres.in"));
    }

    #[test]
    fn test_write_empty_page() {
        let mut out = Vec::new();
        write_page(&mut out, &UserPage::default()).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "No users found.\n");
    }

    #[test]
    fn test_write_user_detail() {
        let mut out = Vec::new();
        write_user_detail(&mut out, &sample_user(3)).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("first_name: Emma\n"));
        assert!(text.contains("avatar:     https://reqres.in/img/faces/3-image.jpg\n"));
    }
}
