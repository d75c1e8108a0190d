//! Console output utilities.

use console::style;

use crate::api::Account;

/// Print an info message.
pub fn print_info(message: &str) {
    println!("{} {}", style("INFO").cyan().bold(), message);
}

/// Print a success message.
pub fn print_success(message: &str) {
    println!("{} {}", style("OK").green().bold(), message);
}

/// Print a warning message.
pub fn print_warning(message: &str) {
    println!("{} {}", style("WARN").yellow().bold(), message);
}

/// Print an error message.
pub fn print_error(message: &str) {
    eprintln!("{} {}", style("ERROR").red().bold(), message);
}

/// Print the application banner.
pub fn print_banner() {
    let banner = r#"
╔═══════════════════════════════════════════════════════╗
║     x-harvester                                       ║
║     Popular timeline media → aria2                    ║
╚═══════════════════════════════════════════════════════╝
"#;
    println!("{}", style(banner).cyan());
}

/// Print configuration summary.
pub fn print_config_summary(handle: &str, likes_threshold: u64, dig: bool, endpoint: &str) {
    println!();
    println!("{}", style("Configuration:").bold());
    println!("  Account:    {}", handle);
    println!("  Min likes:  {}", likes_threshold);
    println!("  All pages:  {}", if dig { "yes" } else { "no" });
    println!("  Downloader: {}", endpoint);
    println!();
}

/// Print the resolved account.
pub fn print_account(account: &Account) {
    print_info(&format!(
        "Account {} (@{}): {}",
        account.id,
        account.username,
        if account.description.is_empty() {
            "(no description)"
        } else {
            &account.description
        }
    ));
}
