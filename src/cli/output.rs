use owo_colors::OwoColorize;

pub struct Output;

impl Output {
    pub fn success(message: &str) {
        println!("{} {}", "✓".green().bold(), message);
    }

    pub fn error(message: &str) {
        eprintln!("{} {}", "✗".red().bold(), message.red());
    }

    pub fn info(message: &str) {
        println!("{} {}", "ℹ".blue().bold(), message.bright_blue());
    }

    pub fn warning(message: &str) {
        println!("{} {}", "⚠".yellow().bold(), message.yellow());
    }

    /// Bold title followed by one bullet per item.
    pub fn list<S: AsRef<str>>(title: &str, items: &[S]) {
        println!("{}", title.bold());
        for item in items {
            println!("  {} {}", "•".bright_black(), item.as_ref());
        }
    }
}
