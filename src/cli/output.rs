//! Colored output helpers for the CLI.

use crate::api::handlers::system::{ENGLISH_INSTRUCTIONS, GUJARATI_INSTRUCTIONS};
use owo_colors::OwoColorize;

/// Output style configuration
pub struct Output {
    /// Whether to use colored output
    pub colored: bool,
}

impl Default for Output {
    fn default() -> Self {
        Self::new()
    }
}

impl Output {
    /// Create a new output helper with colors enabled
    pub fn new() -> Self {
        Self { colored: true }
    }

    /// Create a new output helper with colors disabled
    pub fn no_color() -> Self {
        Self { colored: false }
    }

    /// Print the K.A.R.A banner
    pub fn banner(&self) {
        if self.colored {
            println!(
                r#"
   {}
   {}
   {}
   {}
"#,
                " _  __    _    ____      _    ".bright_cyan().bold(),
                "| |/ /   / \\  |  _ \\    / \\   ".bright_cyan().bold(),
                "| ' < _ / _ \\ | |_) |_ / _ \\  ".cyan().bold(),
                "|_|\\_(_)_/ \\_\\|_| \\_(_)_/ \\_\\ ".blue().bold(),
            );
            println!(
                "   {} {}",
                "Knowledge-Augmented Retrieval Assistant".bright_white().bold(),
                format!("v{}", env!("CARGO_PKG_VERSION")).dimmed()
            );
            println!(
                "   {}\n",
                "ગુજરાતી ટેક્સ સહાયક | Gujarati Tax Assistant".bright_yellow()
            );
        } else {
            println!(
                r#"
 _  __    _    ____      _
| |/ /   / \  |  _ \    / \
| ' < _ / _ \ | |_) |_ / _ \
|_|\_(_)_/ \_\|_| \_(_)_/ \_\

   Knowledge-Augmented Retrieval Assistant v{}
   ગુજરાતી ટેક્સ સહાયક | Gujarati Tax Assistant
"#,
                env!("CARGO_PKG_VERSION")
            );
        }
    }

    /// Print the bilingual usage instructions.
    pub fn instructions(&self) {
        self.section("Instructions | સૂચનાઓ");
        for line in ENGLISH_INSTRUCTIONS {
            self.info(line);
        }
        println!();
        for line in GUJARATI_INSTRUCTIONS {
            self.info(line);
        }
        println!();
        self.section("Response Format | જવાબ ફોર્મેટ");
        self.info("Detailed explanation | વિગતવાર સમજૂતી");
        self.info("Relevant rules | સંબંધિત નિયમો");
        self.info("Examples | ઉદાહરણો");
        self.info("Important notes | મહત્વપૂર્ણ નોંધ");
        println!();
    }

    /// Print a section heading
    pub fn section(&self, title: &str) {
        if self.colored {
            println!("  {}", title.bright_white().bold());
        } else {
            println!("  ## {}", title);
        }
    }

    /// Print an info message
    pub fn info(&self, message: &str) {
        if self.colored {
            println!("  {} {}", "•".blue(), message);
        } else {
            println!("  [INFO] {}", message);
        }
    }

    /// Print a success message with a checkmark
    pub fn success(&self, message: &str) {
        if self.colored {
            println!("  {} {}", "✓".green().bold(), message.green());
        } else {
            println!("  [OK] {}", message);
        }
    }

    /// Print a warning message
    pub fn warning(&self, message: &str) {
        if self.colored {
            println!("  {} {}", "⚠".yellow().bold(), message.yellow());
        } else {
            println!("  [WARN] {}", message);
        }
    }

    /// Print an error message
    pub fn error(&self, message: &str) {
        if self.colored {
            eprintln!("  {} {}", "✗".red().bold(), message.red());
        } else {
            eprintln!("  [ERROR] {}", message);
        }
    }

    /// Print an assistant answer
    pub fn answer(&self, message: &str) {
        if self.colored {
            println!("\n{}\n", message.bright_white());
        } else {
            println!("\n{}\n", message);
        }
    }
}
