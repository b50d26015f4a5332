//! Terminal output: progress bar and colored status lines.
//!
//! Uses `indicatif` for the job progress bar and `console` for color
//! styling. [`ProgressView`] mirrors the on-screen slider while the demo
//! session drives quantity updates.

use console::Style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::error::AuthError;
use crate::floor::Job;
use crate::session::Operator;

/// Visual progress indicator for the active job.
pub struct ProgressView {
    pb: ProgressBar,
    green: Style,
    yellow: Style,
}

impl ProgressView {
    /// Start a 0–100 bar labelled with the job's product name.
    pub fn start(job: &Job) -> Self {
        let pb = ProgressBar::new(100);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("  {bar:40.cyan/blue} {pos:>3}% {msg}")
                .expect("invalid template"),
        );
        pb.set_message(format!("{} ({} {})", job.product_name, job.target_quantity, job.unit));

        Self {
            pb,
            green: Style::new().green().bold(),
            yellow: Style::new().yellow(),
        }
    }

    /// Move the bar. Overproduction renders as a full bar plus a note,
    /// since the bar itself is bounded while the percentage is not.
    pub fn update(&self, percent: u32) {
        self.pb.set_position(u64::from(percent.min(100)));
        if percent > 100 {
            self.pb.println(format!(
                "  {} Overproduction: {percent}% of target",
                self.yellow.apply_to("!")
            ));
        }
    }

    /// Finish the bar and report the completed job.
    pub fn complete(&self, job: &Job) {
        self.pb.finish_and_clear();
        println!(
            "  {} Completed: {} ({} {})",
            self.green.apply_to("✓"),
            job.product_name,
            job.completed_quantity,
            job.unit
        );
    }
}

pub fn print_login_ok(operator: &Operator) {
    let green = Style::new().green().bold();
    println!(
        "  {} Logged in: {} [{}]",
        green.apply_to("✓"),
        operator.name,
        operator.role
    );
}

pub fn print_login_failure(err: &AuthError) {
    // Format rejections are advisory (the pad blocks submission anyway);
    // a failed lookup is the real denial.
    let style = match err {
        AuthError::InvalidPinFormat => Style::new().yellow(),
        AuthError::NoMatchingOperator => Style::new().red().bold(),
    };
    println!("  {} {err}", style.apply_to("✗"));
}

pub fn print_offline_banner() {
    let yellow = Style::new().yellow().bold();
    println!(
        "  {} Offline: changes are saved locally",
        yellow.apply_to("⚠")
    );
}
