use std::io::{self, Write};
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    cursor, queue,
    style::Print,
    terminal::{Clear, ClearType},
};
use folio_core::{ContactDesk, ContactForm, MotionConfig};

const SPINNER: [&str; 8] = ["⣾", "⣽", "⣻", "⢿", "⡿", "⣟", "⣯", "⣷"];
const SPINNER_INTERVAL: Duration = Duration::from_millis(80);

/// Submits the form with a spinner while the simulated send is pending.
pub async fn submit_contact(mut form: ContactForm, motion: &MotionConfig) -> Result<()> {
    let desk = ContactDesk::new(motion.contact_delay());
    let mut stdout = io::stdout();

    // Reject bad input before showing any progress
    form.validate()?;

    let submission = desk.submit(&mut form);
    tokio::pin!(submission);
    let mut spin = tokio::time::interval(SPINNER_INTERVAL);
    let mut frame = 0usize;

    let outcome = loop {
        tokio::select! {
            result = &mut submission => break result,
            _ = spin.tick() => {
                queue!(
                    stdout,
                    cursor::MoveToColumn(0),
                    Clear(ClearType::CurrentLine),
                    Print(format!("  {} Sending...", SPINNER[frame % SPINNER.len()]))
                )?;
                stdout.flush()?;
                frame += 1;
            }
        }
    };

    queue!(stdout, cursor::MoveToColumn(0), Clear(ClearType::CurrentLine))?;
    stdout.flush()?;

    let ack = outcome?;
    println!("  {} {}", console::style("✔").green(), ack.message);
    Ok(())
}
