//! Hero banner with the rotating role typewriter.

use std::io::{self, Write};
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    cursor, queue,
    style::{Print, ResetColor, SetForegroundColor},
    terminal::{Clear, ClearType},
};
use folio_core::{CyclerFrame, Mounted, MotionConfig, PortfolioContent, TextCycler};

use super::colors::accent_gradient;

const CURSOR_BLINK: Duration = Duration::from_millis(530);

/// The typed text followed by a block cursor, or a space when the cursor
/// is in its off phase so the line width stays stable.
pub fn hero_line(frame: &CyclerFrame, cursor_on: bool) -> String {
    format!("{}{}", frame.text, if cursor_on { '▌' } else { ' ' })
}

fn draw(out: &mut impl Write, frame: &CyclerFrame, cursor_on: bool) -> io::Result<()> {
    queue!(
        out,
        cursor::MoveToColumn(0),
        Clear(ClearType::CurrentLine),
        Print("  "),
        SetForegroundColor(accent_gradient(0.0)),
        Print(hero_line(frame, cursor_on)),
        ResetColor
    )?;
    out.flush()
}

/// Prints the banner and runs the typewriter for `run_for`.
pub async fn play_hero(
    content: &PortfolioContent,
    motion: &MotionConfig,
    run_for: Duration,
) -> Result<()> {
    let profile = &content.profile;
    println!();
    println!("  {}", console::style("Hi, I'm").dim());
    println!("  {}", console::style(&profile.name).bold().bright());

    let mut hero = Mounted::spawn(
        "hero",
        TextCycler::new(profile.roles.iter().cloned(), motion.cycler_timing()),
    );

    let mut stdout = io::stdout();
    queue!(stdout, cursor::Hide)?;

    let deadline = tokio::time::sleep(run_for);
    tokio::pin!(deadline);
    let mut blink = tokio::time::interval(CURSOR_BLINK);
    let mut cursor_on = true;
    let mut ticking = true;

    loop {
        tokio::select! {
            _ = &mut deadline => break,
            _ = blink.tick() => cursor_on = !cursor_on,
            alive = hero.changed(), if ticking => ticking = alive,
        }
        draw(&mut stdout, &hero.current(), cursor_on)?;
    }

    hero.unmount().await;
    queue!(stdout, cursor::Show, Print("\n"))?;
    stdout.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::CyclePhase;

    #[test]
    fn test_hero_line_keeps_width() {
        let frame = CyclerFrame {
            text: "DevOps".to_string(),
            role_index: 0,
            phase: CyclePhase::Typing,
        };
        let on = hero_line(&frame, true);
        let off = hero_line(&frame, false);
        assert_eq!(on.chars().count(), off.chars().count());
        assert!(on.starts_with("DevOps"));
    }
}
