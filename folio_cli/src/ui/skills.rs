//! Skill bars that count up once the section scrolls into view.

use std::io::{self, Write};

use anyhow::Result;
use crossterm::{
    cursor, queue,
    style::{Print, ResetColor, SetForegroundColor},
    terminal::{Clear, ClearType},
};
use folio_core::{
    CounterFrame, Mounted, MotionConfig, PortfolioContent, ProgressCounter, Rect,
    VisibilitySignal, Viewport,
};

use super::colors::accent_gradient;

pub const BAR_WIDTH: usize = 30;
const NAME_WIDTH: usize = 14;

/// Simulated terminal page: the skills section starts below the fold.
const VIEWPORT_ROWS: f32 = 24.0;
const SECTION_TOP: f32 = 40.0;
const SCROLL_STEP: f32 = 3.0;

/// Filled and empty parts of a bar for `value` percent.
pub fn bar_cells(value: u8, width: usize) -> (usize, usize) {
    let filled = (usize::from(value.min(100)) * width) / 100;
    (filled, width - filled)
}

/// One text row for a skill, without colors.
pub fn skill_row(name: &str, frame: &CounterFrame, width: usize) -> String {
    let (filled, empty) = bar_cells(frame.value, width);
    format!(
        "{:<name_w$} {}{} {:>3}%",
        name,
        "█".repeat(filled),
        "░".repeat(empty),
        frame.value,
        name_w = NAME_WIDTH
    )
}

struct MountedSkill {
    name: String,
    counter: Mounted<ProgressCounter>,
}

struct SkillGroup {
    category: String,
    skills: Vec<MountedSkill>,
}

fn draw(out: &mut impl Write, groups: &[SkillGroup]) -> io::Result<u16> {
    let mut lines = 0u16;
    for group in groups {
        queue!(
            out,
            Clear(ClearType::CurrentLine),
            Print(format!("  {}\r\n", console::style(&group.category).bold()))
        )?;
        lines += 1;

        let count = group.skills.len().max(1) as f32;
        for (i, skill) in group.skills.iter().enumerate() {
            let frame = skill.counter.current();
            queue!(
                out,
                Clear(ClearType::CurrentLine),
                Print("    "),
                SetForegroundColor(accent_gradient(i as f32 / count)),
                Print(skill_row(&skill.name, &frame, BAR_WIDTH)),
                ResetColor,
                Print("\r\n")
            )?;
            lines += 1;
        }
    }
    out.flush()?;
    Ok(lines)
}

/// Scrolls a simulated viewport down until the section crosses the
/// visibility threshold. Returns the number of scroll steps taken.
pub fn scroll_into_view(viewport: &Viewport, section: Rect, signal: &VisibilitySignal) -> usize {
    let mut offset = 0.0;
    let mut steps = 0;
    while !signal.is_visible() {
        viewport.observe(&section.translated_y(-offset), signal);
        if section.top() - offset < viewport.bounds.top() - section.height {
            // Scrolled past it entirely; report directly
            signal.report(true);
        }
        offset += SCROLL_STEP;
        steps += 1;
    }
    steps
}

/// Renders every skill category and animates the counters to completion.
pub async fn play_skills(content: &PortfolioContent, motion: &MotionConfig) -> Result<()> {
    println!();
    println!("  {}", console::style("Skills & Expertise").bold().underlined());
    println!();

    let visible = VisibilitySignal::new();
    let groups: Vec<SkillGroup> = content
        .skill_categories
        .iter()
        .map(|category| SkillGroup {
            category: category.category.clone(),
            skills: category
                .skills
                .iter()
                .map(|skill| MountedSkill {
                    name: skill.name.clone(),
                    counter: Mounted::spawn_when_visible(
                        skill.name.clone(),
                        ProgressCounter::new(skill.level, motion.counter_timing()),
                        &visible,
                    ),
                })
                .collect(),
        })
        .collect();

    let row_count = groups.iter().map(|g| g.skills.len() + 1).sum::<usize>() as f32;
    let viewport = Viewport::new(Rect::new(0.0, 0.0, 80.0, VIEWPORT_ROWS))
        .with_threshold(motion.visibility_threshold);
    let section = Rect::new(0.0, SECTION_TOP, 80.0, row_count);
    let steps = scroll_into_view(&viewport, section, &visible);
    tracing::debug!(steps, "skills section scrolled into view");

    let mut stdout = io::stdout();
    queue!(stdout, cursor::Hide)?;
    let mut frames = tokio::time::interval(motion.frame_interval());

    loop {
        frames.tick().await;
        let lines = draw(&mut stdout, &groups)?;

        let done = groups
            .iter()
            .flat_map(|g| g.skills.iter())
            .all(|s| s.counter.current().finished);
        if done {
            break;
        }
        queue!(stdout, cursor::MoveUp(lines))?;
    }

    queue!(stdout, cursor::Show)?;
    stdout.flush()?;
    Ok(())
}
