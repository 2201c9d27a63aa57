//! Project gallery and the tilt-card demo.

use std::io::{self, Write};
use std::time::Duration;

use anyhow::{bail, Result};
use crossterm::{
    cursor, queue,
    style::Print,
    terminal::{Clear, ClearType},
};
use folio_core::content::Project;
use folio_core::{MotionConfig, Point, PortfolioContent, Rect, Rotation, TiltCard};

/// Card size in terminal cells.
const CARD: Rect = Rect {
    x: 0.0,
    y: 0.0,
    width: 40.0,
    height: 10.0,
};
const SWEEP_TIME: Duration = Duration::from_millis(1600);
const GAUGE_WIDTH: usize = 21;

pub fn print_projects(content: &PortfolioContent) {
    println!();
    println!("  {}", console::style("Featured Projects").bold().underlined());
    for (index, project) in content.projects.iter().enumerate() {
        println!();
        println!(
            "  {} {} {}",
            console::style(format!("{:>2}.", index + 1)).dim(),
            project.image,
            console::style(&project.title).bold()
        );
        println!("      {}", project.description);
        println!("      {}", console::style(project.technologies.join(" · ")).cyan());
        if project.github_url != "#" {
            println!("      {}", console::style(&project.github_url).underlined().dim());
        }
    }
}

/// Horizontal gauge with a marker at `angle` within [-max, max].
pub fn tilt_gauge(angle: f32, max: f32) -> String {
    let t = if max > 0.0 {
        ((angle / max + 1.0) / 2.0).clamp(0.0, 1.0)
    } else {
        0.5
    };
    let marker = (t * (GAUGE_WIDTH - 1) as f32).round() as usize;
    (0..GAUGE_WIDTH)
        .map(|i| {
            if i == marker {
                '●'
            } else if i == GAUGE_WIDTH / 2 {
                '┼'
            } else {
                '─'
            }
        })
        .collect()
}

pub fn rotation_line(rotation: &Rotation, max: f32) -> String {
    format!(
        "rotateX {:+5.1}° {}   rotateY {:+5.1}° {}",
        rotation.x_deg,
        tilt_gauge(rotation.x_deg, max),
        rotation.y_deg,
        tilt_gauge(rotation.y_deg, max)
    )
}

/// Pointer position along the sweep: a diagonal from the top-left corner
/// to the bottom-right one as `t` goes from 0 to 1.
pub fn sweep_point(bounds: &Rect, t: f32) -> Point {
    let t = t.clamp(0.0, 1.0);
    Point::new(
        bounds.left() + bounds.width * t,
        bounds.top() + bounds.height * t,
    )
}

fn draw(out: &mut impl Write, hovered: bool, rotation: &Rotation, max: f32) -> io::Result<()> {
    let pointer = if hovered { "◉ hover" } else { "○ away " };
    queue!(
        out,
        cursor::MoveToColumn(0),
        Clear(ClearType::CurrentLine),
        Print(format!("  {}  {}", pointer, rotation_line(rotation, max)))
    )?;
    out.flush()
}

/// Sweeps a simulated pointer across one card, then lets it go and waits
/// for the card to settle flat.
pub async fn sweep_card(project: &Project, motion: &MotionConfig) -> Result<()> {
    println!();
    println!("  {} {}", project.image, console::style(&project.title).bold());

    let mut card = TiltCard::with_spring(CARD, motion.spring(), motion.tilt_max_angle_deg);
    let mut stdout = io::stdout();
    queue!(stdout, cursor::Hide)?;

    let mut frames = tokio::time::interval(motion.frame_interval());
    let started = tokio::time::Instant::now();
    let mut last = started;

    loop {
        frames.tick().await;
        let now = tokio::time::Instant::now();
        let sweep = now.duration_since(started).as_secs_f32() / SWEEP_TIME.as_secs_f32();

        if sweep <= 1.0 {
            card.pointer_moved(sweep_point(&card.bounds, sweep));
        } else if card.is_hovered() {
            card.pointer_left();
        }

        let moving = card.update(now.duration_since(last));
        last = now;
        draw(&mut stdout, card.is_hovered(), &card.rotation(), card.max_angle_deg)?;

        if sweep > 1.0 && !moving {
            break;
        }
    }

    queue!(stdout, cursor::Show, Print("\n"))?;
    stdout.flush()?;
    Ok(())
}

/// Picks the project for `--sweep N` (1-based).
pub fn project_at(content: &PortfolioContent, number: usize) -> Result<&Project> {
    match number.checked_sub(1).and_then(|i| content.projects.get(i)) {
        Some(project) => Ok(project),
        None => bail!(
            "no project #{}; choose 1 to {}",
            number,
            content.projects.len()
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gauge_marker_positions() {
        assert!(tilt_gauge(-7.5, 7.5).starts_with('●'));
        assert!(tilt_gauge(7.5, 7.5).ends_with('●'));
        let centered: Vec<char> = tilt_gauge(0.0, 7.5).chars().collect();
        assert_eq!(centered[GAUGE_WIDTH / 2], '●');
        assert_eq!(centered.len(), GAUGE_WIDTH);
    }

    #[test]
    fn test_sweep_runs_corner_to_corner() {
        assert_eq!(sweep_point(&CARD, 0.0), Point::new(0.0, 0.0));
        assert_eq!(sweep_point(&CARD, 0.5), CARD.center());
        assert_eq!(sweep_point(&CARD, 2.0), Point::new(40.0, 10.0));
    }

    #[test]
    fn test_project_lookup_is_one_based() {
        let content = PortfolioContent::builtin();
        assert_eq!(
            project_at(&content, 1).unwrap().title,
            "Microservice Vote Tracking Application"
        );
        assert!(project_at(&content, 0).is_err());
        assert!(project_at(&content, 99).is_err());
    }

    #[test]
    fn test_rotation_line_shows_signs() {
        let line = rotation_line(
            &Rotation {
                x_deg: 7.5,
                y_deg: -7.5,
            },
            7.5,
        );
        assert!(line.contains("rotateX  +7.5°"));
        assert!(line.contains("rotateY  -7.5°"));
    }
}
