//! Ctrl-C handling for the whole run.
//!
//! The interrupt future is created once, before any section starts, so a
//! single SIGINT listener covers every stage of the tour. Interrupting
//! drops the running section, which cancels its mounted animations, and
//! the caller restores the terminal.

use std::future::Future;
use std::io::{self, Write};

use anyhow::Result;
use crossterm::{cursor, execute, style::Print};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Finished,
    Interrupted,
}

/// Runs `work` until it finishes or `interrupt` resolves, whichever is first.
pub async fn run_interruptible<W, I>(work: W, interrupt: I) -> Result<Outcome>
where
    W: Future<Output = Result<()>>,
    I: Future<Output = io::Result<()>>,
{
    tokio::pin!(work);
    tokio::pin!(interrupt);

    tokio::select! {
        biased;
        signal = &mut interrupt => {
            signal?;
            Ok(Outcome::Interrupted)
        }
        result = &mut work => result.map(|()| Outcome::Finished),
    }
}

/// Shows the cursor again and moves past any half-drawn line.
pub fn restore_terminal() -> io::Result<()> {
    let mut stdout = io::stdout();
    execute!(stdout, cursor::Show, Print("\n"))?;
    stdout.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::future;

    #[tokio::test]
    async fn test_finished_work_reports_finished() {
        let work = async { Ok::<(), anyhow::Error>(()) };
        let outcome = run_interruptible(work, future::pending::<io::Result<()>>())
            .await
            .unwrap();
        assert_eq!(outcome, Outcome::Finished);
    }

    #[tokio::test]
    async fn test_interrupt_stops_pending_work() {
        let interrupt = async { Ok::<(), io::Error>(()) };
        let outcome = run_interruptible(future::pending::<Result<()>>(), interrupt)
            .await
            .unwrap();
        assert_eq!(outcome, Outcome::Interrupted);
    }

    #[tokio::test]
    async fn test_interrupt_reaches_work_started_later() {
        // Work that yields through several stages, like the full tour
        let work = async {
            for _ in 0..3 {
                tokio::task::yield_now().await;
            }
            future::pending::<()>().await;
            Ok::<(), anyhow::Error>(())
        };
        let interrupt = async {
            for _ in 0..10 {
                tokio::task::yield_now().await;
            }
            Ok::<(), io::Error>(())
        };
        let outcome = run_interruptible(work, interrupt).await.unwrap();
        assert_eq!(outcome, Outcome::Interrupted);
    }

    #[tokio::test]
    async fn test_work_error_propagates() {
        let result = run_interruptible(
            async { Err::<(), _>(anyhow::anyhow!("draw failed")) },
            future::pending::<io::Result<()>>(),
        )
        .await;
        assert!(result.is_err());
    }
}
