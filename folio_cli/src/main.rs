use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::{Parser, Subcommand};
use folio_core::utils::config::Config;
use folio_core::utils::debug::is_debug_enabled;
use folio_core::{ContactForm, MotionConfig, PortfolioContent};

use folio_cli::interrupt::{restore_terminal, run_interruptible, Outcome};
use folio_cli::logging::init_logging;
use folio_cli::ui::{contact, hero, projects, sections, skills};

#[derive(Parser)]
#[command(name = "folio")]
#[command(about = "Personal portfolio, animated in your terminal", long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    /// Config file (defaults to ~/.folio/config.json when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Play the hero banner typewriter
    Hero {
        /// How long to run before exiting
        #[arg(long, default_value_t = 10)]
        seconds: u64,
    },
    /// Print the about section
    About,
    /// Animate the skill bars
    Skills,
    /// Print the experience timeline
    Experience,
    /// List projects, optionally demoing the tilt effect on one
    Projects {
        /// Sweep a pointer across project N (1-based)
        #[arg(long)]
        sweep: Option<usize>,
    },
    /// Send a message through the demo contact form
    Contact {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        subject: String,
        #[arg(long)]
        message: String,
    },
    /// Write the default config file
    Config {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

fn init_config(path: Option<PathBuf>, force: bool) -> Result<()> {
    let path = match path.or_else(Config::default_path) {
        Some(path) => path,
        None => anyhow::bail!("no home directory found; pass --config <path>"),
    };
    if path.exists() && !force {
        anyhow::bail!("{} already exists (use --force to overwrite)", path.display());
    }
    Config::default().save_to_file(&path)?;
    println!("  {} wrote {}", console::style("✔").green(), path.display());
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.debug || is_debug_enabled());

    if let Some(Command::Config { force }) = cli.command {
        return init_config(cli.config, force);
    }

    let config = Config::load_or_default(cli.config.as_deref())?;
    let content = config.content();
    tracing::info!(roles = content.profile.roles.len(), "portfolio loaded");

    let outcome = run_interruptible(
        run(cli.command, &content, &config.motion),
        tokio::signal::ctrl_c(),
    )
    .await?;
    if outcome == Outcome::Interrupted {
        tracing::info!("interrupted");
        restore_terminal()?;
    }

    Ok(())
}

async fn run(
    command: Option<Command>,
    content: &PortfolioContent,
    motion: &MotionConfig,
) -> Result<()> {
    match command {
        Some(Command::Hero { seconds }) => {
            hero::play_hero(content, motion, Duration::from_secs(seconds)).await?;
        }
        Some(Command::About) => sections::print_about(content),
        Some(Command::Skills) => skills::play_skills(content, motion).await?,
        Some(Command::Experience) => sections::print_experience(content),
        Some(Command::Projects { sweep }) => {
            projects::print_projects(content);
            if let Some(number) = sweep {
                let project = projects::project_at(content, number)?;
                projects::sweep_card(project, motion).await?;
            }
        }
        Some(Command::Contact {
            name,
            email,
            subject,
            message,
        }) => {
            let form = ContactForm {
                name,
                email,
                subject,
                message,
            };
            contact::submit_contact(form, motion).await?;
        }
        // Handled before the config is loaded
        Some(Command::Config { .. }) => {}
        None => {
            // Whole page, top to bottom
            hero::play_hero(content, motion, Duration::from_secs(6)).await?;
            sections::print_about(content);
            skills::play_skills(content, motion).await?;
            sections::print_experience(content);
            projects::print_projects(content);
            if let Some(first) = content.projects.first() {
                projects::sweep_card(first, motion).await?;
            }
            sections::print_contact_details(content);
            sections::print_footer(content);
        }
    }

    Ok(())
}
