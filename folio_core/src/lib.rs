//! Folio core - motion state machines and content for a personal portfolio.
//!
//! The interesting parts are the three animated behaviors: the hero
//! typewriter ([`TextCycler`]), the skill counters ([`ProgressCounter`]),
//! and the project card tilt ([`TiltCard`]). Timer-driven components run
//! under [`Mounted`]; the tilt card is stepped by the host's render loop.

pub mod animation;
pub mod constants;
pub mod contact;
pub mod content;
pub mod geometry;
pub mod mount;
pub mod utils;
pub mod visibility;

pub use animation::{
    Animated, CounterFrame, CounterStatus, CounterTiming, CyclePhase, CyclerFrame, CyclerTiming,
    ProgressCounter, Rotation, Spring, TextCycler, TiltCard,
};
pub use contact::{Acknowledgement, ContactDesk, ContactForm};
pub use content::PortfolioContent;
pub use geometry::{Point, Rect};
pub use mount::Mounted;
pub use utils::config::{Config, MotionConfig};
pub use utils::error::{FolioError, FolioResult, ResultExt};
pub use visibility::{VisibilitySignal, Viewport};
