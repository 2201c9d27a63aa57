//! Terminal front-end for the folio portfolio.

pub mod interrupt;
pub mod logging;
pub mod ui;
