//! Core building blocks for browser-driven page verification.
//!
//! Two components, composed linearly: a session manager owning the lifecycle
//! of one WebDriver connection ([`Session`], [`with_session`]), and page
//! objects ([`page::DashboardPage`]) that wrap a session handle with named
//! locators and boolean load-state predicates.
//!
//! Element lookups are bounded by an explicit [`WaitPolicy`] passed down from
//! configuration; there is no ambient per-session implicit wait.

pub mod error;
pub mod locator;
pub mod page;
pub mod session;
pub mod wait;

pub use error::{Error, Result};
pub use locator::Locator;
pub use page::{DashboardLocators, DashboardPage, LoadState};
pub use session::{Session, SessionConfig, with_session};
pub use wait::WaitPolicy;
