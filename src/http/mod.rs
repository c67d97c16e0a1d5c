//! Browser front-end for the dashboard.
//!
//! An axum server renders the page at `/` and answers the page's control
//! changes with the same callbacks the desktop app uses, returning Plotly
//! figures as JSON.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  Browser (page.rs)                                        │
//! │  - dropdown / slider events → fetch /api/*                │
//! │  - Plotly.react(figure)                                   │
//! └───────────────────┬──────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼──────────────────────────────────────┐
//! │  HTTP Layer (axum handlers)                               │
//! │  - query parsing and validation                           │
//! │  - JSON serialization, CORS, compression, tracing         │
//! └───────────────────┬──────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼──────────────────────────────────────┐
//! │  callbacks.rs over the shared read-only LaunchDataset     │
//! └──────────────────────────────────────────────────────────┘
//! ```

pub mod dto;
pub mod error;
pub mod handlers;
pub mod page;
pub mod router;
pub mod state;

pub use router::create_router;
pub use state::ServerState;
