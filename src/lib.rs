//! Launch records dashboard.
//!
//! A static table of launches is loaded once ([`data`]) and shown through a
//! site dropdown and a payload range slider ([`layout`]) driving a pie chart,
//! a scatter chart and a range label ([`callbacks`]).  The desktop front-end
//! lives in [`app`] and [`ui`]; the browser front-end in `http`
//! (feature `http-server`).

pub mod app;
pub mod callbacks;
pub mod chart;
pub mod color;
pub mod config;
pub mod data;
pub mod layout;
pub mod state;
pub mod ui;

#[cfg(feature = "http-server")]
pub mod http;
