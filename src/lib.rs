//! # daoshield - Log analysis and figures for Li-MSD experiments
//!
//! This library evaluates the Li-MSD mitigation against DAO replay attacks
//! in Contiki-NG / Cooja RPL networks.
//!
//! ## Overview
//!
//! Two independent pieces make up the crate:
//!
//! - **Log analysis**: a single streaming pass over a Cooja log counts data
//!   packets sent and received, DAO messages sent and blocked, blacklisted
//!   nodes and attack events, then derives the packet delivery ratio (PDR)
//!   and packet loss ratio (PLR).
//! - **Report emission**: six grouped bar figures (PDR, AE2ED, APC, PLR,
//!   FPR, memory overhead) and a fixed-width results summary table, rendered
//!   from the illustrative reference datasets.
//!
//! ## Architecture
//!
//! - `analysis`: line predicates, the log counter, scenario comparison and
//!   JSON reports
//! - `charts`: chart model, reference datasets, plot style and SVG rendering
//! - `summary`: the results summary table
//! - `emitter`: output directory handling and file writes
//! - `config_loader`: chart style loading from YAML
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use std::path::Path;
//! use daoshield::{analysis, charts::ChartStyle, emitter::ReportEmitter};
//!
//! // Count events in a Cooja log
//! let metrics = analysis::analyze_log_file(Path::new("logs/with-defense.log"))?;
//! println!("PDR: {:.2}%", metrics.pdr);
//!
//! // Write every reference figure and the summary table into results/
//! let emitter = ReportEmitter::new(ChartStyle::default(), "results");
//! for path in emitter.emit_all()? {
//!     println!("{}", path.display());
//! }
//! # Ok::<(), color_eyre::eyre::Error>(())
//! ```
//!
//! ## Error Handling
//!
//! Log analysis, chart validation and style validation use dedicated
//! `thiserror` types. Filesystem boundaries return `color_eyre` results with
//! the offending path attached.

pub mod analysis;
pub mod charts;
pub mod config_loader;
pub mod emitter;
pub mod summary;
