//! Forwards C# and VB.NET analysis to an out-of-process Roslyn analyzer server
//! and reports its diagnostics back to the host, cancelling remote runs when
//! the host cancels the scan.

pub mod adapters;
pub mod config;
pub mod enums;
pub mod errors;
pub mod helpers;
pub mod logger;
pub mod services;
pub mod structs;
pub mod traits;
pub mod workers;
