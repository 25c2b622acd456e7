//! Crate `studio-workflow`: ejecución simulada, atajos y sesión
//!
//! - `runner`: trait `CodeRunner` y `SimulatedRunner` (retardo fijo,
//!   recuento de líneas).
//! - `execution`: `ExecutionWorkflow`, las transiciones de `CodeStatus` y
//!   los logs de una ejecución, con su `OverlapPolicy`.
//! - `hotkey`: parseo de `ctrl+s` / `ctrl+r`.
//! - `session`: `StudioSession`, fachada store + workflow.
//! - `config`: `StudioConfig::from_env`.
pub mod config;
pub mod errors;
pub mod execution;
pub mod hotkey;
pub mod runner;
pub mod session;

pub use config::{StudioConfig, DEFAULT_REPLY_DELAY};
pub use errors::{Result, WorkflowError};
pub use execution::{ExecutionWorkflow, OverlapPolicy, RunOutcome, MSG_ALREADY_RUNNING, MSG_STARTING, MSG_SUCCESS};
pub use hotkey::Hotkey;
pub use runner::{CodeRunner, RunReport, SimulatedRunner, DEFAULT_EXECUTION_DELAY};
pub use session::{HotkeyOutcome, StudioSession};
