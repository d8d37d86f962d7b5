//! cosmos-sky — terminal client for the CosmosAI astronomy backend.
//!
//! Pure logic (cooldown gate, markdown renderer, upload validation, wire
//! types) lives here and is testable offline; the binary wires it to the
//! network and the terminal.

pub mod cli;
pub mod client;
pub mod cooldown;
pub mod events;
pub mod markdown;
pub mod toast;
pub mod validate;
pub mod view;

pub use client::{ClientError, CosmosClient, IssCoords, IssStatus};
pub use cooldown::{Clock, CooldownGate, SystemClock, COOLDOWN};
pub use toast::{toast, ToastKind};
