//! # Wallet Setup - Library Root
//!
//! The create-wallet workflow of a JoinMarket-style wallet frontend: collect a
//! wallet name and password, ask the wallet service to create the wallet, walk
//! the user through backing up the seed phrase, then hand the wallet to the
//! host for funding.
//!
//! This library crate contains all modules used by the binary crate (`main.rs`).
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │              wallet-setup (this crate)                 │
//! ├────────────────────────────────────────────────────────┤
//! │  Tokio          - Async runtime                        │
//! │  Reqwest        - HTTP client                          │
//! │  async-channel  - Task results back to the owner       │
//! │  tracing        - Structured logging                   │
//! └────────────────────────────────────────────────────────┘
//!          │
//!          │ HTTP
//!          ▼
//! ┌─────────────────────────┐
//! │  Wallet service API     │
//! │  (/api/v1/...)          │
//! └─────────────────────────┘
//! ```
//!
//! ## Module Structure
//!
//! - **app**: Workflow state, transitions and the orchestrator
//!   - `Editing → Submitting → Created → Confirming → Ready → Done`
//!   - Async create-wallet task with a single in-flight guard
//!
//! - **core**: Error type and service traits
//!
//! - **services**: Wallet service HTTP client
//!
//! - **ui**: Rendering-free view model and text lookup keys
//!
//! - **debug**: Logging setup and debug feature flags
//!
//! - **utils**: Form validation
//!
//! ### Module Dependency Graph
//!
//! ```text
//! main.rs
//!   │
//!   ├── app (state, machine, events, tasks)
//!   │   ├── core::service (WalletApi, WalletStarter)
//!   │   └── utils::validation (form rules)
//!   │
//!   ├── services::api (ApiClient implements WalletApi)
//!   │
//!   └── ui (view model)
//! ```
//!
//! ## Event-Driven Workflow
//!
//! User actions and async results are both transitions of a pure state
//! machine. Remote calls run as Tokio tasks and report back through an async
//! channel:
//!
//! ```rust,ignore
//! // Spawn async task
//! tokio::spawn(async move {
//!     let result = api.create_wallet(&name, &password).await;
//!     event_tx.send(FlowEvent::WalletCreated(request_id, result)).await;
//! });
//!
//! // Owner processes results
//! while let Ok(event) = event_rx.try_recv() {
//!     app.handle_event(event);
//! }
//! ```

pub mod app;
pub mod config;
pub mod core;
pub mod debug;
pub mod services;
pub mod ui;
pub mod utils;

pub use app::CreateWalletApp;
pub use config::WalletSetupConfig;
pub use core::{AppError, Result, WalletApi, WalletStarter};
pub use services::api::ApiClient;
