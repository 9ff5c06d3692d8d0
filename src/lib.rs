pub mod error;
pub mod config;
pub mod providers;
pub mod request;
pub mod prompt;
pub mod client;
pub mod server;

/*

partyplan relays one party planning request to an LLM and hands back
the JSON plan it writes.

partyplan/
├── Cargo.toml
├── src/
│   ├── lib.rs          # Module list and re-exports
│   ├── main.rs         # Binary: logging, config, listen
│   ├── error.rs        # Error type and status mapping
│   ├── config.rs       # PlannerConfig from the environment
│   ├── request.rs      # Inbound request, plan and error envelope types
│   ├── prompt.rs       # System/user prompt templating and defaults
│   ├── client.rs       # PartyPlanner: prompt -> upstream -> parsed plan
│   ├── server.rs       # axum router and handler
│   └── providers/
│       ├── mod.rs
│       └── openrouter.rs
└── tests/              # Router tests against a fake upstream

*/

pub use client::PartyPlanner;
pub use config::PlannerConfig;
pub use error::Error;
pub use request::{ErrorResponse, PartyPlan, PlanRequest, TimelineEntry};
