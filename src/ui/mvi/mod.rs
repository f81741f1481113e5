//! Model-View-Intent (MVI) primitives.
//!
//! Every piece of screen state (the navigation back-stack, the list cursor)
//! changes only by feeding an intent through a pure reducer.
//!
//! ```text
//! Key ──→ Intent ──→ Reducer ──→ State ──→ Screen
//!  ↑                                         │
//!  └─────────────────────────────────────────┘
//! ```

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
