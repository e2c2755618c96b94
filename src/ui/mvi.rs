//! Model-View-Intent primitives shared by the UI features.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! Reducers never perform I/O. Anything that has to reach the network is
//! returned to the caller as an effect and executed outside the reducer.

/// Marker trait for state values owned by a feature.
///
/// States are replaced, never edited in place, so they must be cheap to move
/// and comparable for change detection.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}

/// Marker trait for user actions and system events fed to a reducer.
pub trait Intent: Send + 'static {}

/// Pure `(State, Intent) -> State` transition.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
