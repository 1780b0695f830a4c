//! Function-pointer finite state machine engine for automatic headlights.
//!
//! Classic embedded FSM pattern ported to Rust:
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────────┐
//! │  State descriptors                                            │
//! │  ┌────────────────┬───────────┬───────────────────────────┐   │
//! │  │ AutoState      │ on_enter  │ on_update                 │   │
//! │  ├────────────────┼───────────┼───────────────────────────┤   │
//! │  │ Init           │ none      │ fn(ctx)->Option<>         │   │
//! │  │ Dusk           │ fn(ctx)   │ fn(ctx)->Option<>         │   │
//! │  │ DuskDelay      │ none      │ fn(ctx)->Option<>         │   │
//! │  │ DaylightDelay  │ none      │ fn(ctx)->Option<>         │   │
//! │  │ Daylight       │ fn(ctx)   │ fn(ctx)->Option<>         │   │
//! │  └────────────────┴───────────┴───────────────────────────┘   │
//! └───────────────────────────────────────────────────────────────┘
//! ```
//!
//! Each tick the engine calls `on_update` for the **current** state.
//! If it returns `Some(next)`, the engine updates the current state and runs
//! `on_enter` for the next one.  Descriptors are looked up with an
//! exhaustive `match` on [`AutoState`], so there is no table index that can
//! fall out of range.

pub mod context;
pub mod states;

use context::FsmContext;
use log::info;
use serde::Serialize;

// ---------------------------------------------------------------------------
// State identity
// ---------------------------------------------------------------------------

/// Automatic-mode headlight states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum AutoState {
    /// Power-on state.  Beams off; only left through the manual pre-arm.
    Init,
    /// Dark outside, beams on.
    Dusk,
    /// Went dark while in daylight; waiting for it to stay dark.
    DuskDelay,
    /// Went bright while at dusk; waiting for it to stay bright.
    DaylightDelay,
    /// Bright outside, beams off.
    Daylight,
}

impl AutoState {
    /// Every state, in declaration order.
    pub const ALL: [Self; 5] = [
        Self::Init,
        Self::Dusk,
        Self::DuskDelay,
        Self::DaylightDelay,
        Self::Daylight,
    ];

    /// Whether this is one of the two debounce holding states.
    pub const fn is_delay(self) -> bool {
        matches!(self, Self::DuskDelay | Self::DaylightDelay)
    }
}

// ---------------------------------------------------------------------------
// Function-pointer type aliases
// ---------------------------------------------------------------------------

/// Signature for `on_enter` actions.  Runs exactly once per transition.
pub type StateActionFn = fn(&mut FsmContext);

/// Signature for the per-tick update handler.
/// Returns `Some(next)` to trigger a transition, or `None` to stay.
pub type StateUpdateFn = fn(&mut FsmContext) -> Option<AutoState>;

// ---------------------------------------------------------------------------
// State descriptor
// ---------------------------------------------------------------------------

/// Static descriptor for a single FSM state.
pub struct StateDescriptor {
    pub id: AutoState,
    pub name: &'static str,
    pub on_enter: Option<StateActionFn>,
    pub on_update: StateUpdateFn,
}

// ---------------------------------------------------------------------------
// FSM engine
// ---------------------------------------------------------------------------

/// The finite state machine engine.
pub struct Fsm {
    current: AutoState,
    /// Monotonically increasing tick counter.
    tick_count: u64,
    /// Tick at which the current state was entered.
    state_entry_tick: u64,
}

impl Fsm {
    /// Construct a new FSM starting in `initial`.
    pub fn new(initial: AutoState) -> Self {
        Self {
            current: initial,
            tick_count: 0,
            state_entry_tick: 0,
        }
    }

    /// Run the initial `on_enter` for the starting state.
    /// Call once after construction, before the first `tick()`.
    pub fn start(&mut self, ctx: &mut FsmContext) {
        let desc = states::descriptor(self.current);
        info!("FSM starting in state: {}", desc.name);
        if let Some(enter) = desc.on_enter {
            enter(ctx);
        }
    }

    /// Advance the FSM by one tick.
    ///
    /// 1. Call `on_update` for the current state.
    /// 2. If it returns `Some(next)`, transition: update pointer → `on_enter(next)`.
    pub fn tick(&mut self, ctx: &mut FsmContext) {
        self.tick_count += 1;

        let next = (states::descriptor(self.current).on_update)(ctx);

        if let Some(next_id) = next {
            self.transition(next_id, ctx);
        }
    }

    /// Force an immediate transition (used by the manual selector positions
    /// to pre-arm the automatic machine).  No-op if already in `next`.
    pub fn force_transition(&mut self, next: AutoState, ctx: &mut FsmContext) {
        if next != self.current {
            self.transition(next, ctx);
        }
    }

    /// The current state's identity.
    pub fn current_state(&self) -> AutoState {
        self.current
    }

    /// How many automatic ticks the FSM has run in the current state.
    pub fn ticks_in_current_state(&self) -> u64 {
        self.tick_count - self.state_entry_tick
    }

    fn transition(&mut self, next_id: AutoState, ctx: &mut FsmContext) {
        let next = states::descriptor(next_id);

        info!(
            "FSM transition: {} -> {}",
            states::descriptor(self.current).name,
            next.name
        );

        self.current = next_id;
        self.state_entry_tick = self.tick_count;

        if let Some(enter) = next.on_enter {
            enter(ctx);
        }
    }
}
