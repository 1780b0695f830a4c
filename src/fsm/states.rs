//! Concrete state handler functions and descriptor lookup.
//!
//! Each state is defined by plain `fn` pointers: no closures, no dynamic
//! dispatch, no heap.
//!
//! ```text
//!              [dark]                 [dark held for daylight_to_dusk_ms]
//!  DAYLIGHT ───────────▶ DUSK_DELAY ─────────────────────────────────▶ DUSK
//!     ▲  ▲                   │                                         │  │
//!     │  └────[not dark]─────┘                                [bright] │  │
//!     │                                                                ▼  │
//!     └──[bright held for dusk_to_daylight_ms]── DAYLIGHT_DELAY ◀──────┘  │
//!                                                      │                  │
//!                                                      └──[not bright]────┘
//!
//!  INIT: beams off, no automatic exit.
//! ```

use super::context::{BeamCommands, FsmContext};
use super::{AutoState, StateDescriptor};
use log::{debug, info};

// ═══════════════════════════════════════════════════════════════════════════
//  Descriptor lookup
// ═══════════════════════════════════════════════════════════════════════════

static INIT: StateDescriptor = StateDescriptor {
    id: AutoState::Init,
    name: "Init",
    on_enter: None,
    on_update: init_update,
};

static DUSK: StateDescriptor = StateDescriptor {
    id: AutoState::Dusk,
    name: "Dusk",
    on_enter: Some(dusk_enter),
    on_update: dusk_update,
};

static DUSK_DELAY: StateDescriptor = StateDescriptor {
    id: AutoState::DuskDelay,
    name: "DuskDelay",
    on_enter: None,
    on_update: dusk_delay_update,
};

static DAYLIGHT_DELAY: StateDescriptor = StateDescriptor {
    id: AutoState::DaylightDelay,
    name: "DaylightDelay",
    on_enter: None,
    on_update: daylight_delay_update,
};

static DAYLIGHT: StateDescriptor = StateDescriptor {
    id: AutoState::Daylight,
    name: "Daylight",
    on_enter: Some(daylight_enter),
    on_update: daylight_update,
};

/// Descriptor for `state`.
pub fn descriptor(state: AutoState) -> &'static StateDescriptor {
    match state {
        AutoState::Init => &INIT,
        AutoState::Dusk => &DUSK,
        AutoState::DuskDelay => &DUSK_DELAY,
        AutoState::DaylightDelay => &DAYLIGHT_DELAY,
        AutoState::Daylight => &DAYLIGHT,
    }
}

// ═══════════════════════════════════════════════════════════════════════════
//  INIT state
// ═══════════════════════════════════════════════════════════════════════════

fn init_update(ctx: &mut FsmContext) -> Option<AutoState> {
    ctx.commands = BeamCommands::both(false);
    None
}

// ═══════════════════════════════════════════════════════════════════════════
//  DAYLIGHT state: beams off, watching for dusk
// ═══════════════════════════════════════════════════════════════════════════

fn daylight_enter(ctx: &mut FsmContext) {
    ctx.accumulated_ms = 0;
    ctx.commands = BeamCommands::both(false);
    info!("DAYLIGHT: low beams off");
}

fn daylight_update(ctx: &mut FsmContext) -> Option<AutoState> {
    ctx.commands = BeamCommands::both(false);

    if ctx.is_dark() {
        info!(
            "DAYLIGHT: light {:.2} < {:.2}, confirming dusk for {}ms",
            ctx.light_level, ctx.config.dusk_threshold, ctx.config.daylight_to_dusk_ms
        );
        return Some(AutoState::DuskDelay);
    }

    None
}

// ═══════════════════════════════════════════════════════════════════════════
//  DUSK state: beams on, watching for daylight
// ═══════════════════════════════════════════════════════════════════════════

fn dusk_enter(ctx: &mut FsmContext) {
    ctx.accumulated_ms = 0;
    ctx.commands = BeamCommands::both(true);
    info!("DUSK: low beams on");
}

fn dusk_update(ctx: &mut FsmContext) -> Option<AutoState> {
    ctx.commands = BeamCommands::both(true);

    if ctx.is_bright() {
        info!(
            "DUSK: light {:.2} > {:.2}, confirming daylight for {}ms",
            ctx.light_level, ctx.config.daylight_threshold, ctx.config.dusk_to_daylight_ms
        );
        return Some(AutoState::DaylightDelay);
    }

    None
}

// ═══════════════════════════════════════════════════════════════════════════
//  DUSK_DELAY state: it went dark; it must stay dark before beams go on
// ═══════════════════════════════════════════════════════════════════════════

fn dusk_delay_update(ctx: &mut FsmContext) -> Option<AutoState> {
    if !ctx.is_dark() {
        debug!("DUSK_DELAY: light recovered to {:.2}, abandoning", ctx.light_level);
        return Some(AutoState::Daylight);
    }

    if ctx.accumulated_ms >= ctx.config.daylight_to_dusk_ms {
        return Some(AutoState::Dusk);
    }

    ctx.accumulate_tick();
    None
}

// ═══════════════════════════════════════════════════════════════════════════
//  DAYLIGHT_DELAY state: it went bright; it must stay bright before beams go off
// ═══════════════════════════════════════════════════════════════════════════

fn daylight_delay_update(ctx: &mut FsmContext) -> Option<AutoState> {
    if !ctx.is_bright() {
        debug!("DAYLIGHT_DELAY: light dropped to {:.2}, abandoning", ctx.light_level);
        return Some(AutoState::Dusk);
    }

    if ctx.accumulated_ms >= ctx.config.dusk_to_daylight_ms {
        return Some(AutoState::Daylight);
    }

    ctx.accumulate_tick();
    None
}
