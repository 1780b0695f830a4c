//! Adapters: concrete implementations of the hexagonal port traits.
//!
//! | Adapter    | Implements   | Connects to                    |
//! |------------|--------------|--------------------------------|
//! | `hardware` | SensorPort   | seat/ignition GPIO, ADC1       |
//! |            | ActuatorPort | indicator LED, low-beam relays |
//! | `log_sink` | EventSink    | Serial log output              |

pub mod hardware;
pub mod log_sink;
