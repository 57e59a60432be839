//! Status types for the GXP remote control interface.
//!
//! Every session operation reports its outcome on two independent layers:
//! the transport layer (did the control-channel call itself go through) and
//! the application layer (did the workstation accept the operation). This
//! crate contains the serde-serializable types for both layers.
//!
//! Types in this crate are pure data: no behavior beyond accessors and
//! serialization. Validation and diagnostics live in `gxp`.

pub mod status;

pub use status::*;
