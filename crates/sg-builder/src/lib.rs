mod commands;
mod date_format;
mod initializer;

pub use commands::{
    build_steps, build_steps_with_embedded_id, convert_id, open_target, type_target,
    verify_target, SUBMIT_LOCATOR,
};
pub use date_format::{FormatLength, TemporalStyle};
pub use initializer::{synthesize, SynthesisContext};
