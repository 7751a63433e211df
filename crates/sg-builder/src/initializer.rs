use std::fmt::{Debug, LowerExp};

use chrono::{DateTime, Days, FixedOffset, Months};
use sg_core::{FieldDescriptor, FieldKind, Locale, TemporalBound, BLANK_VALUE};

use crate::TemporalStyle;

pub const EMAIL_INITIALIZER: &str = "some@email.com";

/// Ambient inputs of value synthesis, passed explicitly so results stay reproducible.
#[derive(Debug, Clone, PartialEq)]
pub struct SynthesisContext {
    pub locale: Locale,
    pub now: DateTime<FixedOffset>,
}

impl SynthesisContext {
    pub fn new(locale: Locale, now: DateTime<FixedOffset>) -> Self {
        Self { locale, now }
    }
}

/// Derives the literal used to populate a field and later verify it.
pub fn synthesize(field: &FieldDescriptor, context: &SynthesisContext) -> String {
    if field.name.contains("email") || field.name.contains("Email") {
        return EMAIL_INITIALIZER.to_string();
    }

    let seed = field.seed();
    match field.kind {
        FieldKind::String => format!("some{}{}", capitalize(&field.name), seed),
        FieldKind::Temporal => {
            let instant = shift_instant(context.now, field.temporal_bound());
            TemporalStyle::parse(field.temporal_style()).format(&instant, &context.locale)
        }
        FieldKind::Boolean => false.to_string(),
        FieldKind::Integer | FieldKind::Long | FieldKind::Short => seed.to_string(),
        FieldKind::Double => canonical_float(seed as f64),
        FieldKind::Float => canonical_float(seed as f32),
        FieldKind::Decimal => seed.to_string(),
        FieldKind::Collection | FieldKind::EntityReference | FieldKind::Other => {
            BLANK_VALUE.to_string()
        }
    }
}

fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Year, then month, then day; each step clamps to the end of a shorter month.
fn shift_instant(
    now: DateTime<FixedOffset>,
    bound: Option<TemporalBound>,
) -> DateTime<FixedOffset> {
    let shifted = match bound {
        Some(TemporalBound::Past) => now
            .checked_sub_months(Months::new(12))
            .and_then(|instant| instant.checked_sub_months(Months::new(1)))
            .and_then(|instant| instant.checked_sub_days(Days::new(1))),
        Some(TemporalBound::Future) => now
            .checked_add_months(Months::new(12))
            .and_then(|instant| instant.checked_add_months(Months::new(1)))
            .and_then(|instant| instant.checked_add_days(Days::new(1))),
        None => None,
    };
    shifted.unwrap_or(now)
}

/// Plain notation with a mandatory fraction digit, scientific from 10^7 upward.
/// Digits are the shortest text of `value` at its own width.
fn canonical_float<F>(value: F) -> String
where
    F: Copy + Debug + LowerExp + Into<f64>,
{
    let magnitude = value.into().abs();
    if magnitude == 0.0 || (1e-3..1e7).contains(&magnitude) {
        return format!("{:?}", value);
    }

    let scientific = format!("{:e}", value);
    let (mantissa, exponent) = scientific
        .split_once('e')
        .unwrap_or((scientific.as_str(), "0"));
    if mantissa.contains('.') {
        format!("{}E{}", mantissa, exponent)
    } else {
        format!("{}.0E{}", mantissa, exponent)
    }
}
