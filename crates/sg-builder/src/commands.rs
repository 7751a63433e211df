use sg_core::{Command, FieldDescriptor, Locale, TestStep};

use crate::{synthesize, SynthesisContext};

pub const SUBMIT_LOCATOR: &str = "//input[@id = 'proceed']";

/// Builds the populate, submit and verify script for one form.
///
/// Emits `OPEN`, one `TYPE` per eligible field, `CLICK_AND_WAIT`, then one
/// `VERIFY_TEXT` per eligible field in the same order.
pub fn build_steps(
    navigation_target: &str,
    entity_type_name: &str,
    fields: &[FieldDescriptor],
    context: &SynthesisContext,
) -> Vec<TestStep> {
    build_steps_with_embedded_id(navigation_target, entity_type_name, &[], fields, context)
}

/// Like [`build_steps`], but first types the parts of a composite identifier.
/// Identifier parts are addressed as `name.name` and are never verified.
pub fn build_steps_with_embedded_id(
    navigation_target: &str,
    entity_type_name: &str,
    embedded_id_fields: &[FieldDescriptor],
    fields: &[FieldDescriptor],
    context: &SynthesisContext,
) -> Vec<TestStep> {
    let eligible = fields
        .iter()
        .filter(|field| field.is_eligible())
        .collect::<Vec<_>>();

    let mut steps = Vec::with_capacity(2 + embedded_id_fields.len() + 2 * eligible.len());
    steps.push(TestStep::without_value(
        Command::Open,
        open_target(navigation_target, &context.locale),
    ));

    for field in embedded_id_fields.iter().filter(|field| field.is_eligible()) {
        let nested = FieldDescriptor {
            name: format!("{0}.{0}", field.name),
            ..field.clone()
        };
        steps.push(type_step(&nested, context));
    }

    for field in &eligible {
        steps.push(type_step(field, context));
    }

    steps.push(TestStep::without_value(Command::ClickAndWait, SUBMIT_LOCATOR));

    for field in &eligible {
        steps.push(TestStep::new(
            Command::VerifyText,
            verify_target(entity_type_name, &field.name),
            synthesize(field, context),
        ));
    }

    steps
}

fn type_step(field: &FieldDescriptor, context: &SynthesisContext) -> TestStep {
    TestStep::new(
        Command::Type,
        type_target(&field.name),
        synthesize(field, context),
    )
}

pub fn open_target(navigation_target: &str, locale: &Locale) -> String {
    let separator = if navigation_target.contains('?') { '&' } else { '?' };
    format!("{}{}lang={}", navigation_target, separator, locale)
}

pub fn type_target(field_name: &str) -> String {
    convert_id(&format!("_{}_id", field_name))
}

pub fn verify_target(entity_type_name: &str, field_name: &str) -> String {
    convert_id(&format!(
        "_s_{}_{}_{}_id",
        entity_type_name, field_name, field_name
    ))
}

/// Rewrites `:`, `.` and `-` to `_`, matching the ids the scaffolded pages render.
pub fn convert_id(proposed: &str) -> String {
    proposed.replace([':', '.', '-'], "_")
}
