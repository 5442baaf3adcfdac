use anyhow::Context;
use chrono::{DateTime, Utc};
use forma_config::FormaConfig;
use forma_core::enums::RecordKind;
use forma_core::references::Catalog;
use forma_core::responses::{ValidateResponse, ValidationOutcome};
use forma_schema::RecordValidator;
use serde_json::Value;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ValidateArgs;
use crate::commands::catalog;
use crate::input;
use crate::output::output_view;

/// Handle `forma validate`.
///
/// `--catalog` overrides `validation.catalog_path`; `--fail-fast` or
/// `validation.fail_fast` stops at the first invalid input.
pub fn handle(args: &ValidateArgs, config: &FormaConfig, flags: &GlobalFlags) -> anyhow::Result<bool> {
    let kind: RecordKind = args.kind.parse()?;
    let validator = RecordValidator::new().context("failed to build record validator")?;

    let catalog = args
        .catalog
        .clone()
        .or_else(|| config.validation.catalog())
        .map(|path| catalog::load(&path))
        .transpose()?;

    let inputs = input::read_inputs(args.input.as_deref())?;
    let fail_fast = args.fail_fast || config.validation.fail_fast;

    let response = validate_batch(
        &validator,
        kind,
        &inputs,
        Utc::now(),
        catalog.as_ref(),
        fail_fast,
    );

    tracing::info!(
        %kind,
        total = response.total,
        invalid = response.invalid,
        references_checked = response.references_checked,
        "validated batch"
    );

    let all_valid = response.all_valid();
    if !(flags.quiet && all_valid) {
        output_view(&response, flags.format)?;
    }
    Ok(all_valid)
}

/// Validate every input in order. With `fail_fast`, stop after the first
/// invalid one.
pub fn validate_batch(
    validator: &RecordValidator,
    kind: RecordKind,
    inputs: &[Value],
    now: DateTime<Utc>,
    catalog: Option<&Catalog>,
    fail_fast: bool,
) -> ValidateResponse {
    let mut results = Vec::with_capacity(inputs.len());
    for (index, input) in inputs.iter().enumerate() {
        let result = match catalog {
            Some(catalog) => validator.validate_with_lookup(kind, input, now, catalog),
            None => validator.validate(kind, input, now),
        };
        let outcome = match result {
            Ok(record) => ValidationOutcome::Valid { index, record },
            Err(err) => ValidationOutcome::Invalid {
                index,
                violations: err.into_violations(),
            },
        };
        let stop = fail_fast && !outcome.is_valid();
        results.push(outcome);
        if stop {
            tracing::debug!(index, "stopping at first invalid input");
            break;
        }
    }
    ValidateResponse::new(kind, catalog.is_some(), results)
}
