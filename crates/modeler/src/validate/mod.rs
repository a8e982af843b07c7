//! The validator combination policy.
//!
//! Validators do not combine as a plain conjunction, and this module exists
//! so that the exact semantics live in one named, tested function instead
//! of being re-derived wherever validators are scanned:
//!
//! 1. The first validator is the base type check. If it fails, the scan is
//!    `false` immediately and nothing else runs — later validators assume
//!    the base type already holds and may misbehave on mistyped input.
//! 2. Every remaining validator runs in order, but only the verdict of the
//!    **last** one evaluated is returned. Earlier non-base validators
//!    matter only when they happen to be last.
//!
//! This is long-standing inherited behavior, kept deliberately. Model-level
//! validation mirrors the same scan across fields (see
//! [`Model::validate`](crate::model::Model::validate)).

use crate::model::{Validator, Value};

/// Scans validators against a value under the documented policy: failing
/// base check short-circuits to `false`, otherwise the last validator's
/// verdict wins. An empty validator list accepts everything.
pub fn scan_validators(validators: &[Validator], value: &Value) -> bool {
    let Some((base, rest)) = validators.split_first() else {
        return true;
    };

    if !base(value) {
        return false;
    }

    let mut valid = true;
    for validator in rest {
        valid = validator(value);
    }
    valid
}
