use crate::{FieldDelta, FieldDeltaBuilder, FieldMap, FieldValue, NormalizedPayload};

/// Compute the per-field deltas between a stored snapshot and a normalized
/// candidate payload.
///
/// Only fields present in the candidate are compared, in candidate order;
/// fields listed in `excluded` are skipped. A field missing from the snapshot
/// compares as `Null`.
pub fn detect_changes(
    current: &FieldMap,
    candidate: &NormalizedPayload,
    excluded: &[&str],
) -> Vec<FieldDelta> {
    let mut builder = FieldDeltaBuilder::new();

    for (field, new_value) in candidate.iter() {
        if excluded.contains(&field) {
            continue;
        }

        let old_value = current.get(field).unwrap_or(&FieldValue::Null);
        builder.track(field, old_value, new_value);
    }

    builder.build()
}
