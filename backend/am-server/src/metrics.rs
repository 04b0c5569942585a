use am_core::EntityType;

use metrics::counter;

/// Metrics collector for audited entity operations
#[derive(Clone)]
pub struct AuditMetrics {
    prefix: &'static str,
}

impl AuditMetrics {
    pub fn new() -> Self {
        Self { prefix: "am_audit" }
    }

    /// Record an update that was committed together with its log batch
    pub fn update_applied(&self, entity_type: EntityType, fields_logged: usize) {
        counter!(format!("{}.updates", self.prefix)).increment(1);
        counter!(format!("{}.updates.{}", self.prefix, entity_type)).increment(1);
        counter!(format!("{}.fields_logged", self.prefix)).increment(fields_logged as u64);
    }

    /// Record an update rolled back because its log batch failed
    pub fn audit_write_failed(&self, entity_type: EntityType) {
        counter!(format!("{}.errors.audit_write", self.prefix)).increment(1);
        counter!(format!("{}.errors.audit_write.{}", self.prefix, entity_type)).increment(1);
    }

    pub fn conflict(&self, entity_type: EntityType) {
        counter!(format!("{}.conflicts.{}", self.prefix, entity_type)).increment(1);
    }

    pub fn history_reset(&self, entity_type: EntityType, deleted: u64) {
        counter!(format!("{}.history.resets.{}", self.prefix, entity_type)).increment(1);
        counter!(format!("{}.history.deleted", self.prefix)).increment(deleted);
    }
}

impl Default for AuditMetrics {
    fn default() -> Self {
        Self::new()
    }
}
