use crate::ModificationRecord;

use serde::{Deserialize, Serialize};

/// A modification record joined with the display info of its author
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModificationRecordView {
    #[serde(flatten)]
    pub record: ModificationRecord,

    pub user_name: Option<String>,
    pub user_email: Option<String>,
}
