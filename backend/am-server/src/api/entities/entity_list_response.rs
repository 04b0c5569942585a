use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct EntityListResponse<T> {
    pub entities: Vec<T>,
}
