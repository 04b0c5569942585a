use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct EntityResponse<T> {
    pub entity: T,
}
