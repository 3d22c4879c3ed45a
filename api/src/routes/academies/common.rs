use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct AcademyRequest {
    pub name: String,
}
