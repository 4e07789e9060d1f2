use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize)]
pub struct RagQuery {
    pub question: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RagAnswer {
    pub answer: String,
}
