pub mod analyzer;
pub mod corpus;
pub mod count;
pub mod evaluate;
pub mod term;
pub mod tfidf;

pub use analyzer::Analyzer;
pub use count::CountVectorizer;
pub use tfidf::{DefaultTFIDFEngine, TFIDFEngine, TFIDFVectorizer};
