//! Word and letter-value lookups shared read-only by every placement run

mod dictionary;
mod letter_values;

pub use dictionary::Dictionary;
pub use letter_values::LetterValues;
