pub mod decode;
pub mod error;
pub mod schema;
pub mod table;

pub use decode::{
    CATEGORICAL_FIELDS, DecodeTable, EDUCATION, INFANT_AGE_CATEGORY, INFANT_SEX,
    INFANT_SLEEPING_METHOD, MARITAL_STATUS, PREGNANCY_TYPE,
};
pub use error::{Result, TableError};
pub use table::{CellValue, Table, format_numeric};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_value_serializes() {
        let json = serde_json::to_string(&CellValue::Number(7.5)).expect("serialize cell");
        let round: CellValue = serde_json::from_str(&json).expect("deserialize cell");
        assert_eq!(round, CellValue::Number(7.5));

        let json = serde_json::to_string(&CellValue::Missing).expect("serialize missing");
        let round: CellValue = serde_json::from_str(&json).expect("deserialize missing");
        assert!(round.is_missing());
    }
}
