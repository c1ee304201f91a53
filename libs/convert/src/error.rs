use lens_api::ConvertedType;

#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error("parquet {0} not supported")]
    NotSupported(ConvertedType),

    #[error("json parse at row {row}: {source}")]
    Parse {
        row: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("decimal factor 10^{exponent} is fractional, cannot scale a big integer")]
    FractionalBigIntFactor { exponent: i32 },

    #[error("decimal {value} overflows when scaled by 10^{exponent}")]
    DecimalOverflow { value: i128, exponent: i32 },
}
