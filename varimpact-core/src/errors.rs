use thiserror::Error;

#[derive(Error, Debug)]
pub enum VarimpactError {
    #[error("Can't read input file: {0}")]
    InputRead(String),

    #[error("Input file is missing required column: {0}")]
    MissingColumn(String),

    #[error("Can't parse variant row: {0}")]
    RowParse(String),

    #[error("Can't write report: {0}")]
    ReportWrite(String),
}
