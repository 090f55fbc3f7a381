use std::io::Cursor;
use std::time::Duration;

use async_trait::async_trait;
use calamine::{Data, Reader, open_workbook_auto_from_rs};

use crate::application::ports::{DocumentExtractor, ExtractionError};
use crate::domain::{Extraction, UploadedFile};

use super::blocking_task::run_blocking;
use super::table_formatter::TextTable;

/// Reads the first worksheet of an xls/xlsx workbook.
pub struct SpreadsheetAdapter {
    timeout: Duration,
}

impl SpreadsheetAdapter {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    pub fn read_table(data: &[u8]) -> Result<TextTable, ExtractionError> {
        let mut workbook = open_workbook_auto_from_rs(Cursor::new(data))
            .map_err(|e| ExtractionError::Table(format!("failed to open workbook: {e}")))?;

        let range = workbook
            .worksheet_range_at(0)
            .ok_or_else(|| ExtractionError::Table("workbook has no worksheets".to_string()))?
            .map_err(|e| ExtractionError::Table(format!("failed to read worksheet: {e}")))?;

        let mut rows = range.rows().map(|row| row.iter().map(cell_text).collect::<Vec<_>>());
        let headers = rows.next().unwrap_or_default();

        Ok(TextTable::new(headers, rows.collect()))
    }
}

fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        other => other.to_string(),
    }
}

#[async_trait]
impl DocumentExtractor for SpreadsheetAdapter {
    #[tracing::instrument(skip(self, file, _page_range), fields(filename = %file.filename))]
    async fn extract(
        &self,
        file: &UploadedFile,
        _page_range: Option<&str>,
    ) -> Result<Extraction, ExtractionError> {
        let data = file.data.clone();
        let table = run_blocking(self.timeout, move || Self::read_table(&data)).await?;

        tracing::info!(rows = table.rows().len(), columns = table.headers().len(), "Spreadsheet loaded");
        Ok(Extraction::text_only(table.render()))
    }
}

/// Comma-separated values with a header row.
pub struct CsvAdapter {
    timeout: Duration,
}

impl CsvAdapter {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    pub fn read_table(data: &[u8]) -> Result<TextTable, ExtractionError> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(data);

        let headers = reader
            .headers()
            .map_err(|e| ExtractionError::Table(format!("failed to read csv header: {e}")))?
            .iter()
            .map(str::to_string)
            .collect();

        let rows = reader
            .records()
            .map(|record| {
                record
                    .map(|r| r.iter().map(str::to_string).collect::<Vec<_>>())
                    .map_err(|e| ExtractionError::Table(format!("failed to read csv row: {e}")))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(TextTable::new(headers, rows))
    }
}

#[async_trait]
impl DocumentExtractor for CsvAdapter {
    #[tracing::instrument(skip(self, file, _page_range), fields(filename = %file.filename))]
    async fn extract(
        &self,
        file: &UploadedFile,
        _page_range: Option<&str>,
    ) -> Result<Extraction, ExtractionError> {
        let data = file.data.clone();
        let table = run_blocking(self.timeout, move || Self::read_table(&data)).await?;

        tracing::info!(rows = table.rows().len(), columns = table.headers().len(), "CSV loaded");
        Ok(Extraction::text_only(table.render()))
    }
}
