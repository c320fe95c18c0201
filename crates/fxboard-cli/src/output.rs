//! Result printing: TSV for people and pipes, JSON on request

use std::io::Write;

use color_eyre::Result;
use fxboard_api::{Currency, PageResponse};
use serde::Serialize;

/// Write `value` as pretty JSON followed by a newline
pub fn write_json<W: Write, T: Serialize + ?Sized>(writer: &mut W, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut *writer, value)?;
    writeln!(writer)?;
    Ok(())
}

/// One TSV line per currency: code, name, symbol, rate, updated
pub fn write_currencies<W: Write>(writer: &mut W, currencies: &[Currency]) -> Result<()> {
    for currency in currencies {
        writeln!(
            writer,
            "{}\t{}\t{}\t{}\t{}",
            currency.code,
            currency.name,
            currency.symbol,
            currency.exchange_rate,
            currency.updated_at.format("%Y-%m-%dT%H:%M:%S")
        )?;
    }
    Ok(())
}

/// Currencies of one page plus a summary line
pub fn write_page<W: Write>(writer: &mut W, page: &PageResponse<Currency>) -> Result<()> {
    write_currencies(writer, &page.content)?;
    let meta = &page.meta;
    writeln!(
        writer,
        "# page {} of {}, {} of {} currencies",
        meta.page + 1,
        meta.total_pages.max(1),
        meta.number_of_elements,
        meta.total_elements
    )?;
    Ok(())
}
