use crate::core::case::to_lower_bytes;
use crate::core::slots::SlotBuf;
use crate::core::{ConfigProvider, FoldReport, OutputFormat};
use crate::utils::error::Result;
use serde::Serialize;
use std::borrow::Cow;
use std::io::BufRead;

/// Folds batches of lines into a buffer that is reused between batches.
///
/// Lines are handled as raw bytes, so keys that are not valid UTF-8 are
/// folded like any other.
pub struct FoldEngine<C: ConfigProvider> {
    config: C,
    lines: SlotBuf<Vec<u8>>,
}

#[derive(Serialize)]
struct Rendered<'a> {
    report: &'a FoldReport,
    lines: Vec<Cow<'a, str>>,
}

/// 去掉行尾的 `\n` 或 `\r\n`，與 `BufRead::lines` 相同
fn strip_line_ending(buf: &[u8]) -> &[u8] {
    let buf = buf.strip_suffix(b"\n").unwrap_or(buf);
    buf.strip_suffix(b"\r").unwrap_or(buf)
}

impl<C: ConfigProvider> FoldEngine<C> {
    pub fn new(config: C) -> Self {
        Self {
            config,
            lines: SlotBuf::new(),
        }
    }

    /// Folded lines of the last batch.
    pub fn lines(&self) -> &[Vec<u8>] {
        self.lines.as_slice()
    }

    /// Folded lines as text; invalid UTF-8 is replaced with U+FFFD.
    pub fn text_lines(&self) -> Vec<Cow<'_, str>> {
        self.lines.iter().map(|l| String::from_utf8_lossy(l)).collect()
    }

    /// Runs one batch. On a read error the batch is discarded and
    /// [`lines`](Self::lines) comes back empty.
    pub fn run<R: BufRead>(&mut self, reader: R) -> Result<FoldReport> {
        tracing::debug!("Starting fold batch ({} retained slots)", self.lines.slots());

        self.lines.clear();
        let result = self.fold_lines(reader);
        if let Err(e) = &result {
            // 讀取失敗時不保留半成品
            self.lines.clear();
            tracing::error!("Fold batch aborted: {}", e);
        }
        let report = result?;

        tracing::info!(
            "Folded {} lines ({} changed, {} skipped)",
            report.total,
            report.changed,
            report.skipped
        );
        tracing::debug!(
            "Slot usage: {} reused, {} grown",
            report.reused_slots,
            report.grown_slots
        );

        Ok(report)
    }

    fn fold_lines<R: BufRead>(&mut self, mut reader: R) -> Result<FoldReport> {
        let trim = self.config.trim();
        let skip_empty = self.config.skip_empty();
        let mut report = FoldReport::default();
        let mut buf = Vec::new();
        let mut next = self.lines.next_elem();

        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            report.total += 1;

            let line = strip_line_ending(&buf);
            let input = if trim { line.trim_ascii() } else { line };
            if skip_empty && input.is_empty() {
                report.skipped += 1;
                continue;
            }

            let folded = to_lower_bytes(input);
            match &folded {
                Cow::Borrowed(_) => report.unchanged += 1,
                Cow::Owned(_) => report.changed += 1,
            }

            // 重用的 slot 仍保留上一批的內容
            let slot = next.next();
            slot.clear();
            slot.extend_from_slice(&folded);
        }

        report.reused_slots = next.reused();
        report.grown_slots = next.grown();
        Ok(report)
    }

    pub fn render(&self, report: &FoldReport, format: OutputFormat) -> Result<Vec<u8>> {
        match format {
            OutputFormat::Text => {
                let mut out = Vec::new();
                for line in self.lines() {
                    out.extend_from_slice(line);
                    out.push(b'\n');
                }
                Ok(out)
            }
            OutputFormat::Json => {
                let rendered = Rendered {
                    report,
                    lines: self.text_lines(),
                };
                Ok(serde_json::to_vec_pretty(&rendered)?)
            }
        }
    }
}
