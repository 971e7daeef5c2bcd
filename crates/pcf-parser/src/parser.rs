//! Line-by-line PCF scanner

use std::fs;
use std::path::Path;

use crate::config::ParserConfig;
use crate::constraint::{PcfClkConstraint, PcfConstraint, PcfIoConstraint};
use crate::errors::{PcfError, PcfResult};

/// Parser for the PCF physical constraints format
///
/// The parser itself performs no I/O beyond the `parse_file` convenience;
/// `parse_lines` and `parse_str` consume lines the caller already holds and
/// yield constraints lazily, one per meaningful line.
pub struct PcfParser {
    config: ParserConfig,
}

impl PcfParser {
    pub fn new() -> Self {
        Self {
            config: ParserConfig::default(),
        }
    }

    pub fn with_config(config: ParserConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Scan an ordered sequence of text lines
    ///
    /// Returns a lazy iterator of `PcfResult<PcfConstraint>`. Records come
    /// out in input order; blank lines, comment-only lines and unrecognized
    /// commands (unless `strict`) produce nothing. The first malformed line
    /// yields an `Err` and ends the scan: subsequent `next()` calls return
    /// `None`.
    pub fn parse_lines<I>(&self, lines: I) -> PcfLines<I::IntoIter>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        PcfLines {
            lines: lines.into_iter(),
            line_num: 0,
            strict: self.config.strict,
            done: false,
        }
    }

    /// Scan in-memory PCF source
    pub fn parse_str<'a>(&self, source: &'a str) -> PcfLines<std::str::Lines<'a>> {
        self.parse_lines(source.lines())
    }

    /// Read and scan a PCF file, materializing the result
    ///
    /// Convenience over `parse_str`: the whole file is read up front and the
    /// scan drained, so the first malformed line fails the call even when
    /// well-formed constraints precede it.
    pub fn parse_file(&self, path: &Path) -> PcfResult<Vec<PcfConstraint>> {
        let source =
            fs::read_to_string(path).map_err(|e| PcfError::Io(path.to_path_buf(), e))?;

        if source.len() > self.config.max_file_size {
            return Err(PcfError::FileTooLarge(path.to_path_buf(), source.len()));
        }

        let constraints: Vec<PcfConstraint> = self.parse_str(&source).collect::<PcfResult<_>>()?;
        log::debug!(
            "parsed {} constraints from {}",
            constraints.len(),
            path.display()
        );
        Ok(constraints)
    }

    /// Check if this parser can handle the given file
    pub fn can_parse(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.eq_ignore_ascii_case("pcf"))
            .unwrap_or(false)
    }
}

impl Default for PcfParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Lazy iterator over the constraints of a line sequence
///
/// Created by `PcfParser::parse_lines` / `parse_str`. Holds no state beyond
/// the running line number; each line is classified independently.
pub struct PcfLines<I> {
    lines: I,
    line_num: usize,
    strict: bool,
    done: bool,
}

impl<I> Iterator for PcfLines<I>
where
    I: Iterator,
    I::Item: AsRef<str>,
{
    type Item = PcfResult<PcfConstraint>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        loop {
            let line = self.lines.next()?;
            self.line_num += 1;

            match scan_line(line.as_ref(), self.line_num, self.strict) {
                Ok(Some(constraint)) => return Some(Ok(constraint)),
                Ok(None) => continue,
                Err(e) => {
                    self.done = true;
                    return Some(Err(e));
                }
            }
        }
    }
}

/// Classify one line. `Ok(None)` means the line produces no record.
fn scan_line(raw: &str, line_num: usize, strict: bool) -> PcfResult<Option<PcfConstraint>> {
    let trimmed = raw.trim();

    // Comments run from the first `#` to end of line; no escape form.
    let code = match trimmed.find('#') {
        Some(pos) => &trimmed[..pos],
        None => trimmed,
    };

    let tokens: Vec<&str> = code.split_whitespace().collect();
    if tokens.is_empty() {
        return Ok(None);
    }

    // Option flags are not interpreted and may sit anywhere among the tokens.
    // A line of nothing but flags is malformed, not blank: the empty check
    // above runs before this filter.
    let args: Vec<&str> = tokens.into_iter().filter(|t| !t.starts_with('-')).collect();

    if args.len() != 3 {
        return Err(PcfError::MalformedLine(line_num, trimmed.to_string()));
    }

    match args[0] {
        "set_io" => Ok(Some(PcfConstraint::Io(PcfIoConstraint {
            net: args[1].to_string(),
            pad: args[2].to_string(),
            line_str: trimmed.to_string(),
            line_num,
        }))),
        "set_clk" => Ok(Some(PcfConstraint::Clk(PcfClkConstraint {
            pin: args[1].to_string(),
            net: args[2].to_string(),
        }))),
        unknown => {
            if strict {
                Err(PcfError::UnknownCommand(line_num, unknown.to_string()))
            } else {
                log::debug!("ignoring unknown command {:?} at line {}", unknown, line_num);
                Ok(None)
            }
        }
    }
}
