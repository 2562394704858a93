//! Forgiving HTML table scanner
//!
//! The device pages are loosely structured, so this is not a validating
//! parser and no document tree is built. html5ever's tokenizer turns the
//! markup into start tags, end tags and decoded text. A small state machine
//! tracks only `table`, `tr`, `td` and `th` and accumulates cell text. Every
//! other tag is ignored.
//!
//! # Transition table
//!
//! | Event             | OutsideRow              | InRow                   | InCell                        |
//! |-------------------|-------------------------|-------------------------|-------------------------------|
//! | `<table>`         | reset grid              | reset grid              | reset grid                    |
//! | `<tr>`            | open row → InRow        | commit row, open row    | close cell, commit, open row  |
//! | `<td>` / `<th>`   | open cell → InCell      | open cell → InCell      | close cell, open cell         |
//! | `</td>` / `</th>` | ignored                 | ignored                 | close cell → InRow            |
//! | `</tr>`           | ignored                 | commit row → OutsideRow | close cell, commit row        |
//! | `</table>`        | ignored                 | commit row → OutsideRow | close cell, commit row        |
//! | text              | discarded               | discarded               | appended to cell              |
//!
//! A row still open at end of input is discarded. Only the last table in a
//! document survives, since every `<table>` resets the grid.

use crate::table::Grid;
use html5ever::tendril::StrTendril;
use html5ever::tokenizer::states::RawKind;
use html5ever::tokenizer::{
    BufferQueue, Tag, TagKind, Token, TokenSink, TokenSinkResult, Tokenizer, TokenizerOpts,
};

/// Parses an HTML document into a grid of trimmed cell text
///
/// Never fails: a document without table markup yields an empty grid.
///
/// # Arguments
///
/// * `html` - The raw page body
///
/// # Example
///
/// ```
/// use sagemcom_exporter::table::parse_table;
///
/// let grid = parse_table("<table><tr><th>Interface</th></tr><tr><td><b>eth0</b></td></tr></table>");
/// assert_eq!(grid.row_count(), 2);
/// assert_eq!(grid.cell(1, 0).unwrap(), "eth0");
/// ```
pub fn parse_table(html: &str) -> Grid {
    let mut queue = BufferQueue::new();
    queue.push_back(StrTendril::from(html));

    let mut tokenizer = Tokenizer::new(TableBuilder::default(), TokenizerOpts::default());
    let _ = tokenizer.feed(&mut queue);
    tokenizer.end();

    tokenizer.sink.finish()
}

/// Where the scanner currently is relative to rows and cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum ScanState {
    #[default]
    OutsideRow,
    InRow,
    InCell,
}

#[derive(Debug, Default)]
struct TableBuilder {
    state: ScanState,
    rows: Vec<Vec<String>>,
    row: Vec<String>,
    cell: String,
}

impl TokenSink for TableBuilder {
    type Handle = ();

    fn process_token(&mut self, token: Token, _line_number: u64) -> TokenSinkResult<()> {
        match token {
            Token::TagToken(tag) => return self.tag(&tag),
            Token::CharacterTokens(text) => self.text(&text),
            _ => {}
        }
        TokenSinkResult::Continue
    }
}

impl TableBuilder {
    fn tag(&mut self, tag: &Tag) -> TokenSinkResult<()> {
        let name: &str = &tag.name;
        match tag.kind {
            TagKind::StartTag => {
                self.start_tag(name);
                if tag.self_closing {
                    self.end_tag(name);
                    return TokenSinkResult::Continue;
                }
                // Without a tree builder the tokenizer must be told about raw text bodies
                match name {
                    "script" => TokenSinkResult::RawData(RawKind::ScriptData),
                    "style" => TokenSinkResult::RawData(RawKind::Rawtext),
                    _ => TokenSinkResult::Continue,
                }
            }
            TagKind::EndTag => {
                self.end_tag(name);
                TokenSinkResult::Continue
            }
        }
    }

    fn start_tag(&mut self, name: &str) {
        match name {
            "table" => self.reset(),
            "tr" => {
                self.commit_row();
                self.state = ScanState::InRow;
            }
            "td" | "th" => {
                self.close_cell();
                self.cell.clear();
                self.state = ScanState::InCell;
            }
            _ => {}
        }
    }

    fn end_tag(&mut self, name: &str) {
        match name {
            "tr" | "table" => self.commit_row(),
            "td" | "th" => self.close_cell(),
            _ => {}
        }
    }

    fn text(&mut self, text: &str) {
        if self.state == ScanState::InCell {
            self.cell.push_str(text);
        }
    }

    fn close_cell(&mut self) {
        if self.state == ScanState::InCell {
            self.row.push(self.cell.trim().to_string());
            self.cell.clear();
            self.state = ScanState::InRow;
        }
    }

    fn commit_row(&mut self) {
        self.close_cell();
        if self.state == ScanState::InRow {
            self.rows.push(std::mem::take(&mut self.row));
        }
        self.state = ScanState::OutsideRow;
    }

    fn reset(&mut self) {
        self.rows.clear();
        self.row.clear();
        self.cell.clear();
        self.state = ScanState::OutsideRow;
    }

    fn finish(self) -> Grid {
        Grid::new(self.rows)
    }
}
