//! Collection, query-file and relevance-file parsing
//!
//! Raw corpora arrive as a single stream of records separated by marker
//! lines: `.I <id>` starts a record, `.T` a title section, `.W` the
//! content section, `.A`/`.B` sections that are skipped. Document names
//! are `<id>.txt`.

use std::io::BufRead;

use tracing::warn;

use crate::error::Result;

const ID_MARKER: &str = ".I";
const TITLE_MARKER: &str = ".T";
const AUTHOR_MARKER: &str = ".A";
const BIBLIO_MARKER: &str = ".B";
const CONTENT_MARKER: &str = ".W";

/// One document split out of a collection file
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DocumentRecord {
    pub name: String,
    pub lines: Vec<String>,
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Section {
    Content,
    Skipped,
}

/// Split a raw collection stream into per-document records
pub fn parse_collection<R: BufRead>(reader: R) -> Result<Vec<DocumentRecord>> {
    let mut records: Vec<DocumentRecord> = Vec::new();
    let mut section = Section::Content;

    for line in reader.lines() {
        let line = line?;
        let line = line.trim();

        if let Some(id) = line.strip_prefix(ID_MARKER) {
            let name = format!("{}.txt", id.trim());
            records.push(DocumentRecord {
                name,
                lines: Vec::new(),
            });
            section = Section::Content;
            continue;
        }
        if line.starts_with(TITLE_MARKER) || line.starts_with(CONTENT_MARKER) {
            section = Section::Content;
            continue;
        }
        if line.starts_with(AUTHOR_MARKER) || line.starts_with(BIBLIO_MARKER) {
            section = Section::Skipped;
            continue;
        }
        if section == Section::Skipped {
            continue;
        }

        if let Some(record) = records.last_mut() {
            record.lines.push(line.to_string());
        }
    }

    Ok(records)
}

/// Extract one query string per `.I` record of a query file
pub fn parse_queries<R: BufRead>(reader: R) -> Result<Vec<String>> {
    let mut queries: Vec<String> = Vec::new();

    for line in reader.lines() {
        let line = line?;
        let line = line.trim();

        if line.starts_with(ID_MARKER) {
            queries.push(String::new());
            continue;
        }
        if line.starts_with(CONTENT_MARKER) {
            continue;
        }

        if let Some(query) = queries.last_mut() {
            if !query.is_empty() {
                query.push(' ');
            }
            query.push_str(line);
        }
    }

    for query in &mut queries {
        *query = query.trim().to_string();
    }
    Ok(queries)
}

/// Parse `query-number document-id` relevance judgments into per-query
/// relevant-document lists (1-based query numbers)
pub fn parse_relevance<R: BufRead>(reader: R) -> Result<Vec<Vec<String>>> {
    let mut relevant: Vec<Vec<String>> = Vec::new();

    for line in reader.lines() {
        let line = line?;
        let mut fields = line.split_whitespace();

        let query_number = fields.next().and_then(|f| f.parse::<usize>().ok());
        let document_id = fields.next();
        let (query_number, document_id) = match (query_number, document_id) {
            (Some(n), Some(id)) if n > 0 => (n, id),
            _ => {
                if !line.trim().is_empty() {
                    warn!(line = %line, "skipping malformed relevance judgment");
                }
                continue;
            }
        };

        if relevant.len() < query_number {
            relevant.resize_with(query_number, Vec::new);
        }
        relevant[query_number - 1].push(format!("{document_id}.txt"));
    }

    Ok(relevant)
}
