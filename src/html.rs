// src/html.rs
// Streaming HTML table extractor.
// Deliberately naive but tolerant: recognizes <table>, <tr> and <td>/<th>
// (case-insensitive), skips every other tag, and never fails on unbalanced
// markup. Whatever structure can be recovered is returned; the rest is
// silently dropped.

/// A parsed table: rows of tag-stripped, whitespace-normalized cell texts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    pub rows: Vec<Vec<String>>,
}

/// Parser state for a single forward scan: a stack of in-progress tables
/// (markup may nest them), plus the current row and cell of the innermost one.
#[derive(Default)]
struct TableParser {
    tables: Vec<Table>,
    stack: Vec<Table>,
    row: Option<Vec<String>>,
    cell: Option<String>,
}

impl TableParser {
    fn open_tag(&mut self, name: &str) {
        match name {
            "table" => self.stack.push(Table::default()),
            "tr" if !self.stack.is_empty() => self.row = Some(Vec::new()),
            "td" | "th" if self.row.is_some() => self.cell = Some(String::new()),
            _ => {}
        }
    }

    fn close_tag(&mut self, name: &str) {
        match name {
            "td" | "th" => {
                if let (Some(cell), Some(row)) = (self.cell.take(), self.row.as_mut()) {
                    row.push(normalize_ws(&normalize_entities(&cell)));
                }
            }
            "tr" => {
                if let Some(row) = self.row.take() {
                    // Keep the row only if at least one cell survived trimming
                    if row.iter().any(|c| !c.is_empty()) {
                        if let Some(table) = self.stack.last_mut() {
                            table.rows.push(row);
                        }
                    }
                }
            }
            "table" => {
                if let Some(table) = self.stack.pop() {
                    if !table.rows.is_empty() {
                        self.tables.push(table);
                    }
                }
            }
            _ => {}
        }
    }

    fn text(&mut self, data: &str) {
        // Text outside any cell is discarded
        if let Some(cell) = self.cell.as_mut() {
            cell.push_str(data);
        }
    }
}

/// Scan `html` once and return every table that ended up with at least one
/// non-empty row. Nested tables are reported as results of their own, in the
/// order their closing tags appear (innermost first). Unmatched closing tags
/// are ignored; unterminated markup yields whatever was completed before it.
pub fn extract_tables(html: &str) -> Vec<Table> {
    let lc = to_lower(html);
    let mut p = TableParser::default();
    let mut i = 0usize;

    while i < html.len() {
        if lc.as_bytes()[i] != b'<' {
            let end = lc[i..].find('<').map_or(html.len(), |j| i + j);
            p.text(&html[i..end]);
            i = end;
            continue;
        }

        // Comments may contain table markup; skip them whole
        if lc[i..].starts_with("<!--") {
            i = lc[i + 4..].find("-->").map_or(html.len(), |j| i + 4 + j + 3);
            continue;
        }

        let Some(gt) = lc[i..].find('>') else { break };
        let (is_close, name) = tag_name(&lc[i + 1..i + gt]);
        i += gt + 1;

        if is_close {
            p.close_tag(name);
        } else if name == "script" || name == "style" {
            // Raw text elements: nothing inside is markup or cell text
            i = skip_raw_element(&lc, i, name);
        } else {
            p.open_tag(name);
        }
    }

    p.tables
}

/// Split a tag body (the text between `<` and `>`) into close-flag and name.
/// Attributes and anything after the name are ignored.
fn tag_name(body: &str) -> (bool, &str) {
    let body = body.trim();
    let (is_close, rest) = match body.strip_prefix('/') {
        Some(r) => (true, r.trim_start()),
        None => (false, body),
    };
    let end = rest
        .find(|c: char| !c.is_ascii_alphanumeric())
        .unwrap_or(rest.len());
    (is_close, &rest[..end])
}

/// Advance past the matching `</script>` / `</style>` close tag.
fn skip_raw_element(lc: &str, from: usize, name: &str) -> usize {
    let close = format!("</{name}");
    match lc[from..].find(&close) {
        Some(j) => {
            let at = from + j;
            lc[at..].find('>').map_or(lc.len(), |g| at + g + 1)
        }
        None => lc.len(),
    }
}

/// Minimal HTML entity decoding for cell text. `&amp;` goes last so that
/// doubly-escaped sequences are not decoded twice.
pub fn normalize_entities(s: &str) -> String {
    s.replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}

/// Collapse sequences of whitespace into a single space and trim.
pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space {
                out.push(' ');
                prev_space = true;
            }
        } else {
            out.push(ch);
            prev_space = false;
        }
    }
    out.trim().to_string()
}

/// ASCII-only lowercasing; byte length is preserved so indexes into the
/// lowered copy are valid for the original.
fn to_lower(s: &str) -> String {
    s.chars()
        .map(|c| if c.is_ascii() { c.to_ascii_lowercase() } else { c })
        .collect()
}
