//! Bilingual two-column HTML document.
//!
//! Block fragments are trusted markup produced by the converter and are
//! inserted as-is; only the title and column labels are escaped.

use std::fmt::{self, Write};

use html_escape::encode_text;

use crate::align::AlignedPair;
use crate::languages::{self, LanguagePair};

const STYLE: &str = r#"    @page {
      size: A4;
      margin: 15mm;
    }
    * {
      box-sizing: border-box;
    }
    body {
      font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif;
      font-size: 11pt;
      line-height: 1.4;
      margin: 0;
      color: #333;
    }
    table {
      width: 100%;
      border-collapse: collapse;
      table-layout: fixed;
    }
    thead td {
      background: #f0f0f0;
      font-weight: bold;
      text-align: center;
      padding: 8px 12px;
      border-bottom: 2px solid #ccc;
      font-size: 12pt;
    }
    tbody tr {
      page-break-inside: avoid;
    }
    td {
      width: 50%;
      padding: 6px 12px;
      vertical-align: top;
      border-bottom: 1px solid #eee;
    }
    td:first-child {
      border-right: 1px solid #ddd;
    }
    td h1, td h2, td h3, td h4, td h5, td h6 {
      margin: 0.3em 0 0.2em;
    }
    td p, td ul, td ol {
      margin: 0.2em 0;
    }
    td ul, td ol {
      padding-left: 1.5em;
    }
    code {
      background: #f8f8f8;
      padding: 1px 4px;
      border-radius: 3px;
      font-size: 10pt;
    }
    pre {
      background: #f8f8f8;
      padding: 8px;
      border-radius: 4px;
      overflow-x: auto;
      font-size: 9pt;
    }
    pre code {
      background: none;
      padding: 0;
    }
    blockquote {
      border-left: 3px solid #ddd;
      margin: 0.3em 0;
      padding: 0.2em 0 0.2em 1em;
      color: #666;
    }
    hr {
      border: none;
      border-top: 1px solid #ddd;
      margin: 0.5em 0;
    }
"#;

/// Header text of the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Labels {
    pub title: String,
    pub source: String,
    pub target: String,
}

impl Labels {
    /// English names in the title, native names over the columns.
    pub fn for_pair(pair: &LanguagePair) -> Self {
        Self {
            title: format!(
                "Bilingual: {} → {}",
                languages::name(&pair.source),
                languages::name(&pair.target)
            ),
            source: languages::native_name(&pair.source).to_string(),
            target: languages::native_name(&pair.target).to_string(),
        }
    }
}

/// Renders a complete HTML document with one table row per pair.
pub fn render(labels: &Labels, pairs: &[AlignedPair<'_>]) -> Result<String, fmt::Error> {
    let mut out = String::with_capacity(STYLE.len() + 256 * (pairs.len() + 1));

    out.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    out.push_str("  <meta charset=\"utf-8\">\n");
    writeln!(out, "  <title>{}</title>", encode_text(&labels.title))?;
    out.push_str("  <style>\n");
    out.push_str(STYLE);
    out.push_str("  </style>\n</head>\n<body>\n  <table>\n");

    out.push_str("    <thead>\n      <tr>\n");
    writeln!(out, "        <td>{}</td>", encode_text(&labels.source))?;
    writeln!(out, "        <td>{}</td>", encode_text(&labels.target))?;
    out.push_str("      </tr>\n    </thead>\n    <tbody>\n");

    for pair in pairs {
        out.push_str("      <tr>\n");
        writeln!(out, "        <td>{}</td>", pair.source_html())?;
        writeln!(out, "        <td>{}</td>", pair.translated_html())?;
        out.push_str("      </tr>\n");
    }

    out.push_str("    </tbody>\n  </table>\n</body>\n</html>\n");
    Ok(out)
}
