//! Which form of a block is sent to a translator.

use crate::models::{Block, BlockKind};

/// The payload to translate for `block`.
///
/// - code: nothing, code is never translated
/// - raw markup and paragraphs: `raw`, so tags and inline markdown
///   (`[links](url)`, `**bold**`) reach the translator intact
/// - everything else: `text`
pub fn payload(block: &Block) -> &str {
    match block.kind() {
        BlockKind::CodeBlock => "",
        BlockKind::RawMarkup | BlockKind::Paragraph => block.raw(),
        _ => block.text(),
    }
}

/// Payloads for a block sequence, in order.
pub fn payloads(blocks: &[Block]) -> Vec<String> {
    blocks.iter().map(|b| payload(b).to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::extract_str;
    use pretty_assertions::assert_eq;

    #[test]
    fn payload_per_kind() {
        let blocks = extract_str(
            "# Le *titre*\n\nVoir [ici](/x).\n\n- un\n- deux\n\n```\ncode\n```\n\n> cite\n\n---\n\n<div>x</div>\n",
        )
        .unwrap();
        assert_eq!(
            payloads(&blocks),
            vec![
                "Le titre".to_string(),
                "Voir [ici](/x).".to_string(),
                "un\ndeux".to_string(),
                String::new(),
                "cite".to_string(),
                "---".to_string(),
                "<div>x</div>\n".to_string(),
            ]
        );
    }
}
