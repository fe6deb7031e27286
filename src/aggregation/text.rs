/// Maximum characters of a detail row remark.
pub const BIKOU_MAX_CHARS: usize = 200;
/// Maximum characters of the memo part of a remark.
pub const MEMO_MAX_CHARS: usize = 160;
pub const TEXT_MAX_CHARS: usize = 100;
pub const NAME_MAX_CHARS: usize = 120;
pub const ADDRESS_MAX_CHARS: usize = 120;

/// Collapses whitespace runs to a single space, trims, and clips to `max_chars` characters.
pub fn sanitize(text: &str, max_chars: usize) -> String {
    let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");

    clip(&collapsed, max_chars)
}

fn clip(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((end, _)) => text[..end].trim_end().to_string(),
        None => text.to_string()
    }
}

/// Builds a detail row remark from the ledger memo and the ledger row number.
///
/// The memo is clipped to `MEMO_MAX_CHARS` before the `MF行番号` suffix is appended,
/// then the combined remark is clipped to `BIKOU_MAX_CHARS`.
pub fn build_bikou(memo: &str, transaction_no: &str) -> String {
    let suffix = format!("MF行番号: {}", sanitize(transaction_no, TEXT_MAX_CHARS));
    let memo = sanitize(memo, MEMO_MAX_CHARS);

    if memo.is_empty() {
        return clip(&suffix, BIKOU_MAX_CHARS);
    }

    clip(&format!("{memo} {suffix}"), BIKOU_MAX_CHARS)
}

/// First non-empty candidate after sanitizing.
pub fn first_present(candidates: &[&str], max_chars: usize) -> String {
    candidates.iter()
        .map(|candidate| sanitize(candidate, max_chars))
        .find(|candidate| !candidate.is_empty())
        .unwrap_or_default()
}
