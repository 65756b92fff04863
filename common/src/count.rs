//! 一括選択の件数入力パーサー

/// 入力文字列から選択件数を取り出す
///
/// 先頭の空白を飛ばし、符号に続く数字だけを読む（"15" → 15, " 7rows" → 7, "3.9" → 3）。
/// 数字がない、0、負数のときは `None`。
pub fn parse_select_count(input: &str) -> Option<usize> {
    let trimmed = input.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits_len = rest.bytes().take_while(|b| b.is_ascii_digit()).count();
    if digits_len == 0 || negative {
        return None;
    }

    // 桁あふれは選べる最大件数として扱う
    let count = rest[..digits_len].parse::<usize>().unwrap_or(usize::MAX);
    (count > 0).then_some(count)
}
