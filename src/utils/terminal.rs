//! 终端输出格式

/// 引用前缀
pub const QUOTE_PREFIX: &str = "> ";

/// 把生成文本格式化成终端引用块
///
/// `•` 项目符号换成 `  *`，每一行（包括空行）加上 `> ` 前缀。
pub fn format_for_terminal(text: &str) -> String {
    let text = text.replace('•', "  *");
    text.split_inclusive('\n')
        .map(|line| format!("{}{}", QUOTE_PREFIX, line))
        .collect()
}

/// 分隔横线
pub fn rule(width: usize) -> String {
    "=".repeat(width)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_line_is_quoted() {
        assert_eq!(format_for_terminal("a\n\nb"), "> a\n> \n> b");
    }

    #[test]
    fn test_trailing_newline_is_not_quoted_again() {
        assert_eq!(format_for_terminal("linha\n"), "> linha\n");
        assert_eq!(format_for_terminal(""), "");
    }

    #[test]
    fn test_bullets_are_rewritten() {
        assert_eq!(format_for_terminal("• item"), ">   * item");
    }
}
