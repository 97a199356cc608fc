//! Bullet list rendering.
//!
//! Each structural level indents by two spaces. RST needs a blank line
//! whenever the nesting level changes or a list starts, so a bullet only
//! follows its predecessor directly when both sit at the same level.

/// Indentation for structural level `indent`.
pub fn indent_prefix(indent: usize) -> String {
    "  ".repeat(indent)
}

/// Render one bullet whose body has already been inline-rendered.
pub fn render_bullet(indent: usize, body: &str, continues: bool) -> Vec<String> {
    let item = format!("{}* {}", indent_prefix(indent), body);
    if continues {
        vec![item]
    } else {
        vec![String::new(), item]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indent_prefix() {
        assert_eq!(indent_prefix(0), "");
        assert_eq!(indent_prefix(2), "    ");
    }

    #[test]
    fn test_first_bullet_gets_blank_line() {
        assert_eq!(render_bullet(0, "item", false), vec!["", "* item"]);
    }

    #[test]
    fn test_continuing_bullet() {
        assert_eq!(render_bullet(1, "nested", true), vec!["  * nested"]);
    }

    #[test]
    fn test_empty_body() {
        assert_eq!(render_bullet(0, "", true), vec!["* "]);
    }
}
