//! Text helpers for card rendering.

/// Marker appended to a cut name
pub const ELLIPSIS: &str = "...";

/// Cut `name` to `max_len` characters and append [`ELLIPSIS`] when it is longer.
///
/// Counts characters, not bytes, and never looks for word boundaries.
pub fn truncate_name(name: &str, max_len: usize) -> String {
    if name.chars().count() > max_len {
        let mut truncated: String = name.chars().take(max_len).collect();
        truncated.push_str(ELLIPSIS);
        truncated
    } else {
        name.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_name_should_be_unchanged() {
        assert_eq!(truncate_name("Rick Sanchez", 20), "Rick Sanchez");
        assert_eq!(truncate_name("", 20), "");
        assert_eq!(truncate_name("", 0), "");
    }

    #[test]
    fn name_at_limit_should_be_unchanged() {
        let name = "Abradolf Lincler 123";
        assert_eq!(name.chars().count(), 20);
        assert_eq!(truncate_name(name, 20), name);
    }

    #[test]
    fn long_name_should_be_cut_mid_word() {
        assert_eq!(
            truncate_name("Alien Googah Cromulon Emperor", 20),
            "Alien Googah Cromulo..."
        );
        assert_eq!(truncate_name("Morty", 0), "...");
    }

    #[test]
    fn truncation_should_count_characters_not_bytes() {
        assert_eq!(truncate_name("Ñoño Müller", 4), "Ñoño...");
        assert_eq!(truncate_name("日本語の名前", 6), "日本語の名前");
        assert_eq!(truncate_name("日本語の名前", 3), "日本語...");
    }

    #[test]
    fn truncated_length_should_be_bounded() {
        let names = ["", "a", "Rick", "Mr. Poopybutthole", "Abadango Cluster Princess"];
        for name in names {
            for limit in 0..30 {
                let result = truncate_name(name, limit);
                let len = name.chars().count();
                assert!(result.chars().count() <= limit + ELLIPSIS.len());
                if len <= limit {
                    assert_eq!(result, name);
                } else {
                    let prefix: String = name.chars().take(limit).collect();
                    assert_eq!(result, format!("{prefix}{ELLIPSIS}"));
                }
            }
        }
    }
}
