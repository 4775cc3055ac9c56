/// Formatting utilities for displaying data

/// Initials for the avatar badge: first character of every whitespace-separated
/// part of the name, concatenated. An empty or absent name yields an empty
/// string rather than an error.
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|part| part.chars().next())
        .collect()
}

pub fn format_percentage(value: f64) -> String {
    format!("{:.1}%", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initials_from_full_name() {
        assert_eq!(initials("Ada Lovelace"), "AL");
        assert_eq!(initials("Priya N. Sharma"), "PNS");
    }

    #[test]
    fn test_initials_from_single_name() {
        assert_eq!(initials("Ada"), "A");
    }

    #[test]
    fn test_initials_collapse_extra_whitespace() {
        assert_eq!(initials("  John   Smith "), "JS");
    }

    #[test]
    fn test_initials_of_empty_name_are_empty() {
        assert_eq!(initials(""), "");
        assert_eq!(initials("   "), "");
    }

    #[test]
    fn test_format_percentage() {
        assert_eq!(format_percentage(93.57), "93.6%");
        assert_eq!(format_percentage(0.0), "0.0%");
    }
}
