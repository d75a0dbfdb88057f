//! Display utilities

/// Shortens long paths for single-row display, keeping the last two
/// components with an ellipsis prefix
pub fn shorten_path(path: &str, max_length: usize) -> String {
    if path.len() <= max_length {
        return path.to_string();
    }

    let components: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
    if components.len() <= 2 {
        // Too few components to shorten meaningfully
        return path.to_string();
    }

    let prefix = if path.starts_with("./") { "./" } else { "" };
    format!(
        "{}.../{}/{}",
        prefix,
        components[components.len() - 2],
        components[components.len() - 1]
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_paths_untouched() {
        assert_eq!(shorten_path("/srv/forks/repo", 30), "/srv/forks/repo");
    }

    #[test]
    fn test_long_paths_keep_last_two_components() {
        let long = "/home/someone/workspace/forks/my-project";
        assert_eq!(shorten_path(long, 20), ".../forks/my-project");
    }

    #[test]
    fn test_relative_prefix_preserved() {
        let long = "./deeply/nested/forks/my-project";
        assert_eq!(shorten_path(long, 10), "./.../forks/my-project");
    }
}
