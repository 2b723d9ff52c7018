//! Derive stable module labels from source location hints

/// Turn a call-site hint such as `file!()` into a short label.
///
/// `cli/src/commands/emit.rs` becomes `commands/emit`. `root`, when given,
/// is stripped first. Hints that are not file paths pass through unchanged.
pub fn module_label(hint: &str, root: Option<&str>) -> String {
    let mut label = hint.replace('\\', "/");

    if let Some(root) = root.map(|r| r.trim_end_matches('/'))
        && !root.is_empty()
        && let Some(rest) = label.strip_prefix(root)
        && (rest.is_empty() || rest.starts_with('/'))
    {
        label = rest.trim_start_matches('/').to_string();
    }

    if let Some(idx) = label.rfind("/src/") {
        label = label[idx + "/src/".len()..].to_string();
    } else if let Some(rest) = label.strip_prefix("src/") {
        label = rest.to_string();
    }

    if label.len() > 3
        && label
            .get(label.len() - 3..)
            .is_some_and(|ext| ext.eq_ignore_ascii_case(".rs"))
    {
        label.truncate(label.len() - 3);
    }

    label
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_workspace_member_path() {
        assert_eq!(module_label("cli/src/commands/emit.rs", None), "commands/emit");
        assert_eq!(module_label("src/main.rs", None), "main");
    }

    #[test]
    fn test_root_prefix_stripped() {
        assert_eq!(module_label("/srv/app/worker.rs", Some("/srv/app/")), "worker");
        assert_eq!(module_label("/srv/app/worker.rs", Some("/srv/app")), "worker");
        assert_eq!(module_label("/other/worker.rs", Some("/srv/app")), "/other/worker");
        assert_eq!(
            module_label("/srv/apps/worker.rs", Some("/srv/app")),
            "/srv/apps/worker"
        );
    }

    #[test]
    fn test_extension_case_insensitive() {
        assert_eq!(module_label("src/Upper.RS", None), "Upper");
    }

    #[test]
    fn test_windows_separators() {
        assert_eq!(module_label(r"server\src\db\pool.rs", None), "db/pool");
    }

    #[test]
    fn test_plain_hints_pass_through() {
        assert_eq!(module_label("stencil::commands", None), "stencil::commands");
        assert_eq!(module_label("billing", None), "billing");
    }
}
