// annotations.rs — Workflow commands written to stdout for the runner.

/// Escape a workflow-command message (`%`, `\r`, `\n`).
pub fn escape_data(message: &str) -> String {
    message
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

/// The `::error::` command that marks the step as failed with `message`.
pub fn error_command(message: &str) -> String {
    format!("::error::{}", escape_data(message))
}

/// Record `message` as the step's failure reason.
///
/// The caller is responsible for exiting non-zero.
pub fn set_failed(message: &str) {
    println!("{}", error_command(message));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_percent_and_newlines() {
        assert_eq!(escape_data("100% done\r\nnext"), "100%25 done%0D%0Anext");
    }

    #[test]
    fn percent_is_escaped_first() {
        assert_eq!(escape_data("%0A"), "%250A");
    }

    #[test]
    fn error_command_format() {
        assert_eq!(
            error_command("artifact 'missing' not found"),
            "::error::artifact 'missing' not found"
        );
    }
}
