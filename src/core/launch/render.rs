// ─── Command Rendering ───
// Shell-like rendering of an argument vector for logs and `--format shell`.
// Output is meant for humans to read or paste; it is never fed back into
// the launcher.

/// Render `program` followed by `args` as one copy/pasteable line.
pub fn render_command<S: AsRef<str>>(program: &str, args: &[S]) -> String {
    let program = shell_escape(program);
    let args = render_args(args);

    if args.is_empty() {
        program
    } else {
        format!("{} {}", program, args)
    }
}

pub fn render_args<S: AsRef<str>>(args: &[S]) -> String {
    args.iter()
        .map(|arg| shell_escape(arg.as_ref()))
        .collect::<Vec<_>>()
        .join(" ")
}

fn shell_escape(raw: &str) -> String {
    if raw.is_empty() {
        return "\"\"".to_string();
    }

    if raw.chars().all(|ch| {
        ch.is_ascii_alphanumeric() || matches!(ch, '-' | '_' | '.' | '/' | ':' | '\\' | '=')
    }) {
        return raw.to_string();
    }

    format!("\"{}\"", raw.replace('"', "\\\""))
}
