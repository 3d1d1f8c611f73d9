//! Line classifier.
//!
//! Recognizes which statement form a single source line is. Matchers are
//! tried in a fixed order and the first matching form wins; anything left
//! over is [`Stmt::Unknown`] and becomes a syntax error in the engines.

use tgl_ir::Stmt;

/// Classify one source line (leading/trailing whitespace is ignored).
pub fn classify(line: &str) -> Stmt {
    let line = line.trim();

    if line.is_empty() || line.starts_with("++") || line.starts_with("--") {
        return Stmt::Skip;
    }
    if is_directive(line) {
        return Stmt::Directive;
    }
    // "Else If" before "Else": the longer keyword would otherwise never match.
    if let Some(rest) = line.strip_prefix("Else If") {
        if let Some((left, right)) = comparison_header(rest) {
            return Stmt::ElseIf { left, right };
        }
    }
    if let Some(rest) = line.strip_prefix("Else") {
        if rest.trim() == "{" {
            return Stmt::Else;
        }
    }
    if let Some(rest) = line.strip_prefix("If") {
        if let Some((left, right)) = comparison_header(rest) {
            return Stmt::If { left, right };
        }
    }
    if let Some(rest) = line.strip_prefix("During") {
        if let Some((left, right)) = comparison_header(rest) {
            return Stmt::During { left, right };
        }
    }
    if let Some(rest) = line.strip_prefix("For") {
        if let Some(stmt) = for_header(rest) {
            return stmt;
        }
    }
    if let Some(arg) = call_argument(line, "log") {
        return Stmt::Log {
            arg: arg.to_string(),
        };
    }
    if let Some(arg) = call_argument(line, "wait") {
        if let Ok(millis) = arg.parse::<u64>() {
            return Stmt::Wait { millis };
        }
    }
    if let Some((name, value)) = bracket_assignment(line) {
        return Stmt::Assign { name, value };
    }
    if let Some(rest) = line.strip_prefix("Let") {
        if let Some((name, value)) = bracket_assignment(rest.trim_start()) {
            return Stmt::Assign { name, value };
        }
    }
    if let Some(stmt) = list_assignment(line) {
        return stmt;
    }
    if let Some(stmt) = glb_declaration(line) {
        return stmt;
    }
    if is_declaration(line) {
        return Stmt::Declaration;
    }

    Stmt::Unknown {
        line: line.to_string(),
    }
}

/// `!implement <feature>` prefix, case-insensitive.
fn is_directive(line: &str) -> bool {
    const KEYWORD: &str = "!implement";
    line.get(..KEYWORD.len())
        .is_some_and(|p| p.eq_ignore_ascii_case(KEYWORD))
        && line[KEYWORD.len()..].starts_with(char::is_whitespace)
}

/// Parse `<left> =? <right> {` after a conditional or loop keyword.
fn comparison_header(rest: &str) -> Option<(String, String)> {
    let body = rest.trim().strip_suffix('{')?.trim_end();
    let (left, right) = body.split_once("=?")?;
    let left = left.trim().strip_prefix('<')?.strip_suffix('>')?;
    let right = right.trim().strip_prefix('<')?.strip_suffix('>')?;
    Some((left.trim().to_string(), right.trim().to_string()))
}

/// Parse `[var] = start, [check] =? end, body` after the `For` keyword.
///
/// The body keeps any commas it contains: only the first two commas separate
/// the init and guard clauses from the inline statement.
fn for_header(rest: &str) -> Option<Stmt> {
    let mut parts = rest.splitn(3, ',');
    let init = parts.next()?.trim();
    let guard = parts.next()?.trim();
    let body = parts.next()?.trim();
    if body.is_empty() {
        return None;
    }

    let (var, start) = {
        let (var, after) = init.strip_prefix('[')?.split_once(']')?;
        (var.trim(), after.trim_start().strip_prefix('=')?.trim())
    };
    // Guard must be `=?`, not plain `=`.
    let (check, end) = {
        let (check, after) = guard.strip_prefix('[')?.split_once(']')?;
        (check.trim(), after.trim_start().strip_prefix("=?")?.trim())
    };
    if var.is_empty() || start.is_empty() || check.is_empty() || end.is_empty() {
        return None;
    }

    Some(Stmt::For {
        var: var.to_string(),
        start: start.to_string(),
        check: check.to_string(),
        end: end.to_string(),
        body: body.to_string(),
    })
}

/// Match `name(argument)` for the given callee, returning the raw argument.
fn call_argument<'a>(line: &'a str, callee: &str) -> Option<&'a str> {
    let rest = line.strip_prefix(callee)?;
    Some(rest.trim_start().strip_prefix('(')?.strip_suffix(')')?.trim())
}

/// Match `[name] = value`, returning the name and the raw right-hand side.
fn bracket_assignment(line: &str) -> Option<(String, String)> {
    let (name, after) = line.strip_prefix('[')?.split_once(']')?;
    let value = after.trim_start().strip_prefix('=')?;
    // `=?` is a comparison, not an assignment.
    if value.starts_with('?') {
        return None;
    }
    Some((name.trim().to_string(), value.trim().to_string()))
}

/// Match `/name/ = #v1, v2, ...#`.
fn list_assignment(line: &str) -> Option<Stmt> {
    let (name, after) = line.strip_prefix('/')?.split_once('/')?;
    let value = after.trim_start().strip_prefix('=')?.trim();
    let items = value.strip_prefix('#')?.strip_suffix('#')?;
    Some(Stmt::ListAssign {
        name: name.trim().to_string(),
        items: items.to_string(),
    })
}

/// Match `glb <kind> <name> = <value>`, case-insensitive keyword.
fn glb_declaration(line: &str) -> Option<Stmt> {
    let rest = line
        .get(..3)
        .filter(|p| p.eq_ignore_ascii_case("glb"))
        .map(|_| &line[3..])?;
    if !rest.starts_with(char::is_whitespace) {
        return None;
    }
    let (before, value) = rest.split_once('=')?;
    let mut words = before.split_whitespace();
    let kind = words.next()?;
    let name = words.next()?;
    if words.next().is_some() || !is_word(kind) || !is_word(name) {
        return None;
    }
    Some(Stmt::Glb {
        name: name.to_string(),
        value: value.trim().to_string(),
    })
}

fn is_word(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Structural no-op headers recognized by fast mode: grouplet bindings and
/// `Process(...)` / `Connect(...)` wiring calls.
fn is_declaration(line: &str) -> bool {
    if line.starts_with("Process(") || line.starts_with("Connect(") {
        return true;
    }
    line.split_once('=').is_some_and(|(_, rhs)| {
        let rhs = rhs.trim().to_ascii_lowercase();
        rhs.starts_with("action(grouplet)")
            || rhs.starts_with("runner(grouplet)")
            || rhs.starts_with("storage(grouplet)")
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn conditional_headers() {
        assert_eq!(
            classify("If <[a]> =? <[b]> {"),
            Stmt::If {
                left: "[a]".to_string(),
                right: "[b]".to_string()
            }
        );
        assert_eq!(
            classify("Else If <*1*> =? <[x]> {"),
            Stmt::ElseIf {
                left: "*1*".to_string(),
                right: "[x]".to_string()
            }
        );
        assert_eq!(classify("Else {"), Stmt::Else);
    }

    #[test]
    fn loop_headers() {
        assert_eq!(
            classify("During <[run]> =? <_true_> {"),
            Stmt::During {
                left: "[run]".to_string(),
                right: "_true_".to_string()
            }
        );
        assert_eq!(
            classify("For [i] = *0*, [i] =? *0*, log([i])"),
            Stmt::For {
                var: "i".to_string(),
                start: "*0*".to_string(),
                check: "i".to_string(),
                end: "*0*".to_string(),
                body: "log([i])".to_string()
            }
        );
    }

    #[test]
    fn for_body_keeps_commas() {
        let stmt = classify("For [i] = *0*, [i] =? *9*, /L/ = #1, 2#");
        assert_eq!(
            stmt,
            Stmt::For {
                var: "i".to_string(),
                start: "*0*".to_string(),
                check: "i".to_string(),
                end: "*9*".to_string(),
                body: "/L/ = #1, 2#".to_string()
            }
        );
    }

    #[test]
    fn calls() {
        assert_eq!(
            classify("log([x] + 1)"),
            Stmt::Log {
                arg: "[x] + 1".to_string()
            }
        );
        assert_eq!(classify("wait(250)"), Stmt::Wait { millis: 250 });
        // Non-numeric wait argument is not a wait statement.
        assert!(matches!(classify("wait(soon)"), Stmt::Unknown { .. }));
    }

    #[test]
    fn assignments() {
        assert_eq!(
            classify("[x] = *5*"),
            Stmt::Assign {
                name: "x".to_string(),
                value: "*5*".to_string()
            }
        );
        assert_eq!(
            classify("Let [msg] = \"hi\""),
            Stmt::Assign {
                name: "msg".to_string(),
                value: "\"hi\"".to_string()
            }
        );
        assert_eq!(
            classify("/L/ = #1, 2, 3#"),
            Stmt::ListAssign {
                name: "L".to_string(),
                items: "1, 2, 3".to_string()
            }
        );
    }

    #[test]
    fn fast_mode_forms() {
        assert_eq!(
            classify("glb num x = *3*"),
            Stmt::Glb {
                name: "x".to_string(),
                value: "*3*".to_string()
            }
        );
        assert_eq!(
            classify("Glb list L = #1, 2#"),
            Stmt::Glb {
                name: "L".to_string(),
                value: "#1, 2#".to_string()
            }
        );
        assert_eq!(classify("myAg = Action(Grouplet)"), Stmt::Declaration);
        assert_eq!(classify("store = storage(grouplet)"), Stmt::Declaration);
        assert_eq!(classify("Process(myAg)"), Stmt::Declaration);
        assert_eq!(classify("Connect(myAg, store)"), Stmt::Declaration);
    }

    #[test]
    fn inert_lines() {
        assert_eq!(classify(""), Stmt::Skip);
        assert_eq!(classify("  ++ a comment"), Stmt::Skip);
        assert_eq!(classify("-- another"), Stmt::Skip);
        assert_eq!(classify("!implement condition normal"), Stmt::Directive);
        assert_eq!(classify("!IMPLEMENT FastMode"), Stmt::Directive);
    }

    #[test]
    fn bracketed_declaration_is_an_assignment() {
        // A bracketed left-hand side always reads as assignment, even when
        // the right-hand side looks like a grouplet binding.
        assert_eq!(
            classify("[x] = Action(Grouplet)"),
            Stmt::Assign {
                name: "x".to_string(),
                value: "Action(Grouplet)".to_string()
            }
        );
    }

    #[test]
    fn unknown_lines() {
        assert!(matches!(classify("frobnicate!"), Stmt::Unknown { .. }));
        assert!(matches!(classify("}"), Stmt::Unknown { .. }));
        assert!(matches!(classify("If missing braces"), Stmt::Unknown { .. }));
    }
}
