//! Statement shapes.
//!
//! One variant per statement form the dialect recognizes. The classifier in
//! `tgl_parse` produces these with an explicit "first matching form wins"
//! order; the engines in `tgl_eval` dispatch on them. Operands are kept as
//! raw source text because the dialect re-evaluates them against the live
//! namespace (loop guards are re-read every iteration).

/// A classified source line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Stmt {
    /// `If <left> =? <right> {`
    If { left: String, right: String },
    /// `Else If <left> =? <right> {`
    ElseIf { left: String, right: String },
    /// `Else {`
    Else,
    /// `During <left> =? <right> {` — condition-guarded loop header.
    During { left: String, right: String },
    /// `For [var] = start, [check] =? end, body` — counted loop with a
    /// single inline body statement. The engine does not auto-increment
    /// `var`; advancement must happen inside `body`.
    For {
        var: String,
        start: String,
        check: String,
        end: String,
        body: String,
    },
    /// `log(arg)` — output primitive. The argument is interpreted by the
    /// engine (`time.now`, a reference, or a free-form expression).
    Log { arg: String },
    /// `wait(ms)` — delay primitive.
    Wait { millis: u64 },
    /// `[name] = value` or `Let [name] = value`.
    Assign { name: String, value: String },
    /// `/name/ = #v1, v2, ...#` — the items field holds the text between
    /// the `#` delimiters, still comma-joined.
    ListAssign { name: String, items: String },
    /// `glb <kind> <name> = <value>` — fast-mode global declaration. The
    /// kind word is advisory and not enforced.
    Glb { name: String, value: String },
    /// Structural no-op header (`x = Action(Grouplet)`, `Process(...)`,
    /// `Connect(...)`). Skipped in fast mode, rejected by the standard
    /// engine.
    Declaration,
    /// `!implement ...` feature directive. Inert during execution.
    Directive,
    /// Blank line or `++` / `--` comment.
    Skip,
    /// Anything else; carries the offending line text.
    Unknown { line: String },
}
