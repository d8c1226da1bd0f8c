//! Trivia surgery for synthesized syntax.

use propex_ir::{SyntaxArena, Trivia, TriviaKind, TriviaRange};

/// Whitespace that indents the line a token starts on: the whitespace run
/// following the last newline of its leading trivia (or at its start when
/// there is no newline).
pub(crate) fn indentation(arena: &SyntaxArena, leading: TriviaRange) -> Vec<Trivia> {
    let pieces = arena.trivia(leading);
    let line_start = pieces
        .iter()
        .rposition(|piece| piece.kind == TriviaKind::Newline)
        .map_or(0, |i| i + 1);
    pieces[line_start..]
        .iter()
        .take_while(|piece| piece.kind == TriviaKind::Whitespace)
        .copied()
        .collect()
}

/// Length of the part of a leading run that belongs to the lines above the
/// token rather than to the token itself: everything up to the last
/// directive line (`#region`, `#endif`, ...) and the blank lines right after it.
/// Comments directly above the token stay attached to it.
pub(crate) fn detached_len(arena: &SyntaxArena, leading: TriviaRange) -> usize {
    let mut split = 0;
    let mut line_start = 0;
    let mut directive = false;
    let mut blank = true;
    for (i, piece) in arena.trivia(leading).iter().enumerate() {
        match piece.kind {
            TriviaKind::Newline => {
                if directive || (blank && split > 0 && line_start == split) {
                    split = i + 1;
                }
                line_start = i + 1;
                directive = false;
                blank = true;
            }
            TriviaKind::Whitespace => {}
            TriviaKind::Directive => {
                directive = true;
                blank = false;
            }
            TriviaKind::LineComment | TriviaKind::DocComment | TriviaKind::BlockComment => {
                blank = false;
            }
        }
    }
    split
}

/// The first line break in a trivia run.
pub(crate) fn line_break(arena: &SyntaxArena, range: TriviaRange) -> Option<Trivia> {
    arena
        .trivia(range)
        .iter()
        .copied()
        .find(|piece| piece.kind == TriviaKind::Newline)
}

/// The layout part of a run that separates a token from the next one: its
/// line break if it has one, otherwise its whitespace.
pub(crate) fn separator(arena: &SyntaxArena, range: TriviaRange) -> Vec<Trivia> {
    match line_break(arena, range) {
        Some(piece) => vec![piece],
        None => arena
            .trivia(range)
            .iter()
            .filter(|piece| piece.kind == TriviaKind::Whitespace)
            .copied()
            .collect(),
    }
}

/// Does the run hold comments or directives?
pub(crate) fn has_annotation(arena: &SyntaxArena, range: TriviaRange) -> bool {
    arena
        .trivia(range)
        .iter()
        .any(|piece| piece.kind.is_annotation())
}

/// The run without the indentation that follows its last newline.
pub(crate) fn without_indentation(arena: &SyntaxArena, range: TriviaRange) -> Vec<Trivia> {
    let mut pieces = arena.trivia(range).to_vec();
    while pieces
        .last()
        .is_some_and(|piece| piece.kind == TriviaKind::Whitespace)
    {
        pieces.pop();
    }
    pieces
}

/// The run without the whitespace it starts with.
pub(crate) fn without_leading_whitespace(arena: &SyntaxArena, range: TriviaRange) -> Vec<Trivia> {
    arena
        .trivia(range)
        .iter()
        .skip_while(|piece| piece.kind == TriviaKind::Whitespace)
        .copied()
        .collect()
}
