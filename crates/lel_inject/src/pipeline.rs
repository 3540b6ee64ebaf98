//! Scan, annotate and resolve in one pass.

use lel_lexer_core::{scan, ParseError, Token};
use rayon::prelude::*;
use tracing::debug;

use crate::annotate::annotate;
use crate::languages::LanguageRegistry;
use crate::resolve::{resolve, InjectionSpan};

/// All injections in `source`, ordered by literal start offset.
///
/// Literals nested in interpolation slots are found too. A source that
/// fails to scan yields no injections, only the error.
pub fn find_injections(
    source: &str,
    languages: &LanguageRegistry,
) -> Result<Vec<InjectionSpan>, ParseError> {
    let tokens = scan(source)?;
    let mut injections = Vec::new();

    // Each slot owns a separate token sequence with its own comment
    // context; walk them with an explicit stack instead of recursion.
    let mut work: Vec<&[Token]> = vec![&tokens];
    while let Some(sequence) = work.pop() {
        for annotation in annotate(sequence, source) {
            let Some(literal) = sequence[annotation.literal].literal() else {
                continue;
            };
            let language = annotation
                .label
                .tag()
                .and_then(|tag| languages.resolve(tag));
            if let Some(injection) = resolve(literal, language) {
                injections.push(injection);
            }
        }
        for token in sequence {
            if let Some(literal) = token.literal() {
                work.extend(literal.slots.iter().map(|slot| slot.tokens.as_slice()));
            }
        }
    }

    injections.sort_unstable_by_key(|injection| injection.literal.start);
    debug!(
        bytes = source.len(),
        injections = injections.len(),
        "resolved injections"
    );
    Ok(injections)
}

/// [`find_injections`] over independent sources in parallel.
///
/// Results are in input order.
pub fn find_injections_many<S>(
    sources: &[S],
    languages: &LanguageRegistry,
) -> Vec<Result<Vec<InjectionSpan>, ParseError>>
where
    S: AsRef<str> + Sync,
{
    sources
        .par_iter()
        .map(|source| find_injections(source.as_ref(), languages))
        .collect()
}

#[cfg(test)]
mod tests;
