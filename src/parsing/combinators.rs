//! Building blocks for the grammar
//!
//! Each combinator returns a rule: a function from a Cursor to either the
//! captured value and the advanced Cursor, or a ParsingError. A rule that
//! fails never consumes anything; the caller still holds the Cursor it
//! passed in and can try something else from there.

use tracing::trace;

use super::{Cursor, ParsingError};

pub type Outcome<'i, T> = Result<(T, Cursor<'i>), ParsingError<'i>>;

/// Match exactly the given bytes.
pub fn literal<'i>(symbol: &'static str) -> impl Fn(Cursor<'i>) -> Outcome<'i, &'static str> {
    move |cursor| {
        let bytes = symbol.as_bytes();
        if cursor
            .remaining()
            .starts_with(bytes)
        {
            Ok((symbol, cursor.advance(bytes.len())))
        } else {
            Err(ParsingError::ExpectedSymbol(cursor, symbol))
        }
    }
}

/// Consume zero or more bytes satisfying the predicate. Always succeeds.
pub fn take_while<'i, P>(predicate: P) -> impl Fn(Cursor<'i>) -> Outcome<'i, &'i [u8]>
where
    P: Fn(u8) -> bool,
{
    move |cursor| {
        let rest = cursor.remaining();
        let width = rest
            .iter()
            .take_while(|&&b| predicate(b))
            .count();
        Ok((&rest[..width], cursor.advance(width)))
    }
}

/// Consume one or more bytes satisfying the predicate.
pub fn take_while1<'i, P>(predicate: P) -> impl Fn(Cursor<'i>) -> Outcome<'i, &'i [u8]>
where
    P: Fn(u8) -> bool,
{
    let rule = take_while(predicate);
    move |cursor| {
        let (taken, next) = rule(cursor)?;
        if taken.is_empty() {
            Err(ParsingError::ZeroLengthToken(cursor))
        } else {
            Ok((taken, next))
        }
    }
}

/// Transform the value captured by a rule.
pub fn map<'i, A, B, R, F>(rule: R, function: F) -> impl Fn(Cursor<'i>) -> Outcome<'i, B>
where
    R: Fn(Cursor<'i>) -> Outcome<'i, A>,
    F: Fn(A) -> B,
{
    move |cursor| {
        let (value, next) = rule(cursor)?;
        Ok((function(value), next))
    }
}

/// Run a tuple of rules one after another; the capture is the tuple of
/// their captures. If any of them fails the whole sequence fails and
/// nothing captured so far survives.
pub fn sequence<'i, O, S>(rules: S) -> impl Fn(Cursor<'i>) -> Outcome<'i, O>
where
    S: Sequence<'i, O>,
{
    move |cursor| rules.run(cursor)
}

/// Try each of a tuple of rules from the same starting point and return the
/// first that succeeds.
///
/// When they all fail, the failure from whichever alternative got furthest
/// into the input is reported, since it is most likely the one the author
/// meant. If none of them got anywhere, there's nothing specific to say and
/// the result is `Unrecognized`.
pub fn choice<'i, O, A>(alternatives: A) -> impl Fn(Cursor<'i>) -> Outcome<'i, O>
where
    A: Alternatives<'i, O>,
{
    move |cursor| match alternatives.choose(cursor) {
        Ok(result) => Ok(result),
        Err(Some(error)) if error.reach() > cursor.offset() => Err(error),
        Err(_) => {
            trace!(?cursor, "no alternative matched");
            Err(ParsingError::Unrecognized(cursor))
        }
    }
}

/// Like [`choice`] but never fails; if nothing matches the capture is
/// `None` and the Cursor is unchanged.
pub fn optional_choice<'i, O, A>(alternatives: A) -> impl Fn(Cursor<'i>) -> Outcome<'i, Option<O>>
where
    A: Alternatives<'i, O>,
{
    move |cursor| match alternatives.choose(cursor) {
        Ok((value, next)) => Ok((Some(value), next)),
        Err(_) => Ok((None, cursor)),
    }
}

/// Apply a rule until it fails, collecting every capture. Always succeeds.
pub fn repeat0<'i, T, R>(rule: R) -> impl Fn(Cursor<'i>) -> Outcome<'i, Vec<T>>
where
    R: Fn(Cursor<'i>) -> Outcome<'i, T>,
{
    move |cursor| {
        let mut results = Vec::new();
        let mut next = cursor;

        while let Ok((value, after)) = rule(next) {
            results.push(value);
            // a rule that succeeds without consuming would match forever
            if after.offset() == next.offset() {
                break;
            }
            next = after;
        }

        Ok((results, next))
    }
}

/// Repeatedly match a separator followed by a rule, collecting both
/// captures. Stops quietly when the separator fails, but once a separator
/// has matched the rule that follows it must succeed; its failure is
/// returned.
pub fn repeat_after<'i, S, T, P, R>(
    separator: P,
    rule: R,
) -> impl Fn(Cursor<'i>) -> Outcome<'i, Vec<(S, T)>>
where
    P: Fn(Cursor<'i>) -> Outcome<'i, S>,
    R: Fn(Cursor<'i>) -> Outcome<'i, T>,
{
    move |cursor| {
        let mut results = Vec::new();
        let mut next = cursor;

        while let Ok((between, after)) = separator(next) {
            let (value, after) = rule(after)?;
            results.push((between, value));
            if after.offset() == next.offset() {
                break;
            }
            next = after;
        }

        Ok((results, next))
    }
}

pub trait Sequence<'i, O> {
    fn run(&self, cursor: Cursor<'i>) -> Outcome<'i, O>;
}

pub trait Alternatives<'i, O> {
    /// Returns the first success, or the failure that reached furthest.
    fn choose(&self, cursor: Cursor<'i>) -> Result<(O, Cursor<'i>), Option<ParsingError<'i>>>;
}

fn furthest<'i>(best: Option<ParsingError<'i>>, error: ParsingError<'i>) -> Option<ParsingError<'i>> {
    match best {
        Some(best) if best.reach() >= error.reach() => Some(best),
        _ => Some(error),
    }
}

macro_rules! tuple_rules {
    ($($rule:ident $output:ident $function:ident $value:ident),+) => {
        impl<'i, $($rule, $output),+> Sequence<'i, ($($output,)+)> for ($($rule,)+)
        where
            $($rule: Fn(Cursor<'i>) -> Outcome<'i, $output>),+
        {
            fn run(&self, cursor: Cursor<'i>) -> Outcome<'i, ($($output,)+)> {
                let ($($function,)+) = self;
                let next = cursor;
                $(
                    let ($value, next) = $function(next)?;
                )+
                Ok((($($value,)+), next))
            }
        }

        impl<'i, O, $($rule),+> Alternatives<'i, O> for ($($rule,)+)
        where
            $($rule: Fn(Cursor<'i>) -> Outcome<'i, O>),+
        {
            fn choose(&self, cursor: Cursor<'i>) -> Result<(O, Cursor<'i>), Option<ParsingError<'i>>> {
                let ($($function,)+) = self;
                let mut best = None;
                $(
                    match $function(cursor) {
                        Ok(result) => return Ok(result),
                        Err(error) => best = furthest(best, error),
                    }
                )+
                Err(best)
            }
        }
    };
}

tuple_rules!(R1 O1 r1 v1);
tuple_rules!(R1 O1 r1 v1, R2 O2 r2 v2);
tuple_rules!(R1 O1 r1 v1, R2 O2 r2 v2, R3 O3 r3 v3);
tuple_rules!(R1 O1 r1 v1, R2 O2 r2 v2, R3 O3 r3 v3, R4 O4 r4 v4);
tuple_rules!(R1 O1 r1 v1, R2 O2 r2 v2, R3 O3 r3 v3, R4 O4 r4 v4, R5 O5 r5 v5);
tuple_rules!(R1 O1 r1 v1, R2 O2 r2 v2, R3 O3 r3 v3, R4 O4 r4 v4, R5 O5 r5 v5, R6 O6 r6 v6);
tuple_rules!(
    R1 O1 r1 v1,
    R2 O2 r2 v2,
    R3 O3 r3 v3,
    R4 O4 r4 v4,
    R5 O5 r5 v5,
    R6 O6 r6 v6,
    R7 O7 r7 v7
);
tuple_rules!(
    R1 O1 r1 v1,
    R2 O2 r2 v2,
    R3 O3 r3 v3,
    R4 O4 r4 v4,
    R5 O5 r5 v5,
    R6 O6 r6 v6,
    R7 O7 r7 v7,
    R8 O8 r8 v8
);
