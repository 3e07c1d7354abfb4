//! Macros for writing transition tables inline.

/// Build a [`TransitionTable`](crate::builder::TransitionTable) from
/// `state => { symbol => target, .. }` rows.
///
/// Symbols may be written as `char` or `&str` literals.
///
/// # Example
///
/// ```
/// use dfa_trace::core::StateId;
/// use dfa_trace::transitions;
///
/// let table = transitions! {
///     0 => { 'a' => 1, 'b' => 0 },
///     1 => { 'a' => 1, 'b' => 1 },
/// };
///
/// assert_eq!(table[&StateId::new(0)]["a"], StateId::new(1));
/// ```
#[macro_export]
macro_rules! transitions {
    (
        $(
            $from:literal => { $( $symbol:literal => $to:literal ),* $(,)? }
        ),* $(,)?
    ) => {{
        let mut table: $crate::builder::TransitionTable = ::std::collections::BTreeMap::new();
        $(
            #[allow(unused_mut)]
            let mut row = ::std::collections::BTreeMap::new();
            $(
                row.insert(
                    ::std::string::ToString::to_string(&$symbol),
                    $crate::core::StateId::new($to),
                );
            )*
            table.insert($crate::core::StateId::new($from), row);
        )*
        table
    }};
}
