use seamline_types::Segment;

/// Group consecutive items that share the same `predicate` value.
///
/// This is a total partition, not a filter: every input item lands in exactly
/// one segment, in original order, and a new segment starts exactly where the
/// predicate value differs from the previous item's. Empty input yields no
/// segments; input with a single predicate value yields one.
///
/// ```
/// use seamline_core::segment_by;
///
/// let runs = segment_by([1, 3, 4, 6, 7], |n| n % 2 == 0);
/// let shape: Vec<(bool, Vec<i32>)> =
///     runs.into_iter().map(|s| (s.predicate_value, s.data)).collect();
/// assert_eq!(
///     shape,
///     vec![(false, vec![1, 3]), (true, vec![4, 6]), (false, vec![7])]
/// );
/// ```
pub fn segment_by<T, I, F>(items: I, mut predicate: F) -> Vec<Segment<T>>
where
    I: IntoIterator<Item = T>,
    F: FnMut(&T) -> bool,
{
    let mut out: Vec<Segment<T>> = Vec::new();
    let mut current: Option<Segment<T>> = None;

    for item in items {
        let value = predicate(&item);
        if let Some(run) = current.as_mut().filter(|run| run.predicate_value == value) {
            run.data.push(item);
            continue;
        }
        let next = Segment {
            predicate_value: value,
            data: vec![item],
        };
        if let Some(done) = current.replace(next) {
            out.push(done);
        }
    }

    out.extend(current);
    out
}
