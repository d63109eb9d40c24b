use super::types::PartRange;

/// Selects character-balanced split points over a sequence of line lengths.
///
/// Given the per-line character lengths of a file and a target part count,
/// `partition` returns one contiguous line-index range per part such that
/// each part's character total is as close to `total / num_parts` as line
/// boundaries allow. The selection is deterministic: a boundary target
/// landing exactly between two lines rounds to the later line.
pub struct Partitioner {
    num_parts: usize,
}

impl Partitioner {
    /// Create a partitioner producing `num_parts` parts
    pub fn new(num_parts: usize) -> Self {
        Self { num_parts }
    }

    /// Partition `line_lengths.len()` lines into exactly `num_parts` ordered,
    /// contiguous, non-overlapping ranges covering every line.
    ///
    /// When fewer usable split points exist than parts requested (too few
    /// lines, or heavily skewed lengths), boundaries collapse and the
    /// trailing ranges come back empty; coverage is never compromised.
    pub fn partition(&self, line_lengths: &[usize]) -> Vec<PartRange> {
        let line_count = line_lengths.len();
        if line_count == 0 {
            // Empty input takes a distinct path: no split arithmetic at all
            return vec![PartRange::new(0, 0); self.num_parts];
        }

        let cumulative = cumulative_lengths(line_lengths);
        let candidates = boundary_candidates(&cumulative, self.num_parts);
        let mut boundaries = repair_monotonic(&candidates, line_count);

        // Collapse forced duplicates to the sorted set of distinct boundaries
        boundaries.sort_unstable();
        boundaries.dedup();

        ranges_from_boundaries(&boundaries, line_count, self.num_parts)
    }
}

/// Inclusive prefix sums: entry i is the total characters through line i.
pub(crate) fn cumulative_lengths(line_lengths: &[usize]) -> Vec<usize> {
    let mut cumulative = Vec::with_capacity(line_lengths.len());
    let mut running = 0usize;
    for &len in line_lengths {
        running += len;
        cumulative.push(running);
    }
    cumulative
}

/// Raw split-index candidates, one per interior boundary, in boundary order.
///
/// Candidate i is the index of the line whose cumulative length sits closest
/// to `i * total / num_parts`, found by a lower-bound search; an exact tie
/// between the two neighboring lines picks the later one. Candidates may
/// repeat or regress when targets crowd together; `repair_monotonic` fixes
/// that up afterwards.
pub(crate) fn boundary_candidates(cumulative: &[usize], num_parts: usize) -> Vec<usize> {
    let Some(&total_chars) = cumulative.last() else {
        return Vec::new();
    };
    let line_count = cumulative.len();
    let per_part = total_chars as f64 / num_parts as f64;

    let mut candidates = Vec::with_capacity(num_parts.saturating_sub(1));
    for i in 1..num_parts {
        let target = i as f64 * per_part;

        // First index whose cumulative length is >= target
        let pos = cumulative.partition_point(|&c| (c as f64) < target);

        let candidate = if pos == 0 {
            // Target falls at or before the first line
            0
        } else if pos == line_count {
            // Target beyond the last line; clamp
            line_count - 1
        } else {
            let above = (cumulative[pos] as f64 - target).abs();
            let below = (cumulative[pos - 1] as f64 - target).abs();
            if below < above {
                pos - 1
            } else {
                // Closer above, or equidistant: round up to the later line
                pos
            }
        };
        candidates.push(candidate);
    }
    candidates
}

/// Forces the raw candidate list into a usable boundary sequence.
///
/// Walks the candidates in order; one that fails to advance past the
/// previous boundary is bumped to the next line when a line remains, and
/// otherwise reuses the previous boundary (that boundary collapses and the
/// dedup step drops it).
pub(crate) fn repair_monotonic(candidates: &[usize], line_count: usize) -> Vec<usize> {
    let mut repaired: Vec<usize> = Vec::with_capacity(candidates.len());
    for &candidate in candidates {
        let boundary = match repaired.last() {
            Some(&prev) if candidate <= prev => {
                if prev + 1 < line_count {
                    prev + 1
                } else {
                    prev
                }
            }
            _ => candidate,
        };
        repaired.push(boundary);
    }
    repaired
}

/// Walks the deduplicated boundary list into exactly `num_parts` ranges.
///
/// Part k ends at boundary k (inclusive); once boundaries run out the next
/// part takes all remaining lines and every part after it is empty.
pub(crate) fn ranges_from_boundaries(
    boundaries: &[usize],
    line_count: usize,
    num_parts: usize,
) -> Vec<PartRange> {
    let mut ranges = Vec::with_capacity(num_parts);
    let mut start = 0usize;
    for part in 0..num_parts {
        let end = match boundaries.get(part) {
            Some(&boundary) => boundary + 1,
            None => line_count,
        };
        ranges.push(PartRange::new(start, end));
        start = end;
    }
    ranges
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cumulative_lengths() {
        assert_eq!(cumulative_lengths(&[10, 10, 10, 10]), vec![10, 20, 30, 40]);
        assert_eq!(cumulative_lengths(&[3, 1, 7]), vec![3, 4, 11]);
        assert!(cumulative_lengths(&[]).is_empty());
    }

    #[test]
    fn test_candidate_exact_match() {
        // Target 20 hits cumulative 20 exactly at index 1
        let cumulative = vec![10, 20, 30, 40];
        assert_eq!(boundary_candidates(&cumulative, 2), vec![1]);
    }

    #[test]
    fn test_candidate_rounds_to_closer_line() {
        // Total 11, target 5.5: cumulative [3, 4, 11] -> 4 is closer than 11
        let cumulative = vec![3, 4, 11];
        assert_eq!(boundary_candidates(&cumulative, 2), vec![1]);
    }

    #[test]
    fn test_candidate_tie_rounds_up() {
        // Lines of 6, 4, 6 chars: target 8 sits exactly between 6 and 10
        let cumulative = vec![6, 10, 16];
        assert_eq!(boundary_candidates(&cumulative, 2), vec![1]);
    }

    #[test]
    fn test_candidate_before_first_line() {
        // One huge first line pulls every target inside it
        let cumulative = vec![100, 101, 102, 103];
        let candidates = boundary_candidates(&cumulative, 4);
        assert_eq!(candidates[0], 0);
    }

    #[test]
    fn test_repair_bumps_and_reuses() {
        // Stuck candidates advance one line at a time while room remains
        assert_eq!(repair_monotonic(&[0, 0, 0, 0], 2), vec![0, 1, 1, 1]);
        // A regressing candidate is bumped past the previous boundary
        assert_eq!(repair_monotonic(&[2, 1, 5], 6), vec![2, 3, 5]);
        // Already strictly increasing input passes through untouched
        assert_eq!(repair_monotonic(&[1, 3, 4], 6), vec![1, 3, 4]);
    }

    #[test]
    fn test_ranges_walk_boundaries() {
        assert_eq!(
            ranges_from_boundaries(&[1], 4, 2),
            vec![PartRange::new(0, 2), PartRange::new(2, 4)]
        );
        // Exhausted boundaries leave trailing empty ranges
        assert_eq!(
            ranges_from_boundaries(&[0, 1], 2, 5),
            vec![
                PartRange::new(0, 1),
                PartRange::new(1, 2),
                PartRange::new(2, 2),
                PartRange::new(2, 2),
                PartRange::new(2, 2),
            ]
        );
    }
}
