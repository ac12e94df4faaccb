// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Per-pass segment state

/// Pocket and cluster-membership flags for every segment of one detection
/// pass, indexed by segment index.
///
/// Flags only ever go from `false` to `true`; there is no way to clear one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SegmentFlags {
    pocket: Vec<bool>,
    clustered: Vec<bool>,
}

impl SegmentFlags {
    pub fn new(segment_count: usize) -> Self {
        Self {
            pocket: vec![false; segment_count],
            clustered: vec![false; segment_count],
        }
    }

    pub fn len(&self) -> usize {
        self.pocket.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pocket.is_empty()
    }

    /// Out-of-range segments are never pockets
    pub fn is_pocket(&self, segment: usize) -> bool {
        self.pocket.get(segment).copied().unwrap_or(false)
    }

    /// Returns `true` if the flag was newly set
    pub fn mark_pocket(&mut self, segment: usize) -> bool {
        match self.pocket.get_mut(segment) {
            Some(flag) if !*flag => {
                *flag = true;
                true
            }
            _ => false,
        }
    }

    pub fn is_clustered(&self, segment: usize) -> bool {
        self.clustered.get(segment).copied().unwrap_or(false)
    }

    /// Returns `true` if the flag was newly set
    pub fn mark_clustered(&mut self, segment: usize) -> bool {
        match self.clustered.get_mut(segment) {
            Some(flag) if !*flag => {
                *flag = true;
                true
            }
            _ => false,
        }
    }

    pub fn pocket_flags(&self) -> &[bool] {
        &self.pocket
    }

    pub fn pocket_count(&self) -> usize {
        self.pocket.iter().filter(|&&f| f).count()
    }

    /// Indices of pocket segments in ascending order
    pub fn pocket_segments(&self) -> impl Iterator<Item = usize> + '_ {
        self.pocket
            .iter()
            .enumerate()
            .filter_map(|(index, &flag)| flag.then_some(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marks_are_sticky() {
        let mut flags = SegmentFlags::new(3);
        assert!(flags.mark_pocket(1));
        assert!(!flags.mark_pocket(1));
        assert!(flags.is_pocket(1));
        assert!(!flags.is_pocket(0));
        assert_eq!(flags.pocket_segments().collect::<Vec<_>>(), vec![1]);
        assert_eq!(flags.pocket_count(), 1);
    }

    #[test]
    fn test_out_of_range_ignored() {
        let mut flags = SegmentFlags::new(1);
        assert!(!flags.mark_pocket(4));
        assert!(!flags.is_pocket(4));
        assert!(!flags.mark_clustered(4));
        assert!(!flags.is_clustered(4));
    }
}
