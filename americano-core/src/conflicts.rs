//! Partnership and opponent history used while building a schedule
//!
//! Players are addressed by roster position. History is kept in two flat
//! n x n boolean matrices, so lookups are a single index operation.

/// Per-player partner and opponent history for one generation run
#[derive(Clone, Debug)]
pub struct ConflictTracker {
    n: usize,
    partners: Vec<bool>,
    opponents: Vec<bool>,
}

impl ConflictTracker {
    /// Empty history for `n` players
    pub fn new(n: usize) -> Self {
        Self {
            n,
            partners: vec![false; n * n],
            opponents: vec![false; n * n],
        }
    }

    /// Number of tracked players
    pub fn len(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    #[inline]
    fn cell(&self, a: usize, b: usize) -> usize {
        a * self.n + b
    }

    /// Whether `a` and `b` have already played on the same team
    #[inline]
    pub fn have_partnered(&self, a: usize, b: usize) -> bool {
        self.partners[self.cell(a, b)]
    }

    /// Whether `a` and `b` have already faced each other
    #[inline]
    pub fn have_opposed(&self, a: usize, b: usize) -> bool {
        self.opponents[self.cell(a, b)]
    }

    /// Repeat count for a candidate match, 0-6
    ///
    /// One point per team that already partnered, one per cross-team pair
    /// that already opposed.
    pub fn conflict_score(&self, team1: [usize; 2], team2: [usize; 2]) -> u32 {
        let mut score = u32::from(self.have_partnered(team1[0], team1[1]));
        score += u32::from(self.have_partnered(team2[0], team2[1]));
        for &a in &team1 {
            for &b in &team2 {
                score += u32::from(self.have_opposed(a, b));
            }
        }
        score
    }

    /// Record a committed match
    pub fn record_match(&mut self, team1: [usize; 2], team2: [usize; 2]) {
        for team in [team1, team2] {
            let (a, b) = (team[0], team[1]);
            let ab = self.cell(a, b);
            let ba = self.cell(b, a);
            self.partners[ab] = true;
            self.partners[ba] = true;
        }
        for &a in &team1 {
            for &b in &team2 {
                let ab = self.cell(a, b);
                let ba = self.cell(b, a);
                self.opponents[ab] = true;
                self.opponents[ba] = true;
            }
        }
    }

    /// Positions `player` has partnered so far
    pub fn partners_of(&self, player: usize) -> impl Iterator<Item = usize> + '_ {
        (0..self.n).filter(move |&other| self.have_partnered(player, other))
    }

    /// Positions `player` has opposed so far
    pub fn opponents_of(&self, player: usize) -> impl Iterator<Item = usize> + '_ {
        (0..self.n).filter(move |&other| self.have_opposed(player, other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_tracker_has_no_conflicts() {
        let tracker = ConflictTracker::new(8);
        assert_eq!(tracker.len(), 8);
        assert_eq!(tracker.conflict_score([0, 1], [2, 3]), 0);
        assert_eq!(tracker.partners_of(0).count(), 0);
    }

    #[test]
    fn test_record_match_is_symmetric() {
        let mut tracker = ConflictTracker::new(4);
        tracker.record_match([0, 1], [2, 3]);

        assert!(tracker.have_partnered(0, 1));
        assert!(tracker.have_partnered(1, 0));
        assert!(tracker.have_partnered(3, 2));
        assert!(!tracker.have_partnered(0, 2));

        assert!(tracker.have_opposed(0, 2));
        assert!(tracker.have_opposed(3, 1));
        assert!(!tracker.have_opposed(0, 1));
        assert!(!tracker.have_opposed(2, 3));
    }

    #[test]
    fn test_conflict_score_range() {
        let mut tracker = ConflictTracker::new(4);
        tracker.record_match([0, 1], [2, 3]);

        // Same split again: both teams repeat, all four cross pairs repeat
        assert_eq!(tracker.conflict_score([0, 1], [2, 3]), 6);
        // 0+2 vs 1+3: no repeated partner, 0-1 and 2-3 were partners not opponents
        assert_eq!(tracker.conflict_score([0, 2], [1, 3]), 2);
    }

    #[test]
    fn test_never_tracks_self() {
        let mut tracker = ConflictTracker::new(8);
        tracker.record_match([0, 1], [2, 3]);
        tracker.record_match([4, 5], [6, 7]);
        tracker.record_match([0, 4], [1, 5]);

        for p in 0..8 {
            assert!(tracker.partners_of(p).all(|q| q != p));
            assert!(tracker.opponents_of(p).all(|q| q != p));
        }
        assert_eq!(tracker.opponents_of(0).collect::<Vec<_>>(), vec![1, 2, 3, 5]);
    }
}
