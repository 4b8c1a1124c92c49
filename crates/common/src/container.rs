//! The max-area container sweep

use serde::Serialize;

/// The pair of lines enclosing the largest area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Container {
    pub left: usize,
    pub right: usize,
    /// The shorter of the two lines
    pub height: u32,
    pub width: usize,
    pub area: u64,
}

impl Container {
    fn between(heights: &[u32], left: usize, right: usize) -> Self {
        let height = heights[left].min(heights[right]);
        let width = right - left;
        Self {
            left,
            right,
            height,
            width,
            area: u64::from(height) * width as u64,
        }
    }
}

/// Largest area between any two lines; `0` for fewer than two lines.
pub fn max_area(heights: &[u32]) -> u64 {
    best_container(heights).map_or(0, |c| c.area)
}

/// Two-pointer sweep from both ends, moving the shorter side inward.
///
/// Ties move the left pointer. Returns the first pair reaching the maximum,
/// or `None` when there are fewer than two lines.
pub fn best_container(heights: &[u32]) -> Option<Container> {
    if heights.len() < 2 {
        return None;
    }

    let mut left = 0;
    let mut right = heights.len() - 1;
    let mut best = Container::between(heights, left, right);

    while left < right {
        let current = Container::between(heights, left, right);
        if current.area > best.area {
            best = current;
        }

        if heights[left] <= heights[right] {
            left += 1;
        } else {
            right -= 1;
        }
    }

    Some(best)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn brute_force(heights: &[u32]) -> u64 {
        let mut best = 0;
        for i in 0..heights.len() {
            for j in i + 1..heights.len() {
                let area = u64::from(heights[i].min(heights[j])) * (j - i) as u64;
                best = best.max(area);
            }
        }
        best
    }

    #[test]
    fn test_classic_example() {
        let heights = [1, 8, 6, 2, 5, 4, 8, 3, 7];
        assert_eq!(max_area(&heights), 49);

        let c = best_container(&heights).unwrap();
        assert_eq!((c.left, c.right), (1, 8));
        assert_eq!(c.height, 7);
        assert_eq!(c.width, 7);
    }

    #[test]
    fn test_two_lines() {
        assert_eq!(max_area(&[1, 2]), 1);
    }

    #[test]
    fn test_short_inputs() {
        assert_eq!(max_area(&[]), 0);
        assert_eq!(max_area(&[42]), 0);
        assert_eq!(best_container(&[42]), None);
    }

    #[test]
    fn test_all_zero() {
        for len in 2..12 {
            assert_eq!(max_area(&vec![0; len]), 0);
        }
    }

    #[test]
    fn test_large_uniform_input() {
        let heights = vec![10_000; 1000];
        assert_eq!(max_area(&heights), 10_000 * 999);
    }

    #[test]
    fn test_area_does_not_overflow() {
        let heights = vec![u32::MAX; 3];
        assert_eq!(max_area(&heights), u64::from(u32::MAX) * 2);
    }

    #[test]
    fn test_matches_brute_force() {
        // deterministic LCG
        let mut seed: u64 = 0x2545_f491_4f6c_dd1d;
        for _ in 0..200 {
            seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            let len = (seed >> 58) as usize + 1;
            let heights: Vec<u32> = (0..len)
                .map(|_| {
                    seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
                    ((seed >> 33) % 50) as u32
                })
                .collect();
            assert_eq!(max_area(&heights), brute_force(&heights), "heights: {:?}", heights);
        }
    }
}
